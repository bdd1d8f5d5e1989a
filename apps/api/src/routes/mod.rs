pub mod form;
pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    http::{header, Method},
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::errors::AppError;
use crate::state::AppState;
use crate::suggestion::handlers::handle_suggest;
use crate::summary::handlers::handle_summarize;

async fn method_not_allowed() -> Result<(), AppError> {
    Err(AppError::MethodNotAllowed)
}

/// Answers every OPTIONS request (pre-flight or not) with an empty 200 before
/// routing, and stamps the same headers on all other responses.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(form::form_handler))
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/forslag",
            post(handle_suggest).fallback(method_not_allowed),
        )
        .route(
            "/api/v1/opsummering",
            // Upload size is enforced while streaming, see `summary::upload`.
            post(handle_summarize)
                .fallback(method_not_allowed)
                .layer(DefaultBodyLimit::disable()),
        )
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer()),
        )
        .with_state(state)
}
