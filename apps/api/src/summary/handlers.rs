//! Axum route handler for the summary operation.

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};
use tracing::info;

use crate::envelope::Success;
use crate::errors::AppError;
use crate::models::SummaryResult;
use crate::state::AppState;
use crate::summary::renderer::render_summary;
use crate::summary::upload::read_document;

/// POST /api/v1/opsummering
///
/// Accepts a multipart form with a `file` field and returns the canned
/// curriculum summary with the document's name and size echoed back.
pub async fn handle_summarize(
    State(state): State<AppState>,
    payload: Result<Multipart, MultipartRejection>,
) -> Result<Json<Success<SummaryResult>>, AppError> {
    let multipart = payload.map_err(|rejection| AppError::Validation(rejection.body_text()))?;

    let limits = state.config.upload;
    let document = read_document(multipart, &limits).await?;
    let result = render_summary(document.as_ref(), &limits)?;

    info!(
        filename = %result.filename,
        size = result.size,
        "Rendered curriculum summary"
    );
    Ok(Json(Success::new(result)))
}
