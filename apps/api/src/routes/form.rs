use axum::response::Html;

/// The single-page form, compiled into the binary.
const FORM_HTML: &str = include_str!("../../static/index.html");

/// GET /
pub async fn form_handler() -> Html<&'static str> {
    Html(FORM_HTML)
}
