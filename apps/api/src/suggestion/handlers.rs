//! Axum route handler for the suggestion operation.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Deserialize;
use tracing::info;

use crate::envelope::Success;
use crate::errors::AppError;
use crate::models::SuggestionResult;
use crate::state::AppState;
use crate::suggestion::renderer::render_suggestion;

/// Absent and `null` fields deserialize to `None` and are reported as missing input.
#[derive(Debug, Deserialize)]
pub struct SuggestionRequest {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub profile: Option<String>,
}

/// POST /api/v1/forslag
///
/// Returns a canned activity suggestion for the requested practice profile.
pub async fn handle_suggest(
    State(state): State<AppState>,
    payload: Result<Json<SuggestionRequest>, JsonRejection>,
) -> Result<Json<Success<SuggestionResult>>, AppError> {
    let Json(request) = payload.map_err(|rejection| AppError::Validation(rejection.body_text()))?;

    let result = render_suggestion(
        request.text.as_deref().unwrap_or_default(),
        request.profile.as_deref().unwrap_or_default(),
        state.picker.as_ref(),
    )?;

    info!(profile = %result.profile, "Rendered activity suggestion");
    Ok(Json(Success::new(result)))
}
