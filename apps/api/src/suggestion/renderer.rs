//! Suggestion renderer — validates the request, looks up the profile record,
//! draws an activity and fills the suggestion template.

use crate::errors::AppError;
use crate::models::{ProfileKey, SuggestionResult};
use crate::suggestion::picker::ActivityPicker;
use crate::suggestion::templates::SUGGESTION_TEMPLATE;

const MISSING_INPUT_MESSAGE: &str = "Both 'text' and 'profile' are required";

/// Renders an activity suggestion for `profile`.
///
/// `text` is the curriculum text the user pasted. It must be present but the
/// canned suggestion does not depend on it. Whitespace-only `text` or
/// `profile` also counts as missing, a tightening over a plain emptiness check.
pub fn render_suggestion(
    text: &str,
    profile: &str,
    picker: &dyn ActivityPicker,
) -> Result<SuggestionResult, AppError> {
    if text.trim().is_empty() || profile.trim().is_empty() {
        return Err(AppError::MissingInput(MISSING_INPUT_MESSAGE.to_string()));
    }

    let key: ProfileKey = profile.parse()?;
    let record = key.record();
    let activity = picker.pick(record.activities);

    let suggestion = SUGGESTION_TEMPLATE
        .replace("{profile_upper}", &key.as_str().to_uppercase())
        .replace("{focus_area}", record.focus_area)
        .replace("{competency_goal}", record.competency_goal)
        .replace("{activity}", activity)
        .replace("{focus_area_lower}", &record.focus_area.to_lowercase());

    Ok(SuggestionResult {
        suggestion,
        profile: key,
    })
}
