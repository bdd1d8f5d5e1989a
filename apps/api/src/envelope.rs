use serde::Serialize;

/// Success envelope: `{"success": true, ...body fields}`.
///
/// Failures never pass through here; `AppError` renders its own
/// `{"success": false, "error": ...}` body.
#[derive(Debug, Serialize)]
pub struct Success<T: Serialize> {
    success: bool,
    #[serde(flatten)]
    body: T,
}

impl<T: Serialize> Success<T> {
    pub fn new(body: T) -> Self {
        Success {
            success: true,
            body,
        }
    }
}
