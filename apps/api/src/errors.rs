use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every variant is a client error and renders as
/// `{"success": false, "error": <message>, "code": <CODE>}`.
#[derive(Debug, Error, PartialEq)]
pub enum AppError {
    #[error("Only POST method allowed")]
    MethodNotAllowed,

    #[error("{0}")]
    MissingInput(String),

    #[error("Invalid profile. Must be '1. praktik', '2. praktik', or '3. praktik'")]
    InvalidProfile,

    #[error("Only PDF files are allowed")]
    InvalidFileType,

    #[error("File too large. Maximum size is {}", format_ceiling(.max_bytes))]
    FileTooLarge { max_bytes: u64 },

    #[error("{0}")]
    Validation(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::MissingInput(_) | AppError::InvalidProfile | AppError::Validation(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::InvalidFileType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            AppError::FileTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            AppError::MissingInput(_) => "MISSING_INPUT",
            AppError::InvalidProfile => "INVALID_PROFILE",
            AppError::InvalidFileType => "INVALID_FILE_TYPE",
            AppError::FileTooLarge { .. } => "FILE_TOO_LARGE",
            AppError::Validation(_) => "VALIDATION_ERROR",
        }
    }
}

/// Renders a byte ceiling the way users read it: whole MB, else whole KB, else bytes.
fn format_ceiling(max_bytes: &u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = 1024 * 1024;
    let max_bytes = *max_bytes;
    if max_bytes >= MB && max_bytes % MB == 0 {
        format!("{}MB", max_bytes / MB)
    } else if max_bytes >= KB && max_bytes % KB == 0 {
        format!("{}KB", max_bytes / KB)
    } else {
        format!("{max_bytes} bytes")
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.code();
        let message = self.to_string();

        tracing::warn!(status = status.as_u16(), code, "Request rejected: {message}");

        let body = Json(json!({
            "success": false,
            "error": message,
            "code": code
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[test]
    fn test_file_too_large_message_uses_megabytes() {
        let err = AppError::FileTooLarge {
            max_bytes: 10 * 1024 * 1024,
        };
        assert_eq!(err.to_string(), "File too large. Maximum size is 10MB");
    }

    #[test]
    fn test_file_too_large_message_falls_back_to_kilobytes_and_bytes() {
        assert_eq!(
            AppError::FileTooLarge { max_bytes: 1536 * 1024 }.to_string(),
            "File too large. Maximum size is 1536KB"
        );
        assert_eq!(
            AppError::FileTooLarge { max_bytes: 100 }.to_string(),
            "File too large. Maximum size is 100 bytes"
        );
    }

    #[test]
    fn test_every_variant_is_a_client_error() {
        let errors = [
            AppError::MethodNotAllowed,
            AppError::MissingInput("x".to_string()),
            AppError::InvalidProfile,
            AppError::InvalidFileType,
            AppError::FileTooLarge { max_bytes: 1 },
            AppError::Validation("x".to_string()),
        ];
        for err in errors {
            assert!(err.status().is_client_error(), "{err:?} must be 4xx");
        }
    }

    #[tokio::test]
    async fn test_envelope_shape_for_invalid_profile() {
        let (status, body) = body_json(AppError::InvalidProfile).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert_eq!(body["code"], "INVALID_PROFILE");
        assert!(body["error"]
            .as_str()
            .unwrap()
            .starts_with("Invalid profile"));
    }

    #[tokio::test]
    async fn test_envelope_carries_distinct_statuses() {
        let (status, body) = body_json(AppError::InvalidFileType).await;
        assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert_eq!(body["error"], "Only PDF files are allowed");

        let (status, _) = body_json(AppError::MethodNotAllowed).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    }
}
