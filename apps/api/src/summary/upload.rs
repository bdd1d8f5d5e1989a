//! Multipart upload reading. Only metadata survives: file name, declared
//! content type and byte count.
//!
//! The summary route runs without a transport body limit; both budgets below
//! are enforced here while streaming, after the part headers have been read.

use axum::extract::multipart::{Field, Multipart, MultipartError};
use tracing::debug;

use crate::config::UploadLimits;
use crate::errors::AppError;
use crate::models::UploadedDocument;

/// Form field carrying the curriculum document.
pub const FILE_FIELD: &str = "file";

/// Combined size allowed for form fields other than `file`, which are read and discarded.
pub const OTHER_FIELDS_BUDGET: u64 = 64 * 1024;

/// Reads the first `file` field of the form, counting its bytes.
///
/// Counting stops as soon as the ceiling is passed, so the reported size of an
/// oversized upload is only guaranteed to exceed it. The size verdict itself is
/// left to `render_summary`, which checks the content type first.
///
/// Other fields are drained; if together they exceed `OTHER_FIELDS_BUDGET` the
/// form is rejected as `Validation`, never as `FileTooLarge`.
/// Returns `None` when the form has no `file` field.
pub async fn read_document(
    mut multipart: Multipart,
    limits: &UploadLimits,
) -> Result<Option<UploadedDocument>, AppError> {
    let mut other_bytes: u64 = 0;

    while let Some(mut field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(FILE_FIELD) {
            let remaining = OTHER_FIELDS_BUDGET - other_bytes;
            let counted = count_bytes(&mut field, Some(remaining)).await?;
            other_bytes = other_bytes.saturating_add(counted);
            if other_bytes > OTHER_FIELDS_BUDGET {
                return Err(AppError::Validation(format!(
                    "Form fields other than '{FILE_FIELD}' exceed {}KB",
                    OTHER_FIELDS_BUDGET / 1024
                )));
            }
            continue;
        }

        let name = field.file_name().unwrap_or_default().to_string();
        let declared_content_type = field.content_type().unwrap_or_default().to_string();
        let byte_size = count_bytes(&mut field, limits.max_bytes).await?;

        debug!(
            filename = %name,
            content_type = %declared_content_type,
            byte_size,
            "Read uploaded document"
        );

        return Ok(Some(UploadedDocument {
            name,
            byte_size,
            declared_content_type,
        }));
    }

    Ok(None)
}

/// Counts the field's bytes, stopping once the count passes `max_bytes`.
async fn count_bytes(field: &mut Field<'_>, max_bytes: Option<u64>) -> Result<u64, AppError> {
    let mut total: u64 = 0;
    while let Some(chunk) = field.chunk().await.map_err(multipart_error)? {
        total = total.saturating_add(chunk.len() as u64);
        if max_bytes.is_some_and(|max| total > max) {
            break;
        }
    }
    Ok(total)
}

fn multipart_error(e: MultipartError) -> AppError {
    AppError::Validation(format!("Invalid multipart body: {}", e.body_text()))
}
