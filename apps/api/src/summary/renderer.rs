//! Summary renderer — validates upload metadata and fills the summary template.

use crate::config::UploadLimits;
use crate::errors::AppError;
use crate::models::{SummaryResult, UploadedDocument, ACCEPTED_CONTENT_TYPE};
use crate::summary::templates::SUMMARY_TEMPLATE;

/// Renders the canned summary for an uploaded document.
///
/// Checks run in order: presence, declared content type, size ceiling.
pub fn render_summary(
    document: Option<&UploadedDocument>,
    limits: &UploadLimits,
) -> Result<SummaryResult, AppError> {
    let document =
        document.ok_or_else(|| AppError::MissingInput("No file uploaded".to_string()))?;

    if document.declared_content_type != ACCEPTED_CONTENT_TYPE {
        return Err(AppError::InvalidFileType);
    }

    if let Some(max_bytes) = limits.max_bytes {
        if document.byte_size > max_bytes {
            return Err(AppError::FileTooLarge { max_bytes });
        }
    }

    // size first: a file name may itself contain "{size_kb}"
    let summary = SUMMARY_TEMPLATE
        .replace("{size_kb}", &document.size_kb().to_string())
        .replace("{filename}", &document.name);

    Ok(SummaryResult {
        summary,
        filename: document.name.clone(),
        size: document.byte_size,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pdf(name: &str, byte_size: u64) -> UploadedDocument {
        UploadedDocument {
            name: name.to_string(),
            byte_size,
            declared_content_type: "application/pdf".to_string(),
        }
    }

    fn limits(max_bytes: Option<u64>) -> UploadLimits {
        UploadLimits { max_bytes }
    }

    #[test]
    fn test_missing_document_is_rejected() {
        let err = render_summary(None, &UploadLimits::default()).unwrap_err();
        assert_eq!(err, AppError::MissingInput("No file uploaded".to_string()));
    }

    #[test]
    fn test_non_pdf_content_types_are_rejected() {
        for content_type in ["text/plain", "", "application/PDF", "application/pdf; charset=x"] {
            let doc = UploadedDocument {
                declared_content_type: content_type.to_string(),
                ..pdf("plan.pdf", 10)
            };
            let err = render_summary(Some(&doc), &UploadLimits::default()).unwrap_err();
            assert_eq!(err, AppError::InvalidFileType, "'{content_type}' must be rejected");
        }
    }

    #[test]
    fn test_content_type_checked_before_size() {
        let doc = UploadedDocument {
            declared_content_type: "image/png".to_string(),
            ..pdf("huge.png", u64::MAX)
        };
        let err = render_summary(Some(&doc), &UploadLimits::default()).unwrap_err();
        assert_eq!(err, AppError::InvalidFileType);
    }

    #[test]
    fn test_oversized_document_is_rejected() {
        let err = render_summary(Some(&pdf("plan.pdf", 1025)), &limits(Some(1024))).unwrap_err();
        assert_eq!(err, AppError::FileTooLarge { max_bytes: 1024 });
    }

    #[test]
    fn test_document_at_ceiling_is_accepted() {
        let result = render_summary(Some(&pdf("plan.pdf", 1024)), &limits(Some(1024))).unwrap();
        assert_eq!(result.size, 1024);
    }

    #[test]
    fn test_disabled_ceiling_accepts_any_size() {
        let result =
            render_summary(Some(&pdf("plan.pdf", 50 * 1024 * 1024)), &limits(None)).unwrap();
        assert_eq!(result.size, 50 * 1024 * 1024);
    }

    #[test]
    fn test_summary_interpolates_name_and_size() {
        let result = render_summary(
            Some(&pdf("læreplan_2024.pdf", 3 * 1024 + 600)),
            &UploadLimits::default(),
        )
        .unwrap();
        assert!(result
            .summary
            .starts_with("📋 LÆREPLAN OPSUMMERING (læreplan_2024.pdf)"));
        assert!(result.summary.contains("• Filnavn: læreplan_2024.pdf"));
        assert!(result.summary.contains("• Størrelse: 4 KB"));
        assert_eq!(result.filename, "læreplan_2024.pdf");
        assert_eq!(result.size, 3 * 1024 + 600);
    }

    #[test]
    fn test_placeholder_in_filename_is_left_alone() {
        let result =
            render_summary(Some(&pdf("{size_kb}.pdf", 2048)), &UploadLimits::default()).unwrap();
        assert!(result.summary.contains("• Filnavn: {size_kb}.pdf"));
        assert!(result.summary.contains("• Størrelse: 2 KB"));
    }
}
