use serde::Serialize;

/// The only content type accepted for curriculum uploads.
pub const ACCEPTED_CONTENT_TYPE: &str = "application/pdf";

/// Metadata of an uploaded curriculum document. The bytes themselves are never kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedDocument {
    pub name: String,
    pub byte_size: u64,
    pub declared_content_type: String,
}

impl UploadedDocument {
    /// Size rounded to the nearest kilobyte, halves rounding up.
    pub fn size_kb(&self) -> u64 {
        self.byte_size.saturating_add(512) / 1024
    }
}

/// Rendered summary plus the echoed document metadata.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryResult {
    pub summary: String,
    pub filename: String,
    pub size: u64,
}
