pub mod document;
pub mod profile;

pub use document::{SummaryResult, UploadedDocument, ACCEPTED_CONTENT_TYPE};
pub use profile::{ProfileKey, SuggestionResult};
