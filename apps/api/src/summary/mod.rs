// Curriculum summaries: multipart upload metadata, validation and the canned template.
// Document bytes are counted while streaming and never inspected.

pub mod handlers;
pub mod renderer;
pub mod templates;
pub mod upload;
