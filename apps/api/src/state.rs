use std::sync::Arc;

use crate::config::Config;
use crate::suggestion::picker::ActivityPicker;

/// Shared application state injected into all route handlers via Axum extractors.
/// Immutable after startup; nothing here is written per request.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable activity picker. Default: UniformPicker. Tests pin it with FixedPicker.
    pub picker: Arc<dyn ActivityPicker>,
}
