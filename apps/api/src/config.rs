use anyhow::{Context, Result};
use thiserror::Error;

/// Default upload ceiling: 10 MiB.
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("MAX_UPLOAD_BYTES must be a byte count, 0 or 'off' (got '{0}')")]
    InvalidUploadLimit(String),

    #[error("PINNED_ACTIVITY must be a non-negative activity index (got '{0}')")]
    InvalidPinnedActivity(String),
}

/// Application configuration loaded from environment variables.
/// Startup aborts if a variable is present but malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub upload: UploadLimits,
    /// When set, every suggestion uses the activity at this index instead of a random draw.
    pub pinned_activity: Option<usize>,
}

/// Size policy for uploaded documents. `None` disables the ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadLimits {
    pub max_bytes: Option<u64>,
}

impl Default for UploadLimits {
    fn default() -> Self {
        UploadLimits {
            max_bytes: Some(DEFAULT_MAX_UPLOAD_BYTES),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let max_bytes = match std::env::var("MAX_UPLOAD_BYTES") {
            Ok(raw) => parse_upload_limit(&raw)?,
            Err(_) => Some(DEFAULT_MAX_UPLOAD_BYTES),
        };

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            upload: UploadLimits { max_bytes },
            pinned_activity: std::env::var("PINNED_ACTIVITY")
                .ok()
                .map(|raw| parse_pinned_activity(&raw))
                .transpose()?,
        })
    }
}

/// Parses `MAX_UPLOAD_BYTES`. `0` and `off` disable the ceiling.
pub fn parse_upload_limit(raw: &str) -> Result<Option<u64>, ConfigError> {
    let trimmed = raw.trim();
    if trimmed.eq_ignore_ascii_case("off") {
        return Ok(None);
    }
    match trimmed.parse::<u64>() {
        Ok(0) => Ok(None),
        Ok(n) => Ok(Some(n)),
        Err(_) => Err(ConfigError::InvalidUploadLimit(raw.to_string())),
    }
}

fn parse_pinned_activity(raw: &str) -> Result<usize, ConfigError> {
    raw.trim()
        .parse::<usize>()
        .map_err(|_| ConfigError::InvalidPinnedActivity(raw.to_string()))
}
