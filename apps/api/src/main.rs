mod config;
mod envelope;
mod errors;
mod models;
mod routes;
mod state;
mod suggestion;
mod summary;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::models::ProfileKey;
use crate::routes::build_router;
use crate::state::AppState;
use crate::suggestion::picker::{ActivityPicker, FixedPicker, UniformPicker};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Læringsplan API v{}", env!("CARGO_PKG_VERSION"));

    match config.upload.max_bytes {
        Some(max) => info!("Upload ceiling: {max} bytes"),
        None => info!("Upload ceiling disabled"),
    }

    // Random draw by default; PINNED_ACTIVITY fixes it for demos and reproducible output.
    let picker: Arc<dyn ActivityPicker> = match config.pinned_activity {
        Some(index) => {
            info!("Activity picker pinned to index {index}");
            if let Some(wrapped) = ProfileKey::wrapped_activity_index(index) {
                warn!(
                    "PINNED_ACTIVITY={index} is past the end of an activity list; \
                     it wraps to index {wrapped}"
                );
            }
            Arc::new(FixedPicker(index))
        }
        None => Arc::new(UniformPicker),
    };

    let state = AppState {
        config: config.clone(),
        picker,
    };

    let app = build_router(state);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
