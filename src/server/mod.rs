//! JSON HTTP front end over the prompt pipeline.

pub mod config;
pub mod error;
pub mod handlers;

use anyhow::{Context, Result};
use tokio::signal;
use tracing::{info, warn};

pub use config::ServerConfig;
pub use error::{ApiError, ApiResult};
pub use handlers::{create_router, AppState, PromptRequest};

/// Bind and serve until Ctrl+C.
pub async fn serve(config: &ServerConfig, state: AppState) -> Result<()> {
    config.validate().map_err(anyhow::Error::msg).context("Invalid server config")?;
    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port))
        .await
        .with_context(|| format!("Failed to bind to {}:{}", config.host, config.port))?;

    info!("Server listening on: {}", config.server_url());

    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        warn!("Failed to install Ctrl+C handler: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Received shutdown signal");
}
