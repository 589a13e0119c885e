//! Sail Build install-script server
//!
//! Main binary for running the service in production or development.
//!
//! # Environment Variables
//!
//! - `API_PORT`: Port to listen on (default: 8080)
//! - `API_HOST`: Host to bind to (default: 0.0.0.0)
//! - `TEMPLATE_PATH`: Override the bundled install-script template
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::fs;

use anyhow::Context;

use sail_build_api::{ApiConfig, ApiServer, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()))
        .init();

    // Load configuration from environment
    let config = ApiConfig::from_env()?;

    let state = match env::var("TEMPLATE_PATH") {
        Ok(path) => {
            let template = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read script template from {path}"))?;
            tracing::info!("Using script template from {}", path);
            AppState::new(template)
        }
        Err(_) => AppState::default(),
    };

    let server = ApiServer::new(config, state);

    tracing::info!("Starting Sail Build API server");

    // Start server with graceful shutdown
    server.serve().await
}
