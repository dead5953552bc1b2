//! AI Engine Server - scoring models over HTTP
//!
//! # Usage
//! ```sh
//! PORT=5001 cargo run --bin server
//! ```
//!
//! # Environment Variables
//! - `HOST` - Bind address (default: 0.0.0.0)
//! - `PORT` - Bind port (default: 5001)
//! - `FRAUD_NOISE_ENABLED` - Add the random term to fraud scores (default: true)
//! - `FRAUD_NOISE_SEED` - Seed the fraud noise for reproducible scores (default: unset)

use ai_engine::application::engine::ScoringEngine;
use ai_engine::config::Config;
use ai_engine::interfaces::http;
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::{Level, info};
use tracing_subscriber::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let stdout_layer = tracing_subscriber::fmt::layer().with_target(false);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(stdout_layer)
        .init();

    info!("AI Engine {} starting...", env!("CARGO_PKG_VERSION"));

    let config = Config::from_env()?;
    info!(
        "Configuration loaded: bind={}, fraud_noise_enabled={}, fraud_noise_seed={:?}",
        config.bind_addr(),
        config.fraud_noise_enabled,
        config.fraud_noise_seed
    );

    let engine = Arc::new(ScoringEngine::standard(config.noise_source()));
    info!("Available models: {:?}", engine.model_names());

    let app = http::router(engine);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("Server stopped.");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for ctrl+c: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received. Exiting...");
}
