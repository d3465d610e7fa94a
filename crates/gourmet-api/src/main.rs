//! Gourmet API server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p gourmet-api --bin gourmet-api
//! ```
//!
//! Configuration is loaded from environment variables or a `.env` file.

use gourmet_common::{try_init_tracing, AppConfig, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Load .env before tracing reads APP_ENV and RUST_LOG
    let _ = dotenvy::dotenv();

    // Initialize tracing
    if let Err(e) = try_init_tracing(&TracingConfig::from_env()) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    // Run the server
    if let Err(e) = run().await {
        error!(error = %e, "Server failed to start");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    info!("Starting Gourmet API Server...");

    // Load configuration
    let config = AppConfig::from_env().map_err(|e| {
        error!(error = %e, "Failed to load configuration");
        e
    })?;

    info!(
        env = ?config.app.env,
        address = %config.api.address(),
        "Configuration loaded"
    );

    gourmet_api::run(config).await?;

    Ok(())
}
