//! Africa Market API server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p market-api
//! ```
//!
//! Configuration is loaded from environment variables (a `.env` file is
//! honored when present).

use market_common::{try_init_tracing, try_init_tracing_with_config, AppConfig, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Run the server
    if let Err(e) = run().await {
        error!(error = %e, "Server failed to start");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = AppConfig::from_env()?;

    // Initialize tracing (JSON output in production)
    let tracing_result = if config.app.env.is_production() {
        try_init_tracing_with_config(&TracingConfig::production())
    } else {
        try_init_tracing()
    };
    if let Err(e) = tracing_result {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    info!("Starting Africa Market API server...");
    info!(
        env = ?config.app.env,
        port = config.server.port,
        "Configuration loaded"
    );

    // Run the server
    market_api::run(config).await?;

    Ok(())
}
