//! DubHub API server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p dubhub-api
//! ```
//!
//! Configuration is loaded from environment variables (and `.env`).

use dubhub_common::{try_init_tracing_with_config, AppConfig, Environment, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!(error = %e, "Server failed to start");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env();

    let env = config.as_ref().map_or(Environment::default(), |c| c.app.env);
    if let Err(e) = try_init_tracing_with_config(TracingConfig::for_environment(env)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    let config = config.map_err(|e| {
        error!(error = %e, "Failed to load configuration");
        e
    })?;

    info!(
        env = ?config.app.env,
        address = %config.api.address(),
        "Starting DubHub API server"
    );

    dubhub_api::run(config).await?;

    Ok(())
}
