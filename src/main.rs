// ============================================================================
// STATUS API
// ============================================================================

// - GET /health, optionally gated by a shared token
// - GET /time, current instant in RFC 3339
// - Configuration from environment / .env
// - Structured request tracing
// - Graceful shutdown

use status_api::{Config, server};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env first so RUST_LOG from it applies to the subscriber
    let dotenv = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("status_api=info,tower_http=info")),
        )
        .with_target(false)
        .compact()
        .init();

    match dotenv {
        Ok(path) => info!("Loaded environment variables from {}", path.display()),
        Err(_) => info!("No .env file found, using system environment variables"),
    }

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!("Invalid configuration: {}", err);
            return ExitCode::FAILURE;
        }
    };

    match server::serve(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
