use crate::{AppState, build_router, config::Config};
use axum::Router;
use std::{future::Future, io};
use thiserror::Error;
use tokio::{net::TcpListener, signal};
use tracing::{error, info, warn};

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to bind {addr}: {source}")]
    Bind { addr: String, source: io::Error },

    #[error("server error: {0}")]
    Serve(#[from] io::Error),
}

/// Binds the configured address and serves until Ctrl+C or SIGTERM.
pub async fn serve(config: Config) -> Result<(), ServerError> {
    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.clone(),
            source,
        })?;

    let state = AppState::from_config(&config);
    if state.auth_enabled() {
        info!("Auth token configured, /health requires ?token=");
    } else {
        warn!("No auth token configured, /health is open");
    }

    let local_addr = listener.local_addr()?;
    info!("Server running on http://{}", local_addr);
    info!("API Endpoints:");
    info!("  GET    /health           - Health check (token-gated when configured)");
    info!("  GET    /time             - Current time (RFC 3339, UTC)");

    run(listener, build_router(state), shutdown_signal()).await
}

/// Serves `app` on an already-bound listener until `shutdown` resolves,
/// then drains in-flight requests.
pub async fn run<F>(listener: TcpListener, app: Router, shutdown: F) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Resolves on Ctrl+C, or SIGTERM on Unix.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                error!("Failed to install SIGTERM handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            info!("Received terminate signal");
        },
    }

    info!("Shutting down gracefully...");
}
