//! Division API - A minimal JSON HTTP service
//!
//! Divides two numbers over `POST /divide`, with health and documentation endpoints.

use anyhow::Context;
use tokio::signal;
use tracing::info;

use division_api::{create_router, logging::init_logging, Config};

/// Main entry point for the Division API server.
///
/// # Startup Sequence
/// 1. Load configuration from environment variables
/// 2. Initialize console and file logging
/// 3. Create Axum router with all endpoints
/// 4. Start HTTP server on configured address
/// 5. Handle graceful shutdown on SIGINT/SIGTERM
///
/// Only startup failures end the process; per-request errors are answered
/// by the handlers.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env();

    // Held until the end of main so the file sink is flushed on exit
    let _log_guard = init_logging(&config)?;

    info!("Starting Division API Server...");
    info!(
        "Configuration loaded: host={}, port={}, log_file={}, rotation={:?}",
        config.server_host,
        config.server_port,
        config.log_dir.join(&config.log_file).display(),
        config.log_rotation
    );

    let app = create_router();

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }
}
