//! Split Ledger - API Server Binary
//!
//! This binary starts the HTTP API server for shared expense sessions.
//!
//! # Usage
//!
//! ```bash
//! # Run with default configuration
//! cargo run --bin split-ledger-api
//!
//! # Run with environment variables
//! API_HOST=127.0.0.1 API_PORT=3000 API_CURRENCY=EUR cargo run --bin split-ledger-api
//! ```
//!
//! # Environment Variables
//!
//! * `API_HOST` - Server host (default: 0.0.0.0)
//! * `API_PORT` - Server port (default: 8080)
//! * `API_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)
//! * `API_CURRENCY` - Default session currency (default: USD)
//! * `API_ROUNDING_POLICY` - `per_share` or `absorb_remainder` (default: per_share)
//! * `API_RECEIPT_LINES_PER_PAGE` - Body lines per receipt page (default: 40)
//! * `API_EXPORT_DIR` - Directory for receipt files (default: OS temp dir)
//! * `API_MAX_SESSIONS` - Maximum open sessions (default: 1024)

use interface_api::{create_router, config::ApiConfig};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Main entry point for the API server.
///
/// # Errors
///
/// Returns an error if the server fails to bind to the configured address.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let (config, config_error) = match ApiConfig::from_env() {
        Ok(config) => (config, None),
        Err(e) => (ApiConfig::default(), Some(e)),
    };

    init_tracing(&config.log_level);

    if let Some(e) = config_error {
        tracing::warn!(error = %e, "Invalid environment configuration, using defaults");
    }

    tracing::info!(
        host = %config.host,
        port = %config.port,
        currency = %config.currency,
        rounding_policy = ?config.rounding_policy,
        "Starting Split Ledger API Server"
    );

    let addr: SocketAddr = config.server_addr().parse()?;
    let app = create_router(config);

    tracing::info!(%addr, "Server listening");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// `RUST_LOG` takes precedence over `log_level`.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
