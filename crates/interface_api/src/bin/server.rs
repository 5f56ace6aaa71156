//! Questoes API - Server Binary
//!
//! Starts the HTTP server for the questoes/filmes API.
//!
//! # Usage
//!
//! ```bash
//! URL_BD=postgres://localhost/questoes \
//! URL_BD_FILME=postgres://localhost/filmes \
//! cargo run --bin questoes-api
//! ```
//!
//! # Environment Variables
//!
//! * `URL_BD` - Connection string of the "principal" database (`DATABASE_URL` as fallback)
//! * `URL_BD_<NAME>` - Connection string of the logical database `<name>`, e.g. `URL_BD_FILME`
//! * `API_HOST` - Server host (default: 0.0.0.0)
//! * `API_PORT` - Server port (default: 3000)
//! * `API_MESSAGE` / `API_AUTHOR` - Shown by `GET /`
//! * `API_MAX_CONNECTIONS` - Connections per pool (default: 10)
//! * `API_ACQUIRE_TIMEOUT_SECS` - Wait for a free connection (default: 30)
//! * `API_EAGER_POOLS` - Create every pool at startup (default: false)
//! * `API_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)
//! * `API_LOG_FORMAT` - Log output: text or json (default: text)

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use infra_db::PoolRegistry;
use interface_api::config::{ApiConfig, LogFormat, MOVIE_DATABASE, PRIMARY_DATABASE};
use interface_api::create_router;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = ApiConfig::from_env().context("invalid API configuration")?;

    init_tracing(&config.log_level, config.log_format);

    tracing::info!(
        host = %config.host,
        port = %config.port,
        databases = ?config.databases.keys().collect::<Vec<_>>(),
        "Starting questoes API server"
    );

    for name in [PRIMARY_DATABASE, MOVIE_DATABASE] {
        if !config.databases.contains_key(name) {
            tracing::warn!(database = name, "No connection string configured; its routes will fail");
        }
    }

    let registry = Arc::new(PoolRegistry::new(config.database_configs()));
    if config.eager_pools {
        registry
            .initialize_all()
            .context("failed to create connection pools")?;
    }

    let app = create_router(registry, config.clone());

    let addr: SocketAddr = config
        .server_addr()
        .parse()
        .with_context(|| format!("invalid server address {}", config.server_addr()))?;

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
/// `RUST_LOG` takes precedence over the configured level.
fn init_tracing(log_level: &str, format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Text => subscriber
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .init(),
        LogFormat::Json => subscriber
            .with(tracing_subscriber::fmt::layer().json().with_current_span(true))
            .init(),
    }
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
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
