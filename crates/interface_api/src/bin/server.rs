//! BizTime - API Server Binary
//!
//! Starts the HTTP API over the PostgreSQL database.
//!
//! # Usage
//!
//! ```bash
//! # Run with default configuration
//! cargo run --bin biztime-api
//!
//! # Run with environment variables
//! BIZTIME_PORT=8080 DATABASE_URL=postgres://... cargo run --bin biztime-api
//! ```
//!
//! # Environment Variables
//!
//! * `BIZTIME_HOST` - Server host (default: 0.0.0.0)
//! * `BIZTIME_PORT` - Server port (default: 3000)
//! * `DATABASE_URL` / `BIZTIME_DATABASE_URL` - PostgreSQL connection string
//! * `BIZTIME_LOG_LEVEL` - Log filter when `RUST_LOG` is unset (default: info)
//! * `BIZTIME_LOG_FORMAT` - `pretty` or `json` (default: pretty)
//! * `BIZTIME_MAX_CONNECTIONS`, `BIZTIME_MIN_CONNECTIONS`, `BIZTIME_ACQUIRE_TIMEOUT_SECS` - pool sizing
//!
//! The schema in `migrations/` is applied by the operator beforehand.

use std::net::SocketAddr;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use core_kernel::HealthCheckable;
use infra_db::{adapters::PostgresHealthCheck, create_pool};
use interface_api::{
    config::{ApiConfig, LogFormat},
    create_router, AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = ApiConfig::load().context("Failed to load configuration")?;

    init_tracing(&config.log_level, config.log_format);

    tracing::info!(
        host = %config.host,
        port = %config.port,
        "Starting BizTime API Server"
    );

    let pool = create_pool(config.database_config())
        .await
        .context("Failed to connect to database")?;

    let health = PostgresHealthCheck::new(pool.clone()).health_check().await;
    if !health.is_healthy() {
        anyhow::bail!(
            "Database is not ready: {}",
            health.message.unwrap_or_default()
        );
    }
    tracing::info!(latency_ms = health.latency_ms, "Database ready");

    let app = create_router(AppState::postgres(pool));

    let addr: SocketAddr = config
        .server_addr()
        .parse()
        .context("Invalid server address")?;

    tracing::info!(%addr, "Server listening");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Installs the global subscriber
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_tracing(log_level: &str, format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
    }
}

/// Waits for Ctrl+C or SIGTERM so in-flight requests can finish
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
