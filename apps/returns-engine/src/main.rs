//! Returns Engine Binary
//!
//! Starts the Daybreak returns engine: loads ten years of daily bars for the
//! tracked index ETFs, then serves the performance API.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin returns-engine
//! ```
//!
//! # Environment Variables
//!
//! - `HTTP_PORT`: HTTP server port (default: 8080)
//! - `CHART_API_URL`: Daily-bars feed base URL (default: public chart API)
//! - `LOOKBACK_YEARS`: Years of history to load at startup (default: 10)
//! - `RUST_LOG`: Log level (default: info)

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use chrono::{Days, Utc};
use tokio::net::TcpListener;
use tokio::signal;

use returns_engine::application::use_cases::QueryPerformanceUseCase;
use returns_engine::domain::shared::DateRange;
use returns_engine::infrastructure::http::{AppState, create_router};
use returns_engine::infrastructure::market_data::{
    BarStore, ChartApiFeed, DEFAULT_BASE_URL, supported_symbols,
};

/// Default HTTP server port.
const DEFAULT_HTTP_PORT: u16 = 8080;

/// Default lookback window, in years.
const DEFAULT_LOOKBACK_YEARS: u64 = 10;

/// Parsed configuration from environment variables.
struct EngineConfig {
    http_port: u16,
    chart_api_url: String,
    lookback_years: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv();
    init_tracing();

    tracing::info!("Starting Daybreak returns engine");

    let config = parse_config();
    log_config(&config);

    let store = load_store(&config).await?;

    let state = AppState {
        query_performance: Arc::new(QueryPerformanceUseCase::new(Arc::clone(&store))),
        store,
        version: env!("CARGO_PKG_VERSION").to_string(),
    };
    let app = create_router(state);

    let http_addr: SocketAddr = format!("0.0.0.0:{}", config.http_port)
        .parse()
        .context("invalid HTTP listen address")?;

    tracing::info!(%http_addr, "HTTP server starting");
    tracing::info!("Endpoints:");
    tracing::info!("  GET /health");
    tracing::info!("  GET /api/v1/symbols");
    tracing::info!("  GET /api/v1/performance");

    let listener = TcpListener::bind(http_addr)
        .await
        .context("failed to bind HTTP listener")?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    tracing::info!("Returns engine stopped");
    Ok(())
}

/// Load .env file if present.
fn load_dotenv() {
    let _ = dotenvy::dotenv();
}

/// Initialize the tracing subscriber with environment filter.
///
/// Uses static directive strings that are compile-time constants guaranteed to parse.
#[allow(clippy::expect_used)]
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(
                "returns_engine=info"
                    .parse()
                    .expect("static directive 'returns_engine=info' is valid"),
            ),
        )
        .init();
}

/// Parse configuration from environment variables.
fn parse_config() -> EngineConfig {
    let http_port: u16 = std::env::var("HTTP_PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_HTTP_PORT);

    let chart_api_url =
        std::env::var("CHART_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

    let lookback_years: u64 = std::env::var("LOOKBACK_YEARS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_LOOKBACK_YEARS);

    EngineConfig {
        http_port,
        chart_api_url,
        lookback_years,
    }
}

/// Log the parsed configuration.
fn log_config(config: &EngineConfig) {
    tracing::info!(
        http_port = config.http_port,
        chart_api_url = %config.chart_api_url,
        lookback_years = config.lookback_years,
        "Configuration loaded"
    );
}

/// Fetch bars for every catalog symbol and build the immutable store.
async fn load_store(config: &EngineConfig) -> anyhow::Result<Arc<BarStore>> {
    let feed = ChartApiFeed::new(config.chart_api_url.clone())
        .map_err(|e| anyhow::anyhow!("failed to build chart API feed: {e}"))?;

    let end = Utc::now().date_naive();
    let start = end - Days::new(config.lookback_years * 365);
    let lookback = DateRange::new(start, end)
        .map_err(|e| anyhow::anyhow!("invalid lookback window: {e}"))?;

    tracing::info!(%lookback, "Loading historical data for all symbols");
    let store = BarStore::load(&feed, &supported_symbols(), lookback).await;

    if store.is_empty() {
        tracing::warn!("No symbols loaded; every request will render a placeholder");
    } else {
        tracing::info!(symbols = store.len(), "Data loading complete");
    }

    Ok(Arc::new(store))
}

/// Wait for shutdown signal (SIGTERM or SIGINT).
///
/// # Panics
///
/// Panics if signal handlers cannot be installed: a process that cannot
/// respond to termination signals is worse than one that fails at startup.
#[allow(clippy::expect_used)]
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("signal handler installation is critical for graceful shutdown");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("SIGTERM handler installation is critical for graceful shutdown")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, initiating shutdown");
        }
    }
}
