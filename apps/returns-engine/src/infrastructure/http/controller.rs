//! HTTP Controller (Driver Adapter)
//!
//! Axum-based JSON API that delegates to the query use case. Computation
//! failures never surface as error statuses: the performance endpoint always
//! answers 200 and the body's `ok` flag tells the UI whether to draw a chart
//! or a placeholder.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use chrono::{Days, Utc};

use crate::application::use_cases::QueryPerformanceUseCase;
use crate::domain::market_data::BarRepository;
use crate::domain::shared::Symbol;
use crate::infrastructure::market_data::INDEX_CHOICES;

use super::request::PerformanceQuery;
use super::response::{HealthResponse, PerformanceResponse, SymbolInfo, SymbolsResponse};

/// Default span of the UI's initial date-picker selection, in days.
const DEFAULT_RANGE_DAYS: u64 = 2 * 365;

/// Application state shared across handlers.
pub struct AppState<S>
where
    S: BarRepository,
{
    /// Use case for computing chart series and metrics.
    pub query_performance: Arc<QueryPerformanceUseCase<S>>,
    /// Bar store for symbol listings.
    pub store: Arc<S>,
    /// Application version.
    pub version: String,
}

impl<S> Clone for AppState<S>
where
    S: BarRepository,
{
    fn clone(&self) -> Self {
        Self {
            query_performance: Arc::clone(&self.query_performance),
            store: Arc::clone(&self.store),
            version: self.version.clone(),
        }
    }
}

/// Create the HTTP router with all endpoints.
pub fn create_router<S>(state: AppState<S>) -> Router
where
    S: BarRepository + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .route("/api/v1/symbols", get(list_symbols))
        .route("/api/v1/performance", get(performance))
        .with_state(state)
}

/// Health check endpoint.
async fn health_check<S>(State(state): State<AppState<S>>) -> impl IntoResponse
where
    S: BarRepository,
{
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: state.version.clone(),
    })
}

/// Supported symbol listing with the UI's initial date-picker bounds.
async fn list_symbols<S>(State(state): State<AppState<S>>) -> impl IntoResponse
where
    S: BarRepository,
{
    let symbols = INDEX_CHOICES
        .iter()
        .map(|choice| SymbolInfo {
            symbol: choice.symbol.to_string(),
            label: choice.label.to_string(),
            loaded: state.store.contains(&Symbol::new(choice.symbol)),
        })
        .collect();

    let today = Utc::now().date_naive();
    let default_start = today - Days::new(DEFAULT_RANGE_DAYS);

    Json(SymbolsResponse {
        symbols,
        default_start,
        default_end: today,
    })
}

/// Performance endpoint: chart series plus range metrics.
async fn performance<S>(
    State(state): State<AppState<S>>,
    Query(query): Query<PerformanceQuery>,
) -> impl IntoResponse
where
    S: BarRepository,
{
    let symbol = query.symbol.unwrap_or_default();

    let result = state.query_performance.execute(
        &symbol,
        query.start_date.as_deref(),
        query.end_date.as_deref(),
    );

    match result {
        Ok(dto) => (StatusCode::OK, Json(PerformanceResponse::from_dto(dto))),
        Err(e) => {
            tracing::debug!(symbol = %symbol, error = %e, "Degrading request to placeholder");
            (
                StatusCode::OK,
                Json(PerformanceResponse::placeholder(&symbol, &e)),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::InMemoryBarFeed;
    use crate::domain::market_data::DailyBar;
    use crate::domain::shared::DateRange;
    use crate::infrastructure::market_data::BarStore;
    use axum::body::Body;
    use axum::http::Request;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use tower::ServiceExt;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    async fn create_test_state() -> AppState<BarStore> {
        let mut feed = InMemoryBarFeed::new();
        feed.add_bars(
            Symbol::new("SPY"),
            vec![
                DailyBar::new(date("2024-01-02"), dec!(100), dec!(102)).unwrap(),
                DailyBar::new(date("2024-01-03"), dec!(103), dec!(101)).unwrap(),
                DailyBar::new(date("2024-01-04"), dec!(100), dec!(105)).unwrap(),
            ],
        );

        let lookback = DateRange::parse("2023-01-01", "2024-12-31").unwrap();
        let store = Arc::new(BarStore::load(&feed, &[Symbol::new("SPY")], lookback).await);

        AppState {
            query_performance: Arc::new(QueryPerformanceUseCase::new(Arc::clone(&store))),
            store,
            version: "1.0.0-test".to_string(),
        }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(app: Router, uri: &str) -> T {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn health_check_returns_ok() {
        let app = create_router(create_test_state().await);
        let health: HealthResponse = get_json(app, "/health").await;
        assert_eq!(health.status, "healthy");
    }

    #[tokio::test]
    async fn symbols_listing_marks_loaded_flags() {
        let app = create_router(create_test_state().await);
        let listing: SymbolsResponse = get_json(app, "/api/v1/symbols").await;

        assert_eq!(listing.symbols.len(), 4);
        let spy = listing.symbols.iter().find(|s| s.symbol == "SPY").unwrap();
        assert!(spy.loaded);
        let qqq = listing.symbols.iter().find(|s| s.symbol == "QQQ").unwrap();
        assert!(!qqq.loaded);
        assert!(listing.default_start < listing.default_end);
    }

    #[tokio::test]
    async fn performance_happy_path_returns_series_and_metrics() {
        let app = create_router(create_test_state().await);
        let body: PerformanceResponse = get_json(
            app,
            "/api/v1/performance?symbol=SPY&start_date=2024-01-02&end_date=2024-01-04",
        )
        .await;

        assert!(body.ok);
        assert_eq!(body.symbol, "SPY");
        assert_eq!(body.series.len(), 3);
        assert!((body.metrics.buy_hold - 100.0 * 3.0 / 102.0).abs() < 1e-9);
        assert!(body.error.is_none());
    }

    #[tokio::test]
    async fn unknown_symbol_degrades_to_placeholder() {
        let app = create_router(create_test_state().await);
        let body: PerformanceResponse = get_json(
            app,
            "/api/v1/performance?symbol=TLT&start_date=2024-01-02&end_date=2024-01-04",
        )
        .await;

        assert!(!body.ok);
        assert!(body.series.is_empty());
        assert_eq!(body.metrics.overnight, 0.0);
        assert_eq!(body.error.as_deref(), Some("SYMBOL_UNAVAILABLE"));
        assert_eq!(body.message.as_deref(), Some("No data available"));
    }

    #[tokio::test]
    async fn missing_dates_degrade_to_placeholder() {
        let app = create_router(create_test_state().await);
        let body: PerformanceResponse =
            get_json(app, "/api/v1/performance?symbol=SPY").await;

        assert!(!body.ok);
        assert_eq!(body.error.as_deref(), Some("INVALID_RANGE"));
        assert_eq!(body.message.as_deref(), Some("Select date range"));
    }
}
