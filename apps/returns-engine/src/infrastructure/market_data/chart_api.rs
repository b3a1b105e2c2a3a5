//! Chart API feed adapter.
//!
//! reqwest-based implementation of [`DailyBarFeed`] against a Yahoo-style
//! daily chart endpoint (`/v8/finance/chart/{symbol}`). The payload carries
//! parallel arrays of timestamps and quote fields; entries can be null for
//! halted or partial days and are skipped during conversion, as are rows
//! that fail the positive-price validation.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::Deserialize;

use crate::application::ports::{BarFeedError, DailyBarFeed};
use crate::domain::market_data::DailyBar;
use crate::domain::shared::Symbol;

/// Public chart API host.
pub const DEFAULT_BASE_URL: &str = "https://query1.finance.yahoo.com";

/// Per-request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

// ============================================================================
// Response Types
// ============================================================================

/// Top-level chart API response.
#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: ChartEnvelope,
}

/// Result-or-error envelope.
#[derive(Debug, Deserialize)]
struct ChartEnvelope {
    #[serde(default)]
    result: Option<Vec<ChartResult>>,
    #[serde(default)]
    error: Option<ChartApiError>,
}

/// Provider-side error body.
#[derive(Debug, Deserialize)]
struct ChartApiError {
    code: String,
    description: String,
}

/// One instrument's chart data.
#[derive(Debug, Deserialize)]
struct ChartResult {
    /// Unix timestamps, one per trading day.
    #[serde(default)]
    timestamp: Option<Vec<i64>>,
    indicators: Indicators,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    quote: Vec<QuoteBlock>,
}

/// Parallel per-day price arrays; individual entries may be null.
#[derive(Debug, Deserialize)]
struct QuoteBlock {
    #[serde(default)]
    open: Option<Vec<Option<f64>>>,
    #[serde(default)]
    close: Option<Vec<Option<f64>>>,
}

// ============================================================================
// Adapter
// ============================================================================

/// Daily bar feed backed by the chart HTTP API.
#[derive(Debug, Clone)]
pub struct ChartApiFeed {
    client: reqwest::Client,
    base_url: String,
}

impl ChartApiFeed {
    /// Create a feed against `base_url` (no trailing slash).
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be constructed.
    pub fn new(base_url: impl Into<String>) -> Result<Self, BarFeedError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| BarFeedError::ConnectionError {
                message: e.to_string(),
            })?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Convert a parsed chart result into validated bars.
    fn to_daily_bars(symbol: &Symbol, result: &ChartResult) -> Vec<DailyBar> {
        let Some(timestamps) = result.timestamp.as_deref() else {
            return Vec::new();
        };
        let Some(quote) = result.indicators.quote.first() else {
            return Vec::new();
        };
        let opens = quote.open.as_deref().unwrap_or_default();
        let closes = quote.close.as_deref().unwrap_or_default();

        let mut bars = Vec::with_capacity(timestamps.len());
        for (i, ts) in timestamps.iter().enumerate() {
            let Some(date) = timestamp_to_date(*ts) else {
                tracing::warn!(symbol = %symbol, timestamp = ts, "Skipping bar with bad timestamp");
                continue;
            };
            let (Some(open), Some(close)) = (price_at(opens, i), price_at(closes, i)) else {
                tracing::debug!(symbol = %symbol, %date, "Skipping bar with null prices");
                continue;
            };
            match DailyBar::new(date, open, close) {
                Ok(bar) => bars.push(bar),
                Err(e) => {
                    tracing::warn!(symbol = %symbol, %date, error = %e, "Dropping malformed bar");
                }
            }
        }
        bars
    }
}

/// Look up index `i` in a nullable price array as a `Decimal`.
fn price_at(prices: &[Option<f64>], i: usize) -> Option<Decimal> {
    prices
        .get(i)
        .copied()
        .flatten()
        .filter(|p| p.is_finite())
        .and_then(Decimal::from_f64)
}

/// Midnight-UTC calendar date of a unix timestamp.
fn timestamp_to_date(ts: i64) -> Option<NaiveDate> {
    DateTime::from_timestamp(ts, 0).map(|dt| dt.date_naive())
}

#[async_trait]
impl DailyBarFeed for ChartApiFeed {
    async fn fetch_daily_bars(
        &self,
        symbol: &Symbol,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<DailyBar>, BarFeedError> {
        let url = format!("{}/v8/finance/chart/{}", self.base_url, symbol);
        let period1 = start.and_time(chrono::NaiveTime::MIN).and_utc().timestamp();
        // The API treats period2 as exclusive; push it one day past the end.
        let period2 = (end + chrono::Days::new(1))
            .and_time(chrono::NaiveTime::MIN)
            .and_utc()
            .timestamp();

        let response = self
            .client
            .get(&url)
            .query(&[
                ("period1", period1.to_string()),
                ("period2", period2.to_string()),
                ("interval", "1d".to_string()),
            ])
            .send()
            .await
            .map_err(|e| BarFeedError::ConnectionError {
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(BarFeedError::ApiError {
                message: format!("HTTP {status} for {symbol}"),
            });
        }

        let body: ChartResponse =
            response
                .json()
                .await
                .map_err(|e| BarFeedError::MalformedResponse {
                    message: e.to_string(),
                })?;

        if let Some(error) = body.chart.error {
            return Err(BarFeedError::ApiError {
                message: format!("{}: {}", error.code, error.description),
            });
        }

        let results = body.chart.result.unwrap_or_default();
        let result = results.first().ok_or_else(|| BarFeedError::NoData {
            symbol: symbol.to_string(),
        })?;

        Ok(Self::to_daily_bars(symbol, result))
    }

    fn name(&self) -> &'static str {
        "ChartApi"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    async fn feed_for(server: &MockServer) -> ChartApiFeed {
        ChartApiFeed::new(server.uri()).unwrap()
    }

    #[tokio::test]
    async fn parses_daily_bars_and_skips_null_entries() {
        let server = MockServer::start().await;
        // 2024-01-02, 2024-01-03, 2024-01-04 at 14:30 UTC; day two has a
        // null open and must be skipped.
        let body = json!({
            "chart": {
                "result": [{
                    "timestamp": [1_704_205_800, 1_704_292_200, 1_704_378_600],
                    "indicators": {
                        "quote": [{
                            "open": [100.0, null, 102.5],
                            "close": [101.0, 101.5, 103.0]
                        }]
                    }
                }],
                "error": null
            }
        });
        Mock::given(method("GET"))
            .and(path("/v8/finance/chart/SPY"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&server)
            .await;

        let bars = feed_for(&server)
            .await
            .fetch_daily_bars(&Symbol::new("SPY"), date("2024-01-01"), date("2024-01-31"))
            .await
            .unwrap();

        assert_eq!(bars.len(), 2);
        assert_eq!(bars[0].date, date("2024-01-02"));
        assert_eq!(bars[0].open, dec!(100.0));
        assert_eq!(bars[1].date, date("2024-01-04"));
        assert_eq!(bars[1].close, dec!(103.0));
    }

    #[tokio::test]
    async fn drops_non_positive_prices() {
        let server = MockServer::start().await;
        let body = json!({
            "chart": {
                "result": [{
                    "timestamp": [1_704_205_800, 1_704_292_200],
                    "indicators": {
                        "quote": [{
                            "open": [0.0, 102.5],
                            "close": [101.0, 103.0]
                        }]
                    }
                }],
                "error": null
            }
        });
        Mock::given(method("GET"))
            .and(path("/v8/finance/chart/SPY"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&server)
            .await;

        let bars = feed_for(&server)
            .await
            .fetch_daily_bars(&Symbol::new("SPY"), date("2024-01-01"), date("2024-01-31"))
            .await
            .unwrap();

        assert_eq!(bars.len(), 1);
        assert_eq!(bars[0].date, date("2024-01-03"));
    }

    #[tokio::test]
    async fn provider_error_envelope_maps_to_api_error() {
        let server = MockServer::start().await;
        let body = json!({
            "chart": {
                "result": null,
                "error": {"code": "Not Found", "description": "No data found, symbol may be delisted"}
            }
        });
        Mock::given(method("GET"))
            .and(path("/v8/finance/chart/ZZZZ"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&server)
            .await;

        let err = feed_for(&server)
            .await
            .fetch_daily_bars(&Symbol::new("ZZZZ"), date("2024-01-01"), date("2024-01-31"))
            .await
            .unwrap_err();

        assert!(matches!(err, BarFeedError::ApiError { .. }));
        assert!(err.to_string().contains("delisted"));
    }

    #[tokio::test]
    async fn http_error_status_maps_to_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v8/finance/chart/SPY"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let err = feed_for(&server)
            .await
            .fetch_daily_bars(&Symbol::new("SPY"), date("2024-01-01"), date("2024-01-31"))
            .await
            .unwrap_err();

        assert!(matches!(err, BarFeedError::ApiError { .. }));
    }

    #[tokio::test]
    async fn garbage_body_maps_to_malformed_response() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v8/finance/chart/SPY"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>rate limited</html>"))
            .mount(&server)
            .await;

        let err = feed_for(&server)
            .await
            .fetch_daily_bars(&Symbol::new("SPY"), date("2024-01-01"), date("2024-01-31"))
            .await
            .unwrap_err();

        assert!(matches!(err, BarFeedError::MalformedResponse { .. }));
    }

    #[tokio::test]
    async fn missing_result_maps_to_no_data() {
        let server = MockServer::start().await;
        let body = json!({"chart": {"result": [], "error": null}});
        Mock::given(method("GET"))
            .and(path("/v8/finance/chart/SPY"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&server)
            .await;

        let err = feed_for(&server)
            .await
            .fetch_daily_bars(&Symbol::new("SPY"), date("2024-01-01"), date("2024-01-31"))
            .await
            .unwrap_err();

        assert!(matches!(err, BarFeedError::NoData { .. }));
    }
}
