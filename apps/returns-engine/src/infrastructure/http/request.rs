//! HTTP request types.

use serde::Deserialize;

/// Query string for `GET /api/v1/performance`.
///
/// All fields are optional at the wire level; the use case decides what a
/// missing field means (placeholder, never a 4xx).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PerformanceQuery {
    /// Ticker symbol, e.g. "SPY".
    #[serde(default)]
    pub symbol: Option<String>,
    /// Range start, `YYYY-MM-DD`.
    #[serde(default)]
    pub start_date: Option<String>,
    /// Range end, `YYYY-MM-DD`.
    #[serde(default)]
    pub end_date: Option<String>,
}
