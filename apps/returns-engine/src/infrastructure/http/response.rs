//! HTTP response types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::application::dto::PerformanceDto;
use crate::error::EngineError;

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Application version.
    pub version: String,
}

/// One supported instrument.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymbolInfo {
    /// Ticker symbol.
    pub symbol: String,
    /// Display label for the dropdown.
    pub label: String,
    /// Whether bars for it loaded at startup.
    pub loaded: bool,
}

/// Supported symbol listing plus the UI's initial date-picker bounds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymbolsResponse {
    /// Catalog entries, in display order.
    pub symbols: Vec<SymbolInfo>,
    /// Suggested initial range start.
    pub default_start: NaiveDate,
    /// Suggested initial range end.
    pub default_end: NaiveDate,
}

/// One charted point of compounded growth.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SeriesPointResponse {
    /// Trading date.
    pub date: NaiveDate,
    /// Compounded overnight growth, fractional.
    pub overnight: f64,
    /// Compounded intraday growth, fractional.
    pub intraday: f64,
    /// Compounded buy-and-hold growth, fractional.
    pub buy_hold: f64,
}

/// Range metrics, percent per strategy.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct MetricsResponse {
    /// Overnight strategy total return, percent.
    pub overnight: f64,
    /// Intraday strategy total return, percent.
    pub intraday: f64,
    /// Buy-and-hold strategy total return, percent.
    pub buy_hold: f64,
}

/// Performance endpoint body.
///
/// Always delivered with HTTP 200: a failed computation degrades to
/// `ok: false` with an empty series, zeroed metrics, and a message the UI
/// can show as its placeholder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceResponse {
    /// Whether a chart and metrics were computed.
    pub ok: bool,
    /// Symbol the response is for, as requested.
    pub symbol: String,
    /// Cumulative growth series over the selected range.
    pub series: Vec<SeriesPointResponse>,
    /// Compounded totals over the selected range.
    pub metrics: MetricsResponse,
    /// Machine-readable error code when `ok` is false.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Placeholder text when `ok` is false.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl PerformanceResponse {
    /// Successful response from a computed DTO.
    #[must_use]
    pub fn from_dto(dto: PerformanceDto) -> Self {
        Self {
            ok: true,
            symbol: dto.symbol,
            series: dto
                .series
                .into_iter()
                .map(|p| SeriesPointResponse {
                    date: p.date,
                    overnight: p.overnight,
                    intraday: p.intraday,
                    buy_hold: p.buy_hold,
                })
                .collect(),
            metrics: MetricsResponse {
                overnight: dto.metrics.overnight,
                intraday: dto.metrics.intraday,
                buy_hold: dto.metrics.buy_hold,
            },
            error: None,
            message: None,
        }
    }

    /// Placeholder response for a classified failure.
    #[must_use]
    pub fn placeholder(symbol: &str, error: &EngineError) -> Self {
        Self {
            ok: false,
            symbol: symbol.to_string(),
            series: Vec::new(),
            metrics: MetricsResponse::default(),
            error: Some(error.code().reason().to_string()),
            message: Some(error.message().to_string()),
        }
    }
}
