//! Performance query DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::performance::{CumulativePoint, RangeSummary};

/// One charted point of compounded growth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPointDto {
    /// Trading date.
    pub date: NaiveDate,
    /// Compounded overnight growth, fractional.
    pub overnight: f64,
    /// Compounded intraday growth, fractional.
    pub intraday: f64,
    /// Compounded buy-and-hold growth, fractional.
    pub buy_hold: f64,
}

impl From<CumulativePoint> for SeriesPointDto {
    fn from(point: CumulativePoint) -> Self {
        Self {
            date: point.date,
            overnight: point.overnight,
            intraday: point.intraday,
            buy_hold: point.buy_hold,
        }
    }
}

/// Range summary metrics, percent per strategy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricsDto {
    /// Overnight strategy total return, percent.
    pub overnight: f64,
    /// Intraday strategy total return, percent.
    pub intraday: f64,
    /// Buy-and-hold strategy total return, percent.
    pub buy_hold: f64,
}

impl From<RangeSummary> for MetricsDto {
    fn from(summary: RangeSummary) -> Self {
        Self {
            overnight: summary.overnight,
            intraday: summary.intraday,
            buy_hold: summary.buy_hold,
        }
    }
}

/// Full result of a performance query: the chart series over the selected
/// range plus the range metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceDto {
    /// Normalized symbol the result is for.
    pub symbol: String,
    /// Cumulative growth series over the selected range.
    pub series: Vec<SeriesPointDto>,
    /// Compounded totals over the selected range.
    pub metrics: MetricsDto,
}
