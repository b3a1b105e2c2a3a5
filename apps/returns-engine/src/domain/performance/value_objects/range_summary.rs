//! Range performance summary.

use serde::{Deserialize, Serialize};

/// Compounded total return over one bounded date range, per strategy,
/// expressed as percentages.
///
/// An empty range compounds to exactly zero for all three strategies.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RangeSummary {
    /// Overnight strategy total return, percent.
    pub overnight: f64,
    /// Intraday strategy total return, percent.
    pub intraday: f64,
    /// Buy-and-hold strategy total return, percent.
    pub buy_hold: f64,
}
