//! Compounded growth series point.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Compounded fractional growth from the start of the selected range through
/// `date`, per strategy.
///
/// The first point equals that day's daily return: compounding starts from
/// 1.0 before day one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CumulativePoint {
    /// Trading date.
    pub date: NaiveDate,
    /// Compounded overnight growth, fractional.
    pub overnight: f64,
    /// Compounded intraday growth, fractional.
    pub intraday: f64,
    /// Compounded buy-and-hold growth, fractional.
    pub buy_hold: f64,
}
