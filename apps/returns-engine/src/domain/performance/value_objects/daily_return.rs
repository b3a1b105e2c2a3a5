//! Per-day strategy returns.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Fractional returns for one trading day, decomposed by strategy.
///
/// - `overnight`: previous close → today's open
/// - `intraday`: today's open → today's close
/// - `buy_hold`: previous close → today's close
///
/// The first day of a series has no prior close, so its overnight and
/// buy-and-hold returns are 0 by convention; intraday is computable from the
/// bar itself and is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyReturn {
    /// Trading date.
    pub date: NaiveDate,
    /// Previous close to open, as a fraction of the previous close.
    pub overnight: f64,
    /// Open to close, as a fraction of the open.
    pub intraday: f64,
    /// Previous close to close, as a fraction of the previous close.
    pub buy_hold: f64,
}
