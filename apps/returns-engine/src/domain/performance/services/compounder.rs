//! Cumulative growth compounding.

use crate::domain::performance::value_objects::{CumulativePoint, DailyReturn};

/// Compound a daily return slice into a cumulative growth series.
///
/// A pure left-to-right scan: the value at index `i` is
/// `prod(1 + r_j for j <= i) - 1` per strategy. One output point per input
/// row, same dates, same order. Growth is always relative to the start of
/// the given slice: callers pass the currently selected range, so the chart
/// rebases whenever the selection changes.
#[must_use]
pub fn cumulative(returns: &[DailyReturn]) -> Vec<CumulativePoint> {
    let mut overnight = 1.0_f64;
    let mut intraday = 1.0_f64;
    let mut buy_hold = 1.0_f64;

    returns
        .iter()
        .map(|r| {
            overnight *= 1.0 + r.overnight;
            intraday *= 1.0 + r.intraday;
            buy_hold *= 1.0 + r.buy_hold;
            CumulativePoint {
                date: r.date,
                overnight: overnight - 1.0,
                intraday: intraday - 1.0,
                buy_hold: buy_hold - 1.0,
            }
        })
        .collect()
}
