//! Range-bounded performance metrics.

use crate::domain::performance::value_objects::{DailyReturn, RangeSummary};
use crate::domain::shared::DateRange;

/// Compound total return over the bars of `history` that fall inside
/// `range`, inclusive on both ends, expressed as percentages.
///
/// `history` must be the full per-day return history for the symbol, not a
/// pre-filtered slice: returns are computed against the prior day's close
/// before any filtering, so the first in-range day keeps its real overnight
/// and buy-and-hold values instead of being reset to zero.
///
/// A range that matches no bars yields exactly zero for all three
/// strategies; that is a normal answer, not an error.
#[must_use]
pub fn range_summary(history: &[DailyReturn], range: &DateRange) -> RangeSummary {
    let filtered: Vec<&DailyReturn> = history.iter().filter(|r| range.contains(r.date)).collect();

    if filtered.is_empty() {
        return RangeSummary::default();
    }

    let mut overnight = 1.0_f64;
    let mut intraday = 1.0_f64;
    let mut buy_hold = 1.0_f64;
    for r in filtered {
        overnight *= 1.0 + r.overnight;
        intraday *= 1.0 + r.intraday;
        buy_hold *= 1.0 + r.buy_hold;
    }

    RangeSummary {
        overnight: (overnight - 1.0) * 100.0,
        intraday: (intraday - 1.0) * 100.0,
        buy_hold: (buy_hold - 1.0) * 100.0,
    }
}
