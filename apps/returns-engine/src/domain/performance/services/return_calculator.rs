//! Daily return decomposition.
//!
//! Converts a bar series into per-day overnight / intraday / buy-and-hold
//! returns. This is the only place raw prices enter the return math, so the
//! invalid-price policy lives here: division by a non-positive or
//! unrepresentable price fails with [`PerformanceError::InvalidBar`] instead
//! of producing a NaN that a later step would have to paper over.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::domain::market_data::DailyBar;
use crate::domain::performance::errors::PerformanceError;
use crate::domain::performance::value_objects::DailyReturn;

/// Decompose `bars` into one [`DailyReturn`] per bar.
///
/// The input is re-sorted ascending by date before computing, so callers do
/// not have to guarantee order. For the first bar (no prior close) the
/// overnight and buy-and-hold returns are 0; intraday is computed from the
/// bar's own open and close.
///
/// # Errors
///
/// Returns [`PerformanceError::InvalidBar`] if any bar carries a price that
/// is zero, negative, or not representable as a finite `f64`.
pub fn daily_returns(bars: &[DailyBar]) -> Result<Vec<DailyReturn>, PerformanceError> {
    let mut sorted: Vec<DailyBar> = bars.to_vec();
    sorted.sort_by_key(|b| b.date);

    let mut returns = Vec::with_capacity(sorted.len());
    let mut prev_close: Option<f64> = None;

    for bar in &sorted {
        let open = price_as_f64(bar.date, "open", bar.open)?;
        let close = price_as_f64(bar.date, "close", bar.close)?;

        let (overnight, buy_hold) = match prev_close {
            Some(prev) => ((open - prev) / prev, (close - prev) / prev),
            None => (0.0, 0.0),
        };
        let intraday = (close - open) / open;

        returns.push(DailyReturn {
            date: bar.date,
            overnight,
            intraday,
            buy_hold,
        });
        prev_close = Some(close);
    }

    Ok(returns)
}

/// Convert a price to `f64`, rejecting anything the divisions cannot use.
fn price_as_f64(
    date: NaiveDate,
    field: &'static str,
    price: Decimal,
) -> Result<f64, PerformanceError> {
    if price <= Decimal::ZERO {
        return Err(PerformanceError::InvalidBar { date, field });
    }
    price
        .to_f64()
        .filter(|p| p.is_finite() && *p > 0.0)
        .ok_or(PerformanceError::InvalidBar { date, field })
}
