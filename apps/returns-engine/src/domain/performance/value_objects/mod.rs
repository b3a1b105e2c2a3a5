//! Performance Value Objects

mod cumulative_point;
mod daily_return;
mod range_summary;

pub use cumulative_point::CumulativePoint;
pub use daily_return::DailyReturn;
pub use range_summary::RangeSummary;
