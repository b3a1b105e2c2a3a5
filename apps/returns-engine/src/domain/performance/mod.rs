//! Performance Context
//!
//! The numerical core: converts daily bars into per-day strategy returns,
//! compounds them into cumulative growth series, and summarizes arbitrary
//! date ranges. Everything here is pure and allocation-light; all state
//! lives with the caller.

pub mod errors;
pub mod services;
pub mod value_objects;

pub use errors::PerformanceError;
pub use services::{cumulative, daily_returns, range_summary};
pub use value_objects::{CumulativePoint, DailyReturn, RangeSummary};
