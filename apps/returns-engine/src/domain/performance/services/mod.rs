//! Performance Domain Services
//!
//! Stateless return arithmetic: decomposition, compounding, and
//! range-bounded summaries.

mod compounder;
mod range_metrics;
mod return_calculator;

pub use compounder::cumulative;
pub use range_metrics::range_summary;
pub use return_calculator::daily_returns;
