//! Performance pipeline errors.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors from the return computation pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PerformanceError {
    /// A bar carried a price the return math cannot divide by.
    ///
    /// Policy: zero, negative, or unrepresentable prices are rejected, never
    /// silently coerced to a zero return.
    #[error("invalid bar on {date}: {field} price is not a positive finite number")]
    InvalidBar {
        /// Date of the offending bar.
        date: NaiveDate,
        /// Which price field was invalid.
        field: &'static str,
    },
}
