//! Daily bar value object.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::shared::DomainError;

/// One trading day's open and close prices for an instrument.
///
/// Prices are `Decimal` and strictly positive; a zero or negative price is a
/// data-quality error and is rejected at construction rather than modeled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyBar {
    /// Trading date.
    pub date: NaiveDate,
    /// Opening price.
    pub open: Decimal,
    /// Closing price.
    pub close: Decimal,
}

impl DailyBar {
    /// Create a validated bar.
    ///
    /// # Errors
    ///
    /// Returns error if `open` or `close` is not strictly positive.
    pub fn new(date: NaiveDate, open: Decimal, close: Decimal) -> Result<Self, DomainError> {
        if open <= Decimal::ZERO {
            return Err(DomainError::InvalidValue {
                field: "open".to_string(),
                message: format!("price on {date} must be positive, got {open}"),
            });
        }
        if close <= Decimal::ZERO {
            return Err(DomainError::InvalidValue {
                field: "close".to_string(),
                message: format!("price on {date} must be positive, got {close}"),
            });
        }
        Ok(Self { date, open, close })
    }
}
