//! Closed date range value object.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::shared::DomainError;

/// Date format accepted at the request boundary.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// A closed calendar-date range `[start, end]`, inclusive on both ends.
///
/// Used to bound metric and chart computations to the user's selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Create a new range.
    ///
    /// # Errors
    ///
    /// Returns error if `start` is after `end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, DomainError> {
        if start > end {
            return Err(DomainError::InvalidValue {
                field: "date_range".to_string(),
                message: format!("start {start} is after end {end}"),
            });
        }
        Ok(Self { start, end })
    }

    /// Parse a range from `YYYY-MM-DD` bounds.
    ///
    /// # Errors
    ///
    /// Returns error if either bound fails to parse or `start > end`.
    pub fn parse(start: &str, end: &str) -> Result<Self, DomainError> {
        let start = parse_date("start_date", start)?;
        let end = parse_date("end_date", end)?;
        Self::new(start, end)
    }

    /// Range start (inclusive).
    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Range end (inclusive).
    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Whether `date` falls inside the range, bounds included.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

fn parse_date(field: &str, value: &str) -> Result<NaiveDate, DomainError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|e| DomainError::InvalidValue {
        field: field.to_string(),
        message: format!("'{value}' is not a YYYY-MM-DD date: {e}"),
    })
}
