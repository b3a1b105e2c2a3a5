//! Ordered daily bar series for one symbol.

use chrono::NaiveDate;

use super::DailyBar;
use crate::domain::shared::DomainError;

/// An immutable, date-ascending series of daily bars for one symbol.
///
/// Construction sorts the input and deduplicates by date (the last bar for a
/// given date wins, matching what a re-download of the same day produces).
/// The series is never empty; symbols without data are simply absent from the
/// store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarSeries {
    bars: Vec<DailyBar>,
}

impl BarSeries {
    /// Build a series from unordered bars.
    ///
    /// # Errors
    ///
    /// Returns error if `bars` is empty.
    pub fn from_bars(mut bars: Vec<DailyBar>) -> Result<Self, DomainError> {
        if bars.is_empty() {
            return Err(DomainError::InvalidValue {
                field: "bars".to_string(),
                message: "bar series cannot be empty".to_string(),
            });
        }

        // Stable sort keeps the later duplicate adjacent so dedup keeps it.
        bars.sort_by_key(|b| b.date);
        bars.reverse();
        bars.dedup_by_key(|b| b.date);
        bars.reverse();

        Ok(Self { bars })
    }

    /// Borrow the bars, ascending by date.
    #[must_use]
    pub fn as_slice(&self) -> &[DailyBar] {
        &self.bars
    }

    /// Number of trading days in the series.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    /// Whether the series is empty (never true for a constructed series).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Earliest date in the series.
    #[must_use]
    pub fn first_date(&self) -> Option<NaiveDate> {
        self.bars.first().map(|b| b.date)
    }

    /// Latest date in the series.
    #[must_use]
    pub fn last_date(&self) -> Option<NaiveDate> {
        self.bars.last().map(|b| b.date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn bar(d: &str, open: rust_decimal::Decimal, close: rust_decimal::Decimal) -> DailyBar {
        DailyBar::new(date(d), open, close).unwrap()
    }

    #[test]
    fn from_bars_rejects_empty_input() {
        assert!(BarSeries::from_bars(Vec::new()).is_err());
    }

    #[test]
    fn from_bars_sorts_ascending() {
        let series = BarSeries::from_bars(vec![
            bar("2024-01-04", dec!(102), dec!(103)),
            bar("2024-01-02", dec!(100), dec!(101)),
            bar("2024-01-03", dec!(101), dec!(102)),
        ])
        .unwrap();

        let dates: Vec<NaiveDate> = series.as_slice().iter().map(|b| b.date).collect();
        assert_eq!(
            dates,
            vec![date("2024-01-02"), date("2024-01-03"), date("2024-01-04")]
        );
    }

    #[test]
    fn from_bars_keeps_last_duplicate() {
        let series = BarSeries::from_bars(vec![
            bar("2024-01-02", dec!(100), dec!(101)),
            bar("2024-01-02", dec!(99), dec!(100)),
        ])
        .unwrap();

        assert_eq!(series.len(), 1);
        assert_eq!(series.as_slice()[0].open, dec!(99));
    }

    #[test]
    fn first_and_last_dates() {
        let series = BarSeries::from_bars(vec![
            bar("2024-01-02", dec!(100), dec!(101)),
            bar("2024-01-05", dec!(101), dec!(102)),
        ])
        .unwrap();

        assert_eq!(series.first_date(), Some(date("2024-01-02")));
        assert_eq!(series.last_date(), Some(date("2024-01-05")));
    }
}
