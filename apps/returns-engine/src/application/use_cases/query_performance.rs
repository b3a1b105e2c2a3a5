//! Query Performance Use Case

use std::sync::Arc;

use crate::application::dto::{MetricsDto, PerformanceDto, SeriesPointDto};
use crate::domain::market_data::BarRepository;
use crate::domain::performance::{DailyReturn, cumulative, daily_returns, range_summary};
use crate::domain::shared::{DateRange, Symbol};
use crate::error::EngineError;

/// Use case for computing the chart series and range metrics for one
/// symbol and date range.
///
/// The whole pipeline is synchronous arithmetic over an in-memory series;
/// each call is independent and leaves no state behind.
pub struct QueryPerformanceUseCase<S>
where
    S: BarRepository,
{
    store: Arc<S>,
}

impl<S> QueryPerformanceUseCase<S>
where
    S: BarRepository,
{
    /// Create a new QueryPerformanceUseCase.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Execute the use case.
    ///
    /// # Errors
    ///
    /// Returns an [`EngineError`] classifying the failure; the HTTP boundary
    /// converts every variant into a placeholder response.
    pub fn execute(
        &self,
        symbol: &str,
        start_date: Option<&str>,
        end_date: Option<&str>,
    ) -> Result<PerformanceDto, EngineError> {
        // 1. Resolve the symbol against the store.
        let symbol = Symbol::new(symbol);
        if symbol.validate().is_err() {
            return Err(EngineError::symbol_unavailable(symbol.as_str()));
        }
        let series = self
            .store
            .get(&symbol)
            .ok_or_else(|| EngineError::symbol_unavailable(symbol.as_str()))?;

        // 2. Both bounds must be present and parse, start <= end.
        let (start, end) = match (start_date, end_date) {
            (Some(start), Some(end)) => (start, end),
            _ => return Err(EngineError::invalid_range("Select date range")),
        };
        let range = DateRange::parse(start, end)
            .map_err(|e| EngineError::invalid_range(e.to_string()))?;

        // 3. Per-day returns over the FULL history, then filter.
        let history = daily_returns(series.as_slice())
            .map_err(|e| EngineError::invalid_bar(e.to_string()))?;
        let selected: Vec<DailyReturn> = history
            .iter()
            .filter(|r| range.contains(r.date))
            .copied()
            .collect();
        if selected.is_empty() {
            return Err(EngineError::empty_range()
                .with_context("symbol", symbol.as_str())
                .with_context("range", range.to_string()));
        }

        // 4. Chart compounds over the selection; metrics compound the same
        //    range out of the un-truncated history.
        let chart = cumulative(&selected);
        let summary = range_summary(&history, &range);

        Ok(PerformanceDto {
            symbol: symbol.into_inner(),
            series: chart.into_iter().map(SeriesPointDto::from).collect(),
            metrics: MetricsDto::from(summary),
        })
    }
}
