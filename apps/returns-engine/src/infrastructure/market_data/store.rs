//! In-memory bar store.
//!
//! Populated once at startup from the daily-bar feed and read-only for the
//! life of the process. A symbol whose fetch fails in any way (network,
//! malformed payload, empty window) is logged and skipped; the rest of the
//! catalog still loads, and the skipped symbol simply queries as absent.

use std::collections::HashMap;

use crate::application::ports::DailyBarFeed;
use crate::domain::market_data::{BarRepository, BarSeries};
use crate::domain::shared::{DateRange, Symbol};

/// Immutable symbol → bar series map.
#[derive(Debug, Default)]
pub struct BarStore {
    series: HashMap<Symbol, BarSeries>,
}

impl BarStore {
    /// Load bars for `symbols` over `lookback`, one symbol at a time.
    ///
    /// Never fails as a whole: per-symbol failures are absorbed here, and an
    /// empty store is a valid (if useless) outcome.
    pub async fn load<F>(feed: &F, symbols: &[Symbol], lookback: DateRange) -> Self
    where
        F: DailyBarFeed,
    {
        let mut series = HashMap::new();

        for symbol in symbols {
            tracing::info!(symbol = %symbol, feed = feed.name(), "Downloading daily bars");

            let bars = match feed
                .fetch_daily_bars(symbol, lookback.start(), lookback.end())
                .await
            {
                Ok(bars) => bars,
                Err(e) => {
                    tracing::warn!(symbol = %symbol, error = %e, "Skipping symbol, fetch failed");
                    continue;
                }
            };

            match BarSeries::from_bars(bars) {
                Ok(loaded) => {
                    tracing::info!(symbol = %symbol, days = loaded.len(), "Loaded daily bars");
                    series.insert(symbol.clone(), loaded);
                }
                Err(_) => {
                    tracing::warn!(symbol = %symbol, "Skipping symbol, feed returned no bars");
                }
            }
        }

        Self { series }
    }

    /// Number of loaded symbols.
    #[must_use]
    pub fn len(&self) -> usize {
        self.series.len()
    }

    /// Whether nothing loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

impl BarRepository for BarStore {
    fn get(&self, symbol: &Symbol) -> Option<&BarSeries> {
        self.series.get(symbol)
    }

    fn symbols(&self) -> Vec<Symbol> {
        let mut symbols: Vec<Symbol> = self.series.keys().cloned().collect();
        symbols.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        symbols
    }
}
