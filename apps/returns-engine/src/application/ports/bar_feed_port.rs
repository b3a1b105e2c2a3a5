//! Daily Bar Feed Port (Driven Port)
//!
//! Interface for fetching historical daily bars from an external provider.
//! Any failure from an implementation means "symbol unavailable" to the
//! caller; the store skips the symbol and keeps loading the rest.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::market_data::DailyBar;
use crate::domain::shared::Symbol;

/// Daily bar feed error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum BarFeedError {
    /// Connection or transport error.
    #[error("Bar feed connection error: {message}")]
    ConnectionError {
        /// Error details.
        message: String,
    },

    /// Response could not be decoded.
    #[error("Bar feed returned a malformed response: {message}")]
    MalformedResponse {
        /// Error details.
        message: String,
    },

    /// Provider has no data for the symbol.
    #[error("No bar data for symbol: {symbol}")]
    NoData {
        /// The symbol without data.
        symbol: String,
    },

    /// Provider-side error.
    #[error("Bar feed API error: {message}")]
    ApiError {
        /// Error details.
        message: String,
    },
}

/// Port for fetching historical daily bars.
///
/// This is a driven (secondary/outbound) port. The infrastructure layer
/// provides implementations (e.g., the chart API adapter).
#[async_trait]
pub trait DailyBarFeed: Send + Sync {
    /// Fetch daily bars for `symbol` over `[start, end]`.
    ///
    /// May legitimately return an empty Vec when the provider has no rows in
    /// the window; the caller treats that the same as [`BarFeedError::NoData`].
    async fn fetch_daily_bars(
        &self,
        symbol: &Symbol,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<DailyBar>, BarFeedError>;

    /// Name of this feed, for log lines.
    fn name(&self) -> &'static str;
}

/// In-memory feed for tests and local development.
#[derive(Debug, Default)]
pub struct InMemoryBarFeed {
    bars: HashMap<Symbol, Vec<DailyBar>>,
    failing: HashMap<Symbol, String>,
}

impl InMemoryBarFeed {
    /// Create a new empty feed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add bars for a symbol.
    pub fn add_bars(&mut self, symbol: Symbol, bars: Vec<DailyBar>) {
        self.bars.insert(symbol, bars);
    }

    /// Make fetches for a symbol fail with a connection error.
    pub fn fail_symbol(&mut self, symbol: Symbol, message: impl Into<String>) {
        self.failing.insert(symbol, message.into());
    }
}

#[async_trait]
impl DailyBarFeed for InMemoryBarFeed {
    async fn fetch_daily_bars(
        &self,
        symbol: &Symbol,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<DailyBar>, BarFeedError> {
        if let Some(message) = self.failing.get(symbol) {
            return Err(BarFeedError::ConnectionError {
                message: message.clone(),
            });
        }

        let bars = self.bars.get(symbol).ok_or_else(|| BarFeedError::NoData {
            symbol: symbol.to_string(),
        })?;

        Ok(bars
            .iter()
            .filter(|b| b.date >= start && b.date <= end)
            .copied()
            .collect())
    }

    fn name(&self) -> &'static str {
        "InMemory"
    }
}
