//! Market Data Infrastructure
//!
//! The startup-loaded bar store, the instrument catalog, and the HTTP feed
//! adapter behind the [`DailyBarFeed`](crate::application::ports::DailyBarFeed)
//! port.

mod catalog;
mod chart_api;
mod store;

pub use catalog::{INDEX_CHOICES, IndexChoice, supported_symbols};
pub use chart_api::{ChartApiFeed, DEFAULT_BASE_URL};
pub use store::BarStore;
