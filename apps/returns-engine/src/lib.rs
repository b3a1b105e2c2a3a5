// Allow unwrap/expect in tests - tests should panic on unexpected errors
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::float_cmp,
        clippy::too_many_lines,
        clippy::items_after_statements
    )
)]

//! Returns Engine - Rust Core Library
//!
//! Computation engine behind the Daybreak dashboard: decomposes daily
//! open/close bars into overnight, intraday, and buy-and-hold returns, and
//! serves cumulative series plus range metrics per symbol and date range.
//!
//! # Architecture (Clean Architecture + DDD + Hexagonal)
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: Core business logic (value objects, domain services)
//!   - `market_data`: daily bars, bar series, the repository trait
//!   - `performance`: return decomposition, compounding, range summaries
//! - **Application**: Use cases and orchestration
//!   - `ports`: interfaces for external systems (`DailyBarFeed`)
//!   - `use_cases`: `QueryPerformance`
//!   - `dto`: data transfer objects for API boundaries
//! - **Infrastructure**: Adapters (implementations)
//!   - `market_data`: startup-loaded `BarStore`, chart API feed adapter
//!   - `http`: axum controller with placeholder degradation

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Clean Architecture Layers
// =============================================================================

/// Domain layer - Core business logic with no external dependencies.
pub mod domain;

/// Application layer - Use cases and port definitions.
pub mod application;

/// Infrastructure layer - Adapters and external integrations.
pub mod infrastructure;

/// Error taxonomy for the request pipeline.
pub mod error;

// =============================================================================
// Re-exports from Clean Architecture
// =============================================================================

// Domain re-exports
pub use domain::market_data::{BarRepository, BarSeries, DailyBar};
pub use domain::performance::{
    CumulativePoint, DailyReturn, PerformanceError, RangeSummary, cumulative, daily_returns,
    range_summary,
};
pub use domain::shared::{DateRange, DomainError, Symbol};

// Application re-exports
pub use application::dto::{MetricsDto, PerformanceDto, SeriesPointDto};
pub use application::ports::{BarFeedError, DailyBarFeed, InMemoryBarFeed};
pub use application::use_cases::QueryPerformanceUseCase;

// Error taxonomy re-exports
pub use error::{EngineError, ErrorCode};

// Infrastructure re-exports
pub use infrastructure::http::{AppState, create_router};
pub use infrastructure::market_data::{BarStore, ChartApiFeed, INDEX_CHOICES, supported_symbols};
