//! Domain Layer
//!
//! The innermost layer containing business logic with zero infrastructure
//! dependencies.
//!
//! # Bounded Contexts
//!
//! - [`market_data`]: daily bars and bar series as loaded from the feed
//! - [`performance`]: return decomposition, compounding, range summaries
//! - [`shared`]: value objects and errors used across contexts

pub mod market_data;
pub mod performance;
pub mod shared;
