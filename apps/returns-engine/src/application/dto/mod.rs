//! Data Transfer Objects
//!
//! Serializable shapes handed across the application boundary.

mod performance_dto;

pub use performance_dto::{MetricsDto, PerformanceDto, SeriesPointDto};
