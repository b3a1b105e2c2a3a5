//! HTTP Infrastructure
//!
//! Axum router, request/response shapes, and the always-200 placeholder
//! degradation at the request boundary.

mod controller;
mod request;
mod response;

pub use controller::{AppState, create_router};
pub use request::PerformanceQuery;
pub use response::{
    HealthResponse, MetricsResponse, PerformanceResponse, SeriesPointResponse, SymbolInfo,
    SymbolsResponse,
};
