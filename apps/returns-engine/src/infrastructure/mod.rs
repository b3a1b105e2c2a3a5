//! Infrastructure Layer
//!
//! Adapters and external integrations: the bar store and feed adapter on the
//! driven side, the HTTP controller on the driver side.

pub mod http;
pub mod market_data;
