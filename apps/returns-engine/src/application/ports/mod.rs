//! Application Ports (Driver and Driven)
//!
//! Ports define interfaces for interacting with external systems.
//! - **Driver Ports** (Primary/Inbound): How the world uses our application
//! - **Driven Ports** (Secondary/Outbound): How our application uses external systems

mod bar_feed_port;

pub use bar_feed_port::{BarFeedError, DailyBarFeed, InMemoryBarFeed};
