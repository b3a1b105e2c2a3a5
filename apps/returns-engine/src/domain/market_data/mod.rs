//! Market Data Context
//!
//! Daily open/close bars as loaded from the external feed. Series are
//! immutable once constructed; all derived return series live in the
//! [`performance`](crate::domain::performance) context.

pub mod repository;
pub mod value_objects;

pub use repository::BarRepository;
pub use value_objects::{BarSeries, DailyBar};
