//! Market Data Value Objects

mod bar_series;
mod daily_bar;

pub use bar_series::BarSeries;
pub use daily_bar::DailyBar;
