//! `zambretti` - Short-range weather forecasting from barometric pressure
//!
//! This library implements the classical Zambretti forecaster: the recent
//! pressure trend, the sea-level-corrected current pressure, the season and
//! an optional wind direction select one of the published forecast texts.
//! All computation is pure and synchronous; loading pressure history from
//! files or sensors is the caller's concern.

pub mod elevation;
pub mod engine;
pub mod error;
pub mod models;
pub mod season;
pub mod trend;

mod table;
mod text;

// Re-export core types for public API
pub use engine::{forecast, forecast_in_hemisphere};
pub use error::ZambrettiError;
pub use models::{PressureReading, PressureSeries, WindDirection};
pub use season::{Hemisphere, SeasonVariant};
pub use trend::TrendCategory;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, ZambrettiError>;
