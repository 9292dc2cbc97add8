//! Data models for the Zambretti forecaster
//!
//! This module contains the core domain models organized by concern:
//! - Pressure: timestamped readings and the windowed pressure series
//! - Wind: the 16-point compass rose used for the wind correction

pub mod pressure;
pub mod wind;

// Re-export all public types for convenient access
pub use pressure::{PressureReading, PressureSeries, MIN_READINGS, TREND_WINDOW_HOURS};
pub use wind::{WindDirection, COMPASS_ROSE};
