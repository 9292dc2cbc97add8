//! Pressure trend classification
//!
//! The published Zambretti forecaster treats a three-hour change of less
//! than ±1.6 hPa as steady. The series hands us a rate in hPa per hour, so
//! the same band is applied as a rate.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Steady band of the published forecaster: ±1.6 hPa over the window
pub const STEADY_BAND_HPA: f64 = 1.6;

/// Rate threshold in hPa per hour, the steady band spread over three hours
pub const TREND_THRESHOLD_HPA_PER_HOUR: f64 = STEADY_BAND_HPA / 3.0;

/// Direction of the barometric pressure trend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrendCategory {
    Rising,
    Falling,
    Steady,
}

impl TrendCategory {
    /// Classify a pressure rate of change in hPa per hour
    ///
    /// A rate at exactly the threshold counts as Rising (or Falling on the
    /// negative side), so the steady band is open at both ends.
    #[must_use]
    pub fn classify(rate_hpa_per_hour: f64) -> Self {
        if rate_hpa_per_hour >= TREND_THRESHOLD_HPA_PER_HOUR {
            TrendCategory::Rising
        } else if rate_hpa_per_hour <= -TREND_THRESHOLD_HPA_PER_HOUR {
            TrendCategory::Falling
        } else {
            TrendCategory::Steady
        }
    }
}

impl fmt::Display for TrendCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrendCategory::Rising => write!(f, "Rising"),
            TrendCategory::Falling => write!(f, "Falling"),
            TrendCategory::Steady => write!(f, "Steady"),
        }
    }
}
