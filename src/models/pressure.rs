//! Pressure reading and pressure series models
//!
//! A [`PressureSeries`] owns a chronologically sorted, three-hour window of
//! barometric readings and is the sole input for trend extraction. The window
//! is anchored to the newest reading in the data, not to wall-clock time, so
//! a series built from archived data stays reproducible.

use crate::error::ZambrettiError;
use crate::Result;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Minimum number of readings that must survive windowing
pub const MIN_READINGS: usize = 6;

/// Length of the trend window in hours, anchored at the newest reading
pub const TREND_WINDOW_HOURS: i64 = 3;

/// A single timestamped barometric pressure observation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PressureReading {
    /// When the pressure was observed
    pub timestamp: DateTime<Utc>,
    /// Station pressure in hPa
    pub pressure_hpa: f64,
}

impl PressureReading {
    /// Create a reading, rejecting non-positive or non-finite pressure
    pub fn new(timestamp: DateTime<Utc>, pressure_hpa: f64) -> Result<Self> {
        if !pressure_hpa.is_finite() || pressure_hpa <= 0.0 {
            return Err(ZambrettiError::out_of_range(format!(
                "pressure must be a positive finite value in hPa, got {pressure_hpa}"
            )));
        }
        Ok(Self {
            timestamp,
            pressure_hpa,
        })
    }
}

/// An immutable, windowed series of pressure readings
///
/// Construction copies the caller's points, sorts them by timestamp, drops
/// everything older than [`TREND_WINDOW_HOURS`] before the newest reading,
/// and requires at least [`MIN_READINGS`] survivors. There is no mutation
/// API, so a constructed series can be shared freely across forecast calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PressureSeries {
    readings: Vec<PressureReading>,
}

impl PressureSeries {
    /// Build a series from (timestamp, pressure in hPa) pairs
    ///
    /// The input does not need to be sorted. Fails if any pressure value is
    /// invalid or fewer than [`MIN_READINGS`] readings remain inside the
    /// window.
    pub fn from_points<I>(points: I) -> Result<Self>
    where
        I: IntoIterator<Item = (DateTime<Utc>, f64)>,
    {
        let mut readings = points
            .into_iter()
            .map(|(timestamp, pressure_hpa)| PressureReading::new(timestamp, pressure_hpa))
            .collect::<Result<Vec<_>>>()?;
        readings.sort_by_key(|reading| reading.timestamp);

        if let Some(newest) = readings.last().copied() {
            let cutoff = newest.timestamp - Duration::hours(TREND_WINDOW_HOURS);
            readings.retain(|reading| reading.timestamp >= cutoff);
        }

        let series = Self { readings };
        series.validate()?;
        Ok(series)
    }

    /// Re-check the minimum-count invariant
    ///
    /// Construction already enforces this; the forecast engine calls it
    /// again so a series smuggled in through deserialization cannot bypass
    /// the rule.
    pub fn validate(&self) -> Result<()> {
        if self.readings.len() < MIN_READINGS {
            return Err(ZambrettiError::InsufficientReadings {
                have: self.readings.len(),
                required: MIN_READINGS,
            });
        }
        Ok(())
    }

    /// Number of readings inside the window
    #[must_use]
    pub fn len(&self) -> usize {
        self.readings.len()
    }

    /// True when the series holds no readings
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    /// All readings, oldest first
    #[must_use]
    pub fn readings(&self) -> &[PressureReading] {
        &self.readings
    }

    /// Oldest reading inside the window
    #[must_use]
    pub fn first(&self) -> Option<&PressureReading> {
        self.readings.first()
    }

    /// Newest reading inside the window
    #[must_use]
    pub fn latest(&self) -> Option<&PressureReading> {
        self.readings.last()
    }

    /// Elapsed time between the oldest and newest reading, in hours
    #[must_use]
    pub fn span_hours(&self) -> f64 {
        match (self.readings.first(), self.readings.last()) {
            (Some(first), Some(last)) => {
                (last.timestamp - first.timestamp).num_milliseconds() as f64 / 3_600_000.0
            }
            _ => 0.0,
        }
    }

    /// Signed pressure rate of change across the window, in hPa per hour
    ///
    /// Computed as `(newest - oldest) / elapsed hours`. Fails when the
    /// series is invalid or every reading shares a single timestamp.
    pub fn trend_hpa_per_hour(&self) -> Result<f64> {
        self.validate()?;

        let first = self.readings[0];
        let last = self.readings[self.readings.len() - 1];
        let hours = self.span_hours();
        if hours <= 0.0 {
            return Err(ZambrettiError::degenerate_series(
                "all readings share a single timestamp, no elapsed time for a trend",
            ));
        }
        Ok((last.pressure_hpa - first.pressure_hpa) / hours)
    }
}
