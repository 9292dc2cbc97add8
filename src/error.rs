//! Error types and handling for the `zambretti` library

use thiserror::Error;

/// Main error type for the `zambretti` library
#[derive(Error, Debug)]
pub enum ZambrettiError {
    /// Too few pressure readings survive the three-hour window
    #[error(
        "insufficient pressure readings: {have} within the last three hours, {required} required"
    )]
    InsufficientReadings { have: usize, required: usize },

    /// The series carries no usable time span for a trend
    #[error("degenerate pressure series: {message}")]
    DegenerateSeries { message: String },

    /// An input value is outside its physical or supported range
    #[error("input out of range: {message}")]
    OutOfRange { message: String },

    /// A forecast code has no text entry; indicates table corruption
    #[error("no forecast text for code {code}")]
    MissingDescription { code: u8 },
}

impl ZambrettiError {
    /// Create a new degenerate-series error
    pub fn degenerate_series<S: Into<String>>(message: S) -> Self {
        Self::DegenerateSeries {
            message: message.into(),
        }
    }

    /// Create a new out-of-range error
    pub fn out_of_range<S: Into<String>>(message: S) -> Self {
        Self::OutOfRange {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            ZambrettiError::InsufficientReadings { have, required } => {
                format!(
                    "Not enough recent pressure readings to forecast: {have} found, {required} required within the last three hours."
                )
            }
            ZambrettiError::DegenerateSeries { message } => {
                format!("Pressure history cannot support a trend: {message}")
            }
            ZambrettiError::OutOfRange { message } => {
                format!("Invalid input: {message}")
            }
            ZambrettiError::MissingDescription { .. } => {
                "Internal forecast table inconsistency. Please report this as a bug.".to_string()
            }
        }
    }
}
