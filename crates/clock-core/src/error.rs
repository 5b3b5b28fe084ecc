//! Error types for digital clock measurements
//!
//! Provides a unified error type for all clock-stats crates.

use thiserror::Error;

/// Core error type for clock measurement setup
#[derive(Error, Debug)]
pub enum Error {
    /// A requested metric is not in the measurer's supported set
    #[error("Unsupported measurement: {0}")]
    UnsupportedMeasurement(String),

    /// Measurement configuration could not be read
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for a metric name outside the supported set
    pub fn unsupported(name: impl Into<String>) -> Self {
        Self::UnsupportedMeasurement(name.into())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidConfig(err.to_string())
    }
}
