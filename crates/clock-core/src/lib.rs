//! Core types and traits for digital clock measurements
//!
//! This crate holds everything a clock measurer and its host share: the
//! transition event types, the closed metric vocabulary, validated
//! measurement requests, the output map and the [`DigitalMeasurer`] seam.
//!
//! # Example
//!
//! ```rust
//! use clock_core::{MeasurementRequest, Metric, Transition, Level};
//!
//! let request = MeasurementRequest::parse(["edges_rising", "frequencyAvg"], &Metric::ALL).unwrap();
//! assert!(request.contains(Metric::FrequencyAvg));
//!
//! let edge: Transition = (10, true).into();
//! assert_eq!(edge.level, Level::High);
//! ```

pub mod config;
pub mod error;
pub mod measurements;
pub mod metric;
pub mod request;
pub mod traits;
pub mod types;

pub use config::{KeyStyle, MeasurementConfig};
pub use error::{Error, Result};
pub use measurements::{MeasurementValue, Measurements};
pub use metric::Metric;
pub use request::MeasurementRequest;
pub use traits::DigitalMeasurer;
pub use types::{span, Level, Span, Tick, Transition};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        DigitalMeasurer, Error, KeyStyle, Level, MeasurementConfig, MeasurementRequest,
        MeasurementValue, Measurements, Metric, Result, Span, Tick, Transition,
    };
}
