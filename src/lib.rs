//! # clock-stats
//!
//! Streaming clock statistics over the transition timeline of a digital
//! signal: edge counts, frequency bounds, period standard deviation and
//! pulse-width extrema and sums.
//!
//! This is a facade over the workspace crates:
//!
//! - [`clock_core`]: transition types, metric vocabulary, requests, results
//! - [`clock_accumulator`]: the single-pass accumulator and batch helpers
//!
//! ## Quick Start
//!
//! ```rust
//! use clock_stats::prelude::*;
//!
//! let mut clock = ClockStatsAccumulator::new(["edgesRising", "frequencyAvg", "positiveWidth"]).unwrap();
//! clock.ingest([(0_i64, false), (10, true), (20, false), (30, true), (40, false)]);
//!
//! let results = clock.measure();
//! for (key, value) in results.to_named(KeyStyle::Host) {
//!     println!("{key}: {value}");
//! }
//! ```
//!
//! ## Feature Flags
//!
//! - `parallel`: measure independent channels on the rayon thread pool

pub use clock_accumulator;
pub use clock_core;

pub use clock_accumulator::{
    batch, measure_channel, measure_channels, measure_clock_channels, ClockStatsAccumulator,
    PeriodStats, PulseStats,
};
pub use clock_core::{
    DigitalMeasurer, Error, KeyStyle, Level, MeasurementConfig, MeasurementRequest,
    MeasurementValue, Measurements, Metric, Result, Tick, Transition,
};

pub mod prelude {
    pub use clock_accumulator::{measure_clock_channels, ClockStatsAccumulator};
    pub use clock_core::prelude::*;
}
