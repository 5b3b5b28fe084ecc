//! Single-pass clock statistics for digital signals
//!
//! This crate turns a time-ordered stream of level transitions into edge
//! counts, frequency bounds, period spread and pulse-width statistics.
//!
//! # Components
//!
//! - [`ClockStatsAccumulator`]: the per-channel measurer
//! - [`PeriodStats`]: Welford mean/variance and extrema over full periods
//! - [`PulseStats`]: extrema and totals of one pulse polarity
//! - [`batch`]: one measurer per channel over several captures
//!
//! ## Usage
//!
//! ```rust
//! use clock_accumulator::ClockStatsAccumulator;
//! use clock_core::{DigitalMeasurer, Metric};
//!
//! let mut clock = ClockStatsAccumulator::all();
//! for chunk in [[(0_i64, false), (10, true)], [(20, false), (30, true)]] {
//!     clock.ingest(chunk);
//! }
//!
//! let results = clock.measure();
//! assert_eq!(results.get(Metric::EdgesFalling).unwrap().as_i64(), Some(2));
//! ```

pub mod accumulator;
pub mod batch;
pub mod period;
pub mod pulse;

pub use accumulator::ClockStatsAccumulator;
pub use batch::{measure_channel, measure_channels, measure_clock_channels};
pub use period::PeriodStats;
pub use pulse::PulseStats;
