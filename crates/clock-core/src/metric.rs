//! The closed vocabulary of clock metrics

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A named scalar that a clock measurer can produce
///
/// Each metric has a canonical snake_case name and the camelCase key the
/// host measurement framework uses. Parsing accepts either spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// Number of transitions to the high level
    EdgesRising,
    /// Number of transitions to the low level
    EdgesFalling,
    /// Full periods counted over the span between first and last same-level edge
    FrequencyAvg,
    /// Reciprocal of the longest full period
    FrequencyMin,
    /// Reciprocal of the shortest full period
    FrequencyMax,
    /// Bessel-corrected standard deviation of full periods
    PeriodStdDev,
    /// Longest gap ending on a transition to low
    PositiveMax,
    /// Shortest gap ending on a transition to low
    PositiveMin,
    /// Longest gap ending on a transition to high
    NegativeMax,
    /// Shortest gap ending on a transition to high
    NegativeMin,
    /// Sum of gaps ending on a transition to low
    PositiveWidth,
    /// Sum of gaps ending on a transition to high
    NegativeWidth,
}

impl Metric {
    /// All metrics in canonical order
    pub const ALL: [Metric; 12] = [
        Metric::EdgesRising,
        Metric::EdgesFalling,
        Metric::FrequencyAvg,
        Metric::FrequencyMin,
        Metric::FrequencyMax,
        Metric::PeriodStdDev,
        Metric::PositiveMax,
        Metric::PositiveMin,
        Metric::NegativeMax,
        Metric::NegativeMin,
        Metric::PositiveWidth,
        Metric::NegativeWidth,
    ];

    /// Canonical snake_case name
    pub fn name(self) -> &'static str {
        match self {
            Metric::EdgesRising => "edges_rising",
            Metric::EdgesFalling => "edges_falling",
            Metric::FrequencyAvg => "frequency_avg",
            Metric::FrequencyMin => "frequency_min",
            Metric::FrequencyMax => "frequency_max",
            Metric::PeriodStdDev => "period_std_dev",
            Metric::PositiveMax => "positive_max",
            Metric::PositiveMin => "positive_min",
            Metric::NegativeMax => "negative_max",
            Metric::NegativeMin => "negative_min",
            Metric::PositiveWidth => "positive_width",
            Metric::NegativeWidth => "negative_width",
        }
    }

    /// Key used by the host measurement framework
    pub fn host_key(self) -> &'static str {
        match self {
            Metric::EdgesRising => "edgesRising",
            Metric::EdgesFalling => "edgesFalling",
            Metric::FrequencyAvg => "frequencyAvg",
            Metric::FrequencyMin => "frequencyMin",
            Metric::FrequencyMax => "frequencyMax",
            Metric::PeriodStdDev => "periodStdDev",
            Metric::PositiveMax => "positiveMax",
            Metric::PositiveMin => "positiveMin",
            Metric::NegativeMax => "negativeMax",
            Metric::NegativeMin => "negativeMin",
            Metric::PositiveWidth => "positiveWidth",
            Metric::NegativeWidth => "negativeWidth",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Metric {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Metric::ALL
            .iter()
            .copied()
            .find(|m| m.name() == s || m.host_key() == s)
            .ok_or_else(|| Error::unsupported(s))
    }
}
