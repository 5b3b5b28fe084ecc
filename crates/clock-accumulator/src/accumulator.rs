//! Single-pass clock statistics over a digital transition stream
//!
//! The accumulator consumes each transition once, keeps O(1) state, and
//! derives the requested metrics on demand.

use crate::{PeriodStats, PulseStats};
use clock_core::{
    span, DigitalMeasurer, Level, MeasurementConfig, MeasurementRequest, MeasurementValue,
    Measurements, Metric, Result, Span, Tick, Transition,
};
use tracing::{debug, trace};

/// Streaming clock statistics for one channel
///
/// Full periods are measured between consecutive transitions to the level of
/// the very first transition. Pulse widths are measured between any two
/// consecutive transitions: a gap ending on a transition to low is a
/// positive pulse (the preceding high time), a gap ending on a transition to
/// high is a negative pulse.
///
/// # Example
///
/// ```
/// use clock_accumulator::ClockStatsAccumulator;
/// use clock_core::{DigitalMeasurer, Metric};
///
/// let mut clock = ClockStatsAccumulator::new(["edges_rising", "frequency_avg"]).unwrap();
/// clock.ingest([(0_i64, false), (10, true), (20, false), (30, true), (40, false)]);
///
/// let results = clock.measure();
/// assert_eq!(results.get(Metric::EdgesRising).unwrap().as_i64(), Some(2));
/// assert!((results.get(Metric::FrequencyAvg).unwrap().as_f64() - 0.05).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct ClockStatsAccumulator {
    request: MeasurementRequest,

    edges_rising: u64,
    edges_falling: u64,

    /// Level and time of the very first transition, set once
    first: Option<Transition>,
    /// Most recent transition to the first transition's level
    last_same_level_time: Option<Tick>,
    /// Time of the immediately preceding transition
    prev_time: Option<Tick>,

    periods: PeriodStats,
    positive: PulseStats,
    negative: PulseStats,
}

impl ClockStatsAccumulator {
    /// Create an accumulator for the named metrics
    ///
    /// Names may use the canonical or the host spelling. Fails with
    /// `UnsupportedMeasurement` on the first unknown name.
    pub fn new<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_names(names)
    }

    /// Create an accumulator for typed metrics
    pub fn with_metrics<I>(metrics: I) -> Result<Self>
    where
        I: IntoIterator<Item = Metric>,
    {
        Self::from_request(MeasurementRequest::from_metrics(metrics, Self::SUPPORTED)?)
    }

    /// Create an accumulator that derives every supported metric
    pub fn all() -> Self {
        Self::with_request(MeasurementRequest::all(Self::SUPPORTED))
    }

    /// Create an accumulator from a deserialized measurement config
    pub fn from_config(config: &MeasurementConfig) -> Result<Self> {
        Self::from_request(config.request(Self::SUPPORTED)?)
    }

    fn with_request(request: MeasurementRequest) -> Self {
        debug!("Clock stats accumulator created for {} metrics", request.len());
        Self {
            request,
            edges_rising: 0,
            edges_falling: 0,
            first: None,
            last_same_level_time: None,
            prev_time: None,
            periods: PeriodStats::new(),
            positive: PulseStats::new(),
            negative: PulseStats::new(),
        }
    }

    /// Consume transitions in time order
    ///
    /// Chunked calls are equivalent to one call over the concatenation.
    pub fn ingest<I, E>(&mut self, events: I)
    where
        I: IntoIterator<Item = E>,
        E: Into<Transition>,
    {
        let before = self.events_seen();
        for event in events {
            self.push(event);
        }
        debug!(
            "Ingested {} transitions ({} total, {} full periods)",
            self.events_seen() - before,
            self.events_seen(),
            self.periods.count()
        );
    }

    /// Consume a single transition
    pub fn push(&mut self, event: impl Into<Transition>) {
        let Transition { time, level } = event.into();

        match self.first {
            None => {
                self.first = Some(Transition { time, level });
            }
            Some(first) if first.level == level => {
                let since = self.last_same_level_time.unwrap_or(first.time);
                self.last_same_level_time = Some(time);
                self.periods.add(span(since, time));
            }
            Some(_) => {}
        }

        if let Some(prev) = self.prev_time {
            let width = span(prev, time);
            match level {
                Level::High => self.negative.add(width),
                Level::Low => self.positive.add(width),
            }
        }
        self.prev_time = Some(time);

        match level {
            Level::High => self.edges_rising += 1,
            Level::Low => self.edges_falling += 1,
        }
    }

    /// Derive a single metric, `None` when its inputs are not yet observed
    pub fn derive(&self, metric: Metric) -> Option<MeasurementValue> {
        let value: Option<MeasurementValue> = match metric {
            Metric::EdgesRising => Some(self.edges_rising.into()),
            Metric::EdgesFalling => Some(self.edges_falling.into()),
            Metric::FrequencyAvg => self.frequency_avg().map(Into::into),
            Metric::FrequencyMin => reciprocal(self.periods.max()).map(Into::into),
            Metric::FrequencyMax => reciprocal(self.periods.min()).map(Into::into),
            Metric::PeriodStdDev => self.periods.sample_stddev().map(Into::into),
            Metric::PositiveMax => self.positive.max().and_then(MeasurementValue::from_span),
            Metric::PositiveMin => self.positive.min().and_then(MeasurementValue::from_span),
            Metric::NegativeMax => self.negative.max().and_then(MeasurementValue::from_span),
            Metric::NegativeMin => self.negative.min().and_then(MeasurementValue::from_span),
            Metric::PositiveWidth => self.positive.total().and_then(MeasurementValue::from_span),
            Metric::NegativeWidth => self.negative.total().and_then(MeasurementValue::from_span),
        };
        if value.is_none() {
            trace!("Omitting {metric}: not derivable from {} transitions", self.events_seen());
        }
        value
    }

    /// Average frequency over whole periods
    ///
    /// Counts only full periods of the first transition's level, so the
    /// result does not depend on where the capture window cuts an edge.
    /// This is `1 / mean period`, not the mean of per-period frequencies.
    fn frequency_avg(&self) -> Option<f64> {
        let first = self.first?;
        let last = self.last_same_level_time?;
        let elapsed = span(first.time, last);
        if elapsed == 0 {
            return None;
        }
        let same_level_edges = match first.level {
            Level::High => self.edges_rising,
            Level::Low => self.edges_falling,
        };
        // Fence post: n edges bound n - 1 periods
        let periods = same_level_edges.saturating_sub(1);
        Some(periods as f64 / elapsed as f64)
    }

    /// Total transitions consumed
    pub fn events_seen(&self) -> u64 {
        self.edges_rising + self.edges_falling
    }

    pub fn edges_rising(&self) -> u64 {
        self.edges_rising
    }

    pub fn edges_falling(&self) -> u64 {
        self.edges_falling
    }

    /// The very first transition seen
    pub fn first_transition(&self) -> Option<Transition> {
        self.first
    }

    /// Time of the latest transition to the first transition's level
    pub fn last_same_level_time(&self) -> Option<Tick> {
        self.last_same_level_time
    }

    pub fn period_stats(&self) -> &PeriodStats {
        &self.periods
    }

    /// Gaps ending on a transition to low
    pub fn positive_pulses(&self) -> &PulseStats {
        &self.positive
    }

    /// Gaps ending on a transition to high
    pub fn negative_pulses(&self) -> &PulseStats {
        &self.negative
    }

    /// Discard all ingested state, keeping the request
    pub fn reset(&mut self) {
        let request = std::mem::take(&mut self.request);
        *self = Self::with_request(request);
    }
}

fn reciprocal(period: Option<Span>) -> Option<f64> {
    period.filter(|&p| p != 0).map(|p| 1.0 / p as f64)
}

impl DigitalMeasurer for ClockStatsAccumulator {
    const SUPPORTED: &'static [Metric] = &Metric::ALL;

    fn from_request(request: MeasurementRequest) -> Result<Self> {
        let request = MeasurementRequest::from_metrics(request.iter(), Self::SUPPORTED)?;
        Ok(Self::with_request(request))
    }

    fn requested(&self) -> &MeasurementRequest {
        &self.request
    }

    fn process_data<I, E>(&mut self, data: I)
    where
        I: IntoIterator<Item = E>,
        E: Into<Transition>,
    {
        self.ingest(data);
    }

    fn measure(&self) -> Measurements {
        let mut values = Measurements::new();
        for metric in self.request.iter() {
            if let Some(value) = self.derive(metric) {
                values.insert(metric, value);
            }
        }
        values
    }
}
