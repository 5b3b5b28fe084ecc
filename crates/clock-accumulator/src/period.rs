//! Running statistics over full clock periods
//!
//! Uses Welford's numerically stable online algorithm for the mean and
//! variance, so memory use is independent of the number of periods.

use clock_core::Span;

/// Running statistics over full-period durations
///
/// The extrema follow an exclusive update rule: the first period seeds both
/// bounds, and every later period can move at most one of them. A value
/// below the minimum lowers the minimum; only otherwise is it checked
/// against the maximum. Existing consumers depend on this exact behaviour.
///
/// # Example
///
/// ```
/// use clock_accumulator::PeriodStats;
///
/// let mut periods = PeriodStats::new();
/// for period in [20, 20, 22, 18] {
///     periods.add(period);
/// }
///
/// assert_eq!(periods.count(), 4);
/// assert_eq!(periods.min(), Some(18));
/// assert_eq!(periods.max(), Some(22));
/// assert!((periods.mean().unwrap() - 20.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PeriodStats {
    /// Number of periods seen
    count: u64,
    /// Running mean
    mean: f64,
    /// Sum of squared differences from mean (M2 in Welford's algorithm)
    m2: f64,
    min: Option<Span>,
    max: Option<Span>,
}

impl PeriodStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one full-period duration
    pub fn add(&mut self, period: Span) {
        match (self.min, self.max) {
            (Some(min), Some(max)) => {
                if period < min {
                    self.min = Some(period);
                } else if period > max {
                    self.max = Some(period);
                }
            }
            _ => {
                self.min = Some(period);
                self.max = Some(period);
            }
        }

        // Welford's algorithm
        let value = period as f64;
        self.count += 1;
        let delta = value - self.mean;
        self.mean += delta / self.count as f64;
        let delta2 = value - self.mean;
        self.m2 += delta * delta2;
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Shortest period, if any were seen
    pub fn min(&self) -> Option<Span> {
        self.min
    }

    /// Longest period, if any were seen
    pub fn max(&self) -> Option<Span> {
        self.max
    }

    pub fn mean(&self) -> Option<f64> {
        (self.count > 0).then_some(self.mean)
    }

    /// Sample variance with Bessel's correction
    ///
    /// Needs at least two periods.
    pub fn sample_variance(&self) -> Option<f64> {
        (self.count > 1).then(|| self.m2 / (self.count - 1) as f64)
    }

    /// Sample standard deviation
    pub fn sample_stddev(&self) -> Option<f64> {
        self.sample_variance().map(f64::sqrt)
    }
}
