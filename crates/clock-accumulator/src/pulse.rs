//! Half-period (pulse width) aggregates

use clock_core::Span;

/// Extrema and total of pulse widths of one polarity
///
/// Unlike [`PeriodStats`](crate::PeriodStats), the bounds here update
/// independently.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PulseStats {
    count: u64,
    min: Option<Span>,
    max: Option<Span>,
    sum: Span,
}

impl PulseStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one pulse width
    pub fn add(&mut self, width: Span) {
        if self.max.map_or(true, |max| max < width) {
            self.max = Some(width);
        }
        if self.min.map_or(true, |min| min > width) {
            self.min = Some(width);
        }
        self.sum = self.sum.saturating_add(width);
        self.count += 1;
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn min(&self) -> Option<Span> {
        self.min
    }

    pub fn max(&self) -> Option<Span> {
        self.max
    }

    /// Total width, `None` until a pulse has been seen
    pub fn total(&self) -> Option<Span> {
        (self.count > 0).then_some(self.sum)
    }

    pub fn mean(&self) -> Option<f64> {
        (self.count > 0).then(|| self.sum as f64 / self.count as f64)
    }
}
