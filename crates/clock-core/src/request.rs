//! Validated sets of requested metrics

use crate::{Error, Metric, Result};
use std::collections::BTreeSet;

/// The metrics a caller asked a measurer to produce
///
/// A request can only be built against a supported set, so holding one
/// means every metric in it is producible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MeasurementRequest {
    metrics: BTreeSet<Metric>,
}

impl MeasurementRequest {
    /// Parse metric names, failing on the first one outside `supported`
    ///
    /// Both canonical and host spellings are accepted. Duplicates collapse.
    pub fn parse<I, S>(names: I, supported: &[Metric]) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut metrics = BTreeSet::new();
        for name in names {
            let name = name.as_ref();
            let metric: Metric = name.parse()?;
            if !supported.contains(&metric) {
                return Err(Error::unsupported(name));
            }
            metrics.insert(metric);
        }
        Ok(Self { metrics })
    }

    /// Build from typed metrics, failing on the first one outside `supported`
    pub fn from_metrics<I>(metrics: I, supported: &[Metric]) -> Result<Self>
    where
        I: IntoIterator<Item = Metric>,
    {
        let mut set = BTreeSet::new();
        for metric in metrics {
            if !supported.contains(&metric) {
                return Err(Error::unsupported(metric.name()));
            }
            set.insert(metric);
        }
        Ok(Self { metrics: set })
    }

    /// Request every supported metric
    pub fn all(supported: &[Metric]) -> Self {
        Self {
            metrics: supported.iter().copied().collect(),
        }
    }

    pub fn contains(&self, metric: Metric) -> bool {
        self.metrics.contains(&metric)
    }

    /// Requested metrics in canonical order
    pub fn iter(&self) -> impl Iterator<Item = Metric> + '_ {
        self.metrics.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.metrics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }
}
