//! Output map from metric to scalar value

use crate::{config::KeyStyle, Metric, Span, Tick};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A single measured scalar
///
/// Counts and raw tick widths stay integral; rates and spreads are floats.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MeasurementValue {
    Integer(i64),
    Float(f64),
}

impl MeasurementValue {
    pub fn as_f64(&self) -> f64 {
        match *self {
            MeasurementValue::Integer(v) => v as f64,
            MeasurementValue::Float(v) => v,
        }
    }

    /// Integral tick span, `None` when it does not fit the output range
    pub fn from_span(span: Span) -> Option<Self> {
        i64::try_from(span).ok().map(MeasurementValue::Integer)
    }

    /// Integral value, `None` for floats
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            MeasurementValue::Integer(v) => Some(v),
            MeasurementValue::Float(_) => None,
        }
    }
}

impl From<f64> for MeasurementValue {
    fn from(v: f64) -> Self {
        MeasurementValue::Float(v)
    }
}

impl From<Tick> for MeasurementValue {
    fn from(v: Tick) -> Self {
        MeasurementValue::Integer(v)
    }
}

impl From<u64> for MeasurementValue {
    fn from(v: u64) -> Self {
        MeasurementValue::Integer(i64::try_from(v).unwrap_or(i64::MAX))
    }
}

impl fmt::Display for MeasurementValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeasurementValue::Integer(v) => write!(f, "{v}"),
            MeasurementValue::Float(v) => write!(f, "{v}"),
        }
    }
}

/// Result of one measurement pass
///
/// Holds one entry per requested metric that could be derived. Metrics whose
/// inputs were never observed are absent rather than zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Measurements {
    values: BTreeMap<Metric, MeasurementValue>,
}

impl Measurements {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, metric: Metric, value: impl Into<MeasurementValue>) {
        self.values.insert(metric, value.into());
    }

    pub fn get(&self, metric: Metric) -> Option<MeasurementValue> {
        self.values.get(&metric).copied()
    }

    pub fn contains(&self, metric: Metric) -> bool {
        self.values.contains_key(&metric)
    }

    /// Entries in canonical metric order
    pub fn iter(&self) -> impl Iterator<Item = (Metric, MeasurementValue)> + '_ {
        self.values.iter().map(|(m, v)| (*m, *v))
    }

    pub fn metrics(&self) -> impl Iterator<Item = Metric> + '_ {
        self.values.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Re-key the map by metric name in the given style
    pub fn to_named(&self, style: KeyStyle) -> BTreeMap<String, MeasurementValue> {
        self.iter()
            .map(|(metric, value)| (style.key(metric).to_string(), value))
            .collect()
    }
}

impl IntoIterator for Measurements {
    type Item = (Metric, MeasurementValue);
    type IntoIter = std::collections::btree_map::IntoIter<Metric, MeasurementValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}
