//! Configuration types for clock measurements

use crate::{MeasurementRequest, Metric, Result};
use serde::{Deserialize, Serialize};

/// How metric names are spelled when results are keyed by string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyStyle {
    /// snake_case names, e.g. `edges_rising`
    #[default]
    Canonical,
    /// camelCase keys of the host framework, e.g. `edgesRising`
    Host,
}

impl KeyStyle {
    pub fn key(self, metric: Metric) -> &'static str {
        match self {
            KeyStyle::Canonical => metric.name(),
            KeyStyle::Host => metric.host_key(),
        }
    }
}

/// Serializable description of a measurement pass
///
/// Names are kept as strings until [`request`](Self::request) so an
/// unsupported name surfaces as `UnsupportedMeasurement` rather than a
/// deserialization failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeasurementConfig {
    /// Requested metric names, canonical or host spelling
    pub requested: Vec<String>,
    /// Key spelling for string-keyed output
    pub key_style: KeyStyle,
}

impl Default for MeasurementConfig {
    fn default() -> Self {
        Self {
            requested: Metric::ALL.iter().map(|m| m.name().to_string()).collect(),
            key_style: KeyStyle::default(),
        }
    }
}

impl MeasurementConfig {
    /// Parse a JSON config; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validate the requested names against a supported set
    pub fn request(&self, supported: &[Metric]) -> Result<MeasurementRequest> {
        MeasurementRequest::parse(&self.requested, supported)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_default_requests_everything() {
        let config = MeasurementConfig::default();
        let request = config.request(&Metric::ALL).unwrap();
        assert_eq!(request.len(), Metric::ALL.len());
        assert_eq!(config.key_style, KeyStyle::Canonical);
    }

    #[test]
    fn test_from_json() {
        let config = MeasurementConfig::from_json(
            r#"{"requested": ["edgesRising", "period_std_dev"], "key_style": "host"}"#,
        )
        .unwrap();
        assert_eq!(config.key_style, KeyStyle::Host);

        let request = config.request(&Metric::ALL).unwrap();
        assert!(request.contains(Metric::EdgesRising));
        assert!(request.contains(Metric::PeriodStdDev));
        assert_eq!(request.len(), 2);
    }

    #[test]
    fn test_from_json_partial() {
        let config = MeasurementConfig::from_json(r#"{"key_style": "host"}"#).unwrap();
        assert_eq!(config.requested.len(), Metric::ALL.len());
    }

    #[test]
    fn test_from_json_malformed() {
        let err = MeasurementConfig::from_json(r#"{"requested": 7}"#).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn test_unsupported_name_in_config() {
        let config = MeasurementConfig {
            requested: vec!["riseTime".to_string()],
            ..Default::default()
        };
        let err = config.request(&Metric::ALL).unwrap_err();
        assert!(matches!(err, Error::UnsupportedMeasurement(ref name) if name == "riseTime"));
    }
}
