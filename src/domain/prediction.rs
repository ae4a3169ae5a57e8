//! Environmental prediction records and their error taxonomy.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Location and date a forecast is requested for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictionRequest {
    pub location: String,
    pub date: String,
}

impl PredictionRequest {
    pub fn new(location: impl Into<String>, date: impl Into<String>) -> Self {
        Self { location: location.into(), date: date.into() }
    }
}

/// Daily environmental forecast with the five metrics the model is asked for.
///
/// Values are taken as the service reports them; no range checking is applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentalPrediction {
    pub rainfall_mm: f64,
    pub temperature_c: f64,
    pub humidity_percent: f64,
    pub wind_speed_kmh: f64,
    pub spm_ugm3: f64,
}

impl EnvironmentalPrediction {
    /// Field name and value pairs in declaration order.
    pub fn fields(&self) -> [(&'static str, f64); 5] {
        [
            ("rainfall_mm", self.rainfall_mm),
            ("temperature_c", self.temperature_c),
            ("humidity_percent", self.humidity_percent),
            ("wind_speed_kmh", self.wind_speed_kmh),
            ("spm_ugm3", self.spm_ugm3),
        ]
    }
}

/// How strictly a decoded prediction object is checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldPolicy {
    /// Require the five numeric fields and decode them into [`EnvironmentalPrediction`].
    #[default]
    Strict,
    /// Accept any JSON object and return it untouched.
    Lenient,
}

/// A successfully decoded prediction.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Prediction {
    Typed(EnvironmentalPrediction),
    Untyped(Map<String, Value>),
}

impl Prediction {
    /// Key and rendered value pairs, in the order the service or record holds them.
    pub fn entries(&self) -> Vec<(String, String)> {
        match self {
            Prediction::Typed(record) => {
                record.fields().iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
            }
            Prediction::Untyped(map) => map
                .iter()
                .map(|(k, v)| {
                    let rendered = match v {
                        Value::String(s) => s.clone(),
                        other => other.to_string(),
                    };
                    (k.clone(), rendered)
                })
                .collect(),
        }
    }

    pub fn as_typed(&self) -> Option<&EnvironmentalPrediction> {
        match self {
            Prediction::Typed(record) => Some(record),
            Prediction::Untyped(_) => None,
        }
    }
}

/// Failure category for the prediction call path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PredictionErrorKind {
    #[serde(rename = "JSON Decode Failure")]
    JsonDecodeFailure,
    #[serde(rename = "API Call Failed")]
    ApiCallFailed,
}

impl fmt::Display for PredictionErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PredictionErrorKind::JsonDecodeFailure => write!(f, "JSON Decode Failure"),
            PredictionErrorKind::ApiCallFailed => write!(f, "API Call Failed"),
        }
    }
}

/// Typed error record returned instead of a prediction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PredictionError {
    #[serde(rename = "error")]
    pub kind: PredictionErrorKind,
    pub details: String,
}

impl PredictionError {
    pub fn json_decode(details: impl Into<String>) -> Self {
        Self { kind: PredictionErrorKind::JsonDecodeFailure, details: details.into() }
    }

    pub fn api_call(details: impl Into<String>) -> Self {
        Self { kind: PredictionErrorKind::ApiCallFailed, details: details.into() }
    }
}

impl fmt::Display for PredictionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.details)
    }
}

impl std::error::Error for PredictionError {}

pub type PredictionResult = Result<Prediction, PredictionError>;
