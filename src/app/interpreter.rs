//! Response interpretation for the JSON and free-text call paths.
//!
//! The prediction path keeps failure detail in a typed record. The narrative
//! paths replace any failure with a fixed sentinel and drop the detail.

use serde_json::{Map, Value};
use tracing::{error, warn};

use crate::app::invoker::InvocationFailure;
use crate::domain::{
    EnvironmentalPrediction, FieldPolicy, NarrativeKind, Prediction, PredictionError,
    PredictionResult,
};

/// Decode raw service text as a prediction object.
pub fn interpret_prediction(raw_text: &str, policy: FieldPolicy) -> PredictionResult {
    let decoded = match policy {
        FieldPolicy::Strict => {
            serde_json::from_str::<EnvironmentalPrediction>(raw_text).map(Prediction::Typed)
        }
        FieldPolicy::Lenient => {
            serde_json::from_str::<Map<String, Value>>(raw_text).map(Prediction::Untyped)
        }
    };

    decoded.map_err(|e| {
        error!(raw_text, "🔥 Failed to parse JSON response from model");
        PredictionError::json_decode(e.to_string())
    })
}

/// Interpret the outcome of a prediction invocation.
pub fn interpret_prediction_outcome(
    outcome: Result<String, InvocationFailure>,
    policy: FieldPolicy,
) -> PredictionResult {
    match outcome {
        Ok(raw_text) => interpret_prediction(&raw_text, policy),
        Err(failure) => {
            error!(reason = %failure.message, "🔥 Model API error (Prediction)");
            Err(PredictionError::api_call(failure.message))
        }
    }
}

/// Interpret the outcome of a narrative invocation.
pub fn interpret_narrative(outcome: Result<String, InvocationFailure>, kind: NarrativeKind) -> String {
    match outcome {
        Ok(raw_text) => raw_text,
        Err(failure) => {
            warn!(reason = %failure.message, "🔥 Model API error ({})", kind.label());
            kind.sentinel().to_string()
        }
    }
}
