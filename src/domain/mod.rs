pub mod configuration;
pub mod error;
pub mod narrative;
pub mod prediction;
pub mod prompt;

pub use configuration::{AppConfig, ServiceConfig};
pub use error::AppError;
pub use narrative::{
    CARBON_CYCLE_SENTINEL, NarrativeKind, NarrativeRequest, PLANT_PERFORMANCE_SENTINEL,
};
pub use prediction::{
    EnvironmentalPrediction, FieldPolicy, Prediction, PredictionError, PredictionErrorKind,
    PredictionRequest, PredictionResult,
};
pub use prompt::Prompt;
