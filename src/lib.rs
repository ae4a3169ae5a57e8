//! ecocast: environmental forecasts and eco-impact reports from a hosted
//! generative-language model.
//!
//! All modeling is done by the remote service. This crate builds the
//! prompts, makes the call, and holds the service to its response contract.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::{ClientMode, EnvironmentalModel, InvocationFailure, connect};
pub use domain::{
    AppConfig, AppError, CARBON_CYCLE_SENTINEL, EnvironmentalPrediction, FieldPolicy,
    PLANT_PERFORMANCE_SENTINEL, Prediction, PredictionError, PredictionErrorKind,
    PredictionRequest, PredictionResult, ServiceConfig,
};
pub use ports::{GenerationRequest, GenerativeClient, ResponseEncoding};

/// Structured daily forecast for `location` on `date`.
pub fn predict_environmental_data(
    client: &dyn GenerativeClient,
    config: &ServiceConfig,
    location: &str,
    date: &str,
) -> PredictionResult {
    EnvironmentalModel::new(client, config.model.clone()).predict_environmental_data(location, date)
}

/// Emissions versus sequestration narrative, or the carbon-cycle sentinel on failure.
pub fn simulate_carbon_cycle(
    client: &dyn GenerativeClient,
    config: &ServiceConfig,
    emission_source: &str,
    sequestration_effort: &str,
) -> String {
    EnvironmentalModel::new(client, config.model.clone())
        .simulate_carbon_cycle(emission_source, sequestration_effort)
}

/// Indoor plant report, or the plant-performance sentinel on failure.
pub fn model_indoor_plant_performance(
    client: &dyn GenerativeClient,
    config: &ServiceConfig,
    plant_name: &str,
    room_size_sqm: f64,
) -> String {
    EnvironmentalModel::new(client, config.model.clone())
        .model_indoor_plant_performance(plant_name, room_size_sqm)
}
