//! Caller-facing modeling operations.
//!
//! Each operation builds its prompt, makes a single service call and
//! interprets the response. Nothing is kept between calls.

use tracing::info;

use crate::app::interpreter::{interpret_narrative, interpret_prediction_outcome};
use crate::app::invoker::ModelInvoker;
use crate::domain::prompt::{build_narrative_prompt, build_prediction_prompt, format_room_size};
use crate::domain::{
    FieldPolicy, NarrativeKind, NarrativeRequest, PredictionRequest, PredictionResult,
};
use crate::ports::{GenerativeClient, ResponseEncoding};

/// Prompt-response gateway bound to one client and model.
pub struct EnvironmentalModel<'a> {
    client: &'a dyn GenerativeClient,
    model: String,
    policy: FieldPolicy,
}

impl<'a> EnvironmentalModel<'a> {
    pub fn new(client: &'a dyn GenerativeClient, model: impl Into<String>) -> Self {
        Self { client, model: model.into(), policy: FieldPolicy::default() }
    }

    /// Set how strictly decoded prediction objects are checked.
    pub fn with_field_policy(mut self, policy: FieldPolicy) -> Self {
        self.policy = policy;
        self
    }

    fn invoker(&self) -> ModelInvoker<'_, dyn GenerativeClient + 'a> {
        ModelInvoker::new(self.client, &self.model)
    }

    /// Structured daily forecast for a location and date.
    pub fn predict_environmental_data(&self, location: &str, date: &str) -> PredictionResult {
        self.predict(&PredictionRequest::new(location, date))
    }

    pub fn predict(&self, request: &PredictionRequest) -> PredictionResult {
        info!(location = %request.location, date = %request.date, "Running prediction model");

        let prompt = build_prediction_prompt(&request.location, &request.date);
        let outcome = self.invoker().invoke(&prompt, ResponseEncoding::Json);
        let result = interpret_prediction_outcome(outcome, self.policy);

        if result.is_ok() {
            info!("✅ Environmental prediction generated");
        }
        result
    }

    /// Two-paragraph emissions versus sequestration analysis.
    pub fn simulate_carbon_cycle(&self, emission_source: &str, sequestration_effort: &str) -> String {
        info!(emission_source, sequestration_effort, "Simulating GHG monitoring and sequestration");

        let request = NarrativeRequest::new(emission_source, sequestration_effort);
        self.narrate(NarrativeKind::CarbonCycle, &request)
    }

    /// CO2 absorbance and O2 emission report for an indoor plant.
    pub fn model_indoor_plant_performance(&self, plant_name: &str, room_size_sqm: f64) -> String {
        info!(plant_name, room_size_sqm, "Modeling indoor plant performance");

        let request = NarrativeRequest::new(plant_name, format_room_size(room_size_sqm));
        self.narrate(NarrativeKind::PlantPerformance, &request)
    }

    /// Free-text narrative, or the kind's sentinel when the call fails.
    pub fn narrate(&self, kind: NarrativeKind, request: &NarrativeRequest) -> String {
        let prompt = build_narrative_prompt(kind, request);
        let outcome = self.invoker().invoke(&prompt, ResponseEncoding::Text);
        let succeeded = outcome.is_ok();
        let text = interpret_narrative(outcome, kind);

        if succeeded {
            info!("✅ {} narrative generated", kind.label());
        }
        text
    }
}
