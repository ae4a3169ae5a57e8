//! Prompt construction for the three modeling call paths.
//!
//! Caller-supplied text is embedded verbatim. Nothing here escapes or
//! sanitizes input, so a location or plant name can steer the model.

use crate::domain::narrative::{NarrativeKind, NarrativeRequest};

const PREDICTION_SYSTEM_INSTRUCTION: &str = "You are a sophisticated climate and air quality prediction model. \
     Generate realistic, structured daily environmental predictions. \
     Provide the output STRICTLY as a JSON object.";

/// JSON keys the prediction query asks the model to emit.
pub const PREDICTION_FIELDS: [&str; 5] =
    ["rainfall_mm", "temperature_c", "humidity_percent", "wind_speed_kmh", "spm_ugm3"];

/// A system instruction and user query pair sent to the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub system_instruction: Option<String>,
    pub user_query: String,
}

impl Prompt {
    fn user_only(user_query: String) -> Self {
        Self { system_instruction: None, user_query }
    }
}

pub fn build_prediction_prompt(location: &str, date: &str) -> Prompt {
    let keys = PREDICTION_FIELDS.iter().map(|k| format!("'{}'", k)).collect::<Vec<_>>().join(", ");
    let user_query = format!(
        "Generate a simulated daily forecast for {location} for the date {date}. \
         Include the following metrics: \
         Rainfall (mm), Temperature (C), Humidity (%), Wind Speed (km/h), and SPM (μg/m³). \
         The JSON keys must be: {keys}."
    );

    Prompt { system_instruction: Some(PREDICTION_SYSTEM_INSTRUCTION.to_string()), user_query }
}

pub fn build_carbon_cycle_prompt(emission_source: &str, sequestration_effort: &str) -> Prompt {
    Prompt::user_only(format!(
        "Simulate a scenario where we monitor Greenhouse Gas (GHG) emissions from a '{emission_source}' \
         and apply a '{sequestration_effort}' sequestration effort. \
         Provide a detailed, two-paragraph analysis that covers: \
         1. Estimated daily CO2 emissions (in metric tons). \
         2. The potential daily carbon sequestration capacity (in metric tons) of the effort. \
         3. A concluding statement on the overall carbon balance (net positive or negative)."
    ))
}

pub fn build_plant_performance_prompt(plant_name: &str, room_size_sqm: f64) -> Prompt {
    plant_performance_prompt(plant_name, &format_room_size(room_size_sqm))
}

/// Prompt for either narrative path; the room size is embedded as given.
pub fn build_narrative_prompt(kind: NarrativeKind, request: &NarrativeRequest) -> Prompt {
    match kind {
        NarrativeKind::CarbonCycle => build_carbon_cycle_prompt(&request.subject_a, &request.subject_b),
        NarrativeKind::PlantPerformance => {
            plant_performance_prompt(&request.subject_a, &request.subject_b)
        }
    }
}

fn plant_performance_prompt(plant_name: &str, room_size: &str) -> Prompt {
    Prompt::user_only(format!(
        "Generate an informational report for an app about the environmental impact of the indoor plant '{plant_name}'. \
         Assume the plant is in a standard room of {room_size} square meters with average light conditions. \
         The report must include: \
         1. Estimated CO2 Absorbance Rate (grams per day). \
         2. Estimated O2 Emission Rate (liters per day). \
         3. A brief, encouraging summary of its overall air purification benefit."
    ))
}

// Whole numbers keep one decimal place ("15.0"), everything else prints as-is.
pub(crate) fn format_room_size(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}
