//! Plain-text rendering of modeling results.

use crate::domain::{AppError, PredictionResult};

pub const PREDICTION_HEADER: &str = "--- Environmental Prediction (Structured Data) ---";
pub const CARBON_HEADER: &str = "--- GHG Monitoring and Carbon Sequestration Report ---";
pub const BANNER_RULE: &str = "==================================================";
pub const BANNER_TITLE: &str = "     🌳 VIRTUAL ENVIRONMENTAL MODELING SYSTEM 🌳";

const SHORT_RULE_WIDTH: usize = 40;
const LONG_RULE_WIDTH: usize = 50;
const LABEL_WIDTH: usize = 20;

/// `rainfall_mm` -> `Rainfall Mm`
pub fn title_case(key: &str) -> String {
    key.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

pub fn render_prediction(result: &PredictionResult) -> String {
    match result {
        Ok(prediction) => {
            let mut lines = vec![PREDICTION_HEADER.to_string()];
            for (key, value) in prediction.entries() {
                lines.push(format!("{:<width$}: {}", title_case(&key), value, width = LABEL_WIDTH));
            }
            lines.push("-".repeat(SHORT_RULE_WIDTH));
            lines.join("\n")
        }
        Err(error) => format!("Prediction failed: {}", error.details),
    }
}

/// Pretty JSON for either the prediction or its error record.
pub fn render_prediction_json(result: &PredictionResult) -> Result<String, AppError> {
    let rendered = match result {
        Ok(prediction) => serde_json::to_string_pretty(prediction)?,
        Err(error) => serde_json::to_string_pretty(error)?,
    };
    Ok(rendered)
}

pub fn render_carbon_report(text: &str) -> String {
    format!("{}\n{}\n{}", CARBON_HEADER, text, "-".repeat(SHORT_RULE_WIDTH))
}

pub fn render_plant_report(plant_name: &str, text: &str) -> String {
    format!(
        "--- Indoor Plant Performance Report for App ({}) ---\n{}\n{}",
        plant_name,
        text,
        "-".repeat(LONG_RULE_WIDTH)
    )
}

pub fn render_banner() -> String {
    format!("{}\n{}\n{}", BANNER_RULE, BANNER_TITLE, BANNER_RULE)
}
