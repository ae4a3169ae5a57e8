//! Offline client producing synthetic responses without any API calls.

use std::cell::RefCell;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::json;

use crate::domain::AppError;
use crate::ports::{GenerationRequest, GenerativeClient, ResponseEncoding};

static EMISSION_EXPLANATIONS: [(&str, &str); 4] = [
    (
        "Factory",
        "Industrial factories are significant contributors to atmospheric CO₂, releasing emissions through energy consumption and manufacturing processes. Modern facilities implement various mitigation strategies including carbon capture systems and renewable energy adoption.",
    ),
    (
        "Vehicles",
        "Transportation sector emissions arise from fossil fuel combustion in engines. Electric vehicle adoption and improved fuel efficiency standards are gradually reducing this impact, though the global vehicle fleet continues to grow.",
    ),
    (
        "Power Plant",
        "Power generation facilities, particularly those using coal and natural gas, represent major point sources of greenhouse gas emissions. The transition to renewable energy sources is crucial for reducing this environmental impact.",
    ),
    (
        "Waste Burning",
        "Open burning of waste releases harmful pollutants and greenhouse gases. Proper waste management through recycling, composting, and controlled incineration with emission controls can significantly reduce these impacts.",
    ),
];

static SEQUESTRATION_EXPLANATIONS: [(&str, &str); 4] = [
    (
        "Afforestation",
        "Planting trees on previously non-forested land creates new carbon sinks. A mature forest can absorb substantial amounts of CO₂ annually, while also providing biodiversity benefits and ecosystem services.",
    ),
    (
        "Ocean Algae Farming",
        "Marine algae are efficient carbon absorbers, converting CO₂ through photosynthesis. Ocean farming initiatives show promise for large-scale carbon sequestration while producing valuable biomass products.",
    ),
    (
        "Soil Carbon",
        "Regenerative agricultural practices increase soil organic carbon content. Cover cropping, reduced tillage, and composting enhance the soil's ability to store carbon long-term while improving fertility.",
    ),
    (
        "Urban Green Roofs",
        "Green roofs and urban vegetation reduce building energy consumption while absorbing CO₂. They also mitigate urban heat islands and improve air quality in densely populated areas.",
    ),
];

struct PlantProfile {
    name: &'static str,
    co2_range: (f64, f64),
    o2_range: (f64, f64),
    fact: &'static str,
}

static PLANT_PROFILES: [PlantProfile; 4] = [
    PlantProfile {
        name: "Snake Plant",
        co2_range: (40.0, 80.0),
        o2_range: (100.0, 200.0),
        fact: "Known for its exceptional air-purifying qualities, the Snake Plant (Sansevieria) is one of the few plants that converts CO₂ to oxygen even at night through a unique form of photosynthesis.",
    },
    PlantProfile {
        name: "Aloe Vera",
        co2_range: (30.0, 60.0),
        o2_range: (80.0, 150.0),
        fact: "Beyond its medicinal properties, Aloe Vera is an effective air purifier that removes formaldehyde and benzene. It releases oxygen at night, making it ideal for bedrooms.",
    },
    PlantProfile {
        name: "Areca Palm",
        co2_range: (60.0, 100.0),
        o2_range: (150.0, 300.0),
        fact: "The Areca Palm is a powerhouse of air purification, capable of processing large volumes of air. NASA research has confirmed its effectiveness at removing indoor pollutants.",
    },
    PlantProfile {
        name: "Peace Lily",
        co2_range: (35.0, 70.0),
        o2_range: (90.0, 180.0),
        fact: "Peace Lilies excel at removing ammonia, benzene, and formaldehyde from indoor air. They thrive in low light conditions and indicate when they need water.",
    },
];

const DEFAULT_ROOM_SIZE_SQM: f64 = 20.0;

// Only the plant-performance prompt asks for this metric.
const PLANT_PROMPT_MARKER: &str = "CO2 Absorbance Rate";

/// Mock client for running without an API key.
///
/// JSON requests get a prediction object with plausible values; text
/// requests get canned carbon-cycle or plant narratives picked by keyword.
#[derive(Debug)]
pub struct MockGenerativeClient {
    rng: RefCell<StdRng>,
}

impl Default for MockGenerativeClient {
    fn default() -> Self {
        Self { rng: RefCell::new(StdRng::from_entropy()) }
    }
}

impl MockGenerativeClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seed(seed: u64) -> Self {
        Self { rng: RefCell::new(StdRng::seed_from_u64(seed)) }
    }

    /// Uniform value in `[min, max)` rounded to one decimal place.
    fn in_range(&self, min: f64, max: f64) -> f64 {
        let value = self.rng.borrow_mut().gen_range(min..max);
        (value * 10.0).round() / 10.0
    }

    fn prediction_json(&self) -> String {
        json!({
            "rainfall_mm": self.in_range(0.0, 50.0),
            "temperature_c": self.in_range(15.0, 38.0),
            "humidity_percent": self.in_range(40.0, 95.0),
            "wind_speed_kmh": self.in_range(5.0, 45.0),
            "spm_ugm3": self.in_range(20.0, 150.0),
        })
        .to_string()
    }

    fn carbon_narrative(&self, prompt: &str) -> String {
        let emissions = self.in_range(10.0, 200.0);
        let sequestration = self.in_range(5.0, 150.0);
        let net = ((sequestration - emissions) * 10.0).round() / 10.0;
        let verdict = if net > 0.0 { "net positive" } else { "net negative" };

        format!(
            "{}\n\n{}\n\nEstimated daily emissions: {} metric tons CO2. Estimated daily sequestration: {} metric tons CO2. The overall carbon balance is {} ({:+} metric tons per day).",
            pick_explanation(&EMISSION_EXPLANATIONS, prompt),
            pick_explanation(&SEQUESTRATION_EXPLANATIONS, prompt),
            emissions,
            sequestration,
            verdict,
            net
        )
    }

    fn plant_narrative(&self, prompt: &str) -> String {
        let lower = prompt.to_lowercase();
        let profile = PLANT_PROFILES
            .iter()
            .find(|profile| lower.contains(&profile.name.to_lowercase()))
            .unwrap_or(&PLANT_PROFILES[0]);

        let room_size = parse_room_size(prompt).unwrap_or(DEFAULT_ROOM_SIZE_SQM);
        let size_factor = (room_size / 20.0).min(1.5);
        let co2 = (self.in_range(profile.co2_range.0, profile.co2_range.1) * size_factor).round();
        let o2 = (self.in_range(profile.o2_range.0, profile.o2_range.1) * size_factor).round();

        format!(
            "1. Estimated CO2 Absorbance Rate: {} grams per day.\n2. Estimated O2 Emission Rate: {} liters per day.\n3. {}",
            co2, o2, profile.fact
        )
    }
}

fn pick_explanation(table: &[(&str, &'static str)], prompt: &str) -> &'static str {
    let lower = prompt.to_lowercase();
    table
        .iter()
        .find(|(key, _)| lower.contains(&key.to_lowercase()))
        .map(|(_, text)| *text)
        .unwrap_or(table[0].1)
}

fn parse_room_size(prompt: &str) -> Option<f64> {
    let (_, rest) = prompt.split_once("room of ")?;
    let (number, _) = rest.split_once(' ')?;
    number.parse::<f64>().ok()
}

impl GenerativeClient for MockGenerativeClient {
    fn generate(&self, request: &GenerationRequest) -> Result<String, AppError> {
        let text = match request.response_encoding {
            ResponseEncoding::Json => self.prediction_json(),
            ResponseEncoding::Text if request.user_content.contains(PLANT_PROMPT_MARKER) => {
                self.plant_narrative(&request.user_content)
            }
            ResponseEncoding::Text => self.carbon_narrative(&request.user_content),
        };
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::prompt::{build_carbon_cycle_prompt, build_plant_performance_prompt};

    fn text_request(user_content: String) -> GenerationRequest {
        GenerationRequest {
            model: "mock".to_string(),
            system_instruction: None,
            user_content,
            response_encoding: ResponseEncoding::Text,
        }
    }

    #[test]
    fn json_request_yields_prediction_within_ranges() {
        let client = MockGenerativeClient::with_seed(42);
        let request = GenerationRequest {
            model: "mock".to_string(),
            system_instruction: Some("sys".to_string()),
            user_content: "forecast".to_string(),
            response_encoding: ResponseEncoding::Json,
        };

        for _ in 0..50 {
            let raw = client.generate(&request).unwrap();
            let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
            let metric = |key: &str| value[key].as_f64().unwrap();
            assert!((0.0..=50.0).contains(&metric("rainfall_mm")));
            assert!((15.0..=38.0).contains(&metric("temperature_c")));
            assert!((40.0..=95.0).contains(&metric("humidity_percent")));
            assert!((5.0..=45.0).contains(&metric("wind_speed_kmh")));
            assert!((20.0..=150.0).contains(&metric("spm_ugm3")));
        }
    }

    #[test]
    fn carbon_narrative_matches_source_and_effort() {
        let client = MockGenerativeClient::with_seed(7);
        let prompt = build_carbon_cycle_prompt("Power Plant", "Soil Carbon");
        let text = client.generate(&text_request(prompt.user_query)).unwrap();
        assert!(text.starts_with("Power generation facilities"));
        assert!(text.contains("Regenerative agricultural practices"));
        assert!(text.contains("carbon balance is net"));
    }

    #[test]
    fn carbon_narrative_falls_back_to_factory_and_afforestation() {
        let client = MockGenerativeClient::with_seed(7);
        let prompt = build_carbon_cycle_prompt("bakery", "recycling");
        let text = client.generate(&text_request(prompt.user_query)).unwrap();
        assert!(text.starts_with("Industrial factories"));
        assert!(text.contains("Planting trees"));
    }

    #[test]
    fn carbon_source_mentioning_plants_gets_carbon_narrative() {
        let client = MockGenerativeClient::with_seed(5);
        let prompt = build_carbon_cycle_prompt("indoor plant nursery", "Soil Carbon");
        let text = client.generate(&text_request(prompt.user_query)).unwrap();
        assert!(text.contains("carbon balance is net"));
        assert!(!text.contains("Absorbance Rate"));
    }

    #[test]
    fn same_seed_gives_same_values() {
        let request = GenerationRequest {
            model: "mock".to_string(),
            system_instruction: None,
            user_content: "forecast".to_string(),
            response_encoding: ResponseEncoding::Json,
        };
        let first = MockGenerativeClient::with_seed(99).generate(&request).unwrap();
        let second = MockGenerativeClient::with_seed(99).generate(&request).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn plant_narrative_uses_matching_profile() {
        let client = MockGenerativeClient::with_seed(3);
        let prompt = build_plant_performance_prompt("Peace Lily", 10.0);
        let text = client.generate(&text_request(prompt.user_query)).unwrap();
        assert!(text.contains("Peace Lilies excel"));
        assert!(text.contains("CO2 Absorbance Rate"));
    }

    #[test]
    fn plant_rates_scale_with_room_size() {
        // 10 sqm halves the base range, so the Snake Plant CO2 rate tops out at 40.
        let client = MockGenerativeClient::with_seed(11);
        let prompt = build_plant_performance_prompt("Snake Plant", 10.0);
        let text = client.generate(&text_request(prompt.user_query)).unwrap();
        let rate: f64 = text
            .split("Absorbance Rate: ")
            .nth(1)
            .and_then(|rest| rest.split(' ').next())
            .and_then(|n| n.parse().ok())
            .unwrap();
        assert!((20.0..=40.0).contains(&rate));
    }

    #[test]
    fn parse_room_size_reads_prompt_value() {
        let prompt = build_plant_performance_prompt("Aloe Vera", 15.0);
        assert_eq!(parse_room_size(&prompt.user_query), Some(15.0));
        assert_eq!(parse_room_size("no size here"), None);
    }
}
