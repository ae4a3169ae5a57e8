use std::cell::RefCell;

use ecocast::{
    AppError, CARBON_CYCLE_SENTINEL, EnvironmentalPrediction, GenerationRequest, GenerativeClient,
    PLANT_PERFORMANCE_SENTINEL, PredictionErrorKind, ResponseEncoding, ServiceConfig,
    model_indoor_plant_performance, predict_environmental_data, simulate_carbon_cycle,
};

/// Stub service: a fixed body or a connection fault.
struct StubService {
    reply: Option<&'static str>,
    seen: RefCell<Vec<GenerationRequest>>,
}

impl StubService {
    fn replying(body: &'static str) -> Self {
        Self { reply: Some(body), seen: RefCell::new(vec![]) }
    }

    fn unreachable() -> Self {
        Self { reply: None, seen: RefCell::new(vec![]) }
    }
}

impl GenerativeClient for StubService {
    fn generate(&self, request: &GenerationRequest) -> Result<String, AppError> {
        self.seen.borrow_mut().push(request.clone());
        match self.reply {
            Some(body) => Ok(body.to_string()),
            None => Err(AppError::api_error("HTTP request failed: connection refused", None)),
        }
    }
}

#[test]
fn mumbai_forecast_is_returned_unchanged() {
    let service = StubService::replying(
        r#"{"rainfall_mm":12.5,"temperature_c":29.1,"humidity_percent":78,"wind_speed_kmh":14,"spm_ugm3":95}"#,
    );

    let prediction =
        predict_environmental_data(&service, &ServiceConfig::default(), "Mumbai", "2024-06-01")
            .unwrap();

    assert_eq!(
        prediction.as_typed(),
        Some(&EnvironmentalPrediction {
            rainfall_mm: 12.5,
            temperature_c: 29.1,
            humidity_percent: 78.0,
            wind_speed_kmh: 14.0,
            spm_ugm3: 95.0,
        })
    );

    let seen = service.seen.borrow();
    assert_eq!(seen[0].model, "gemini-pro");
    assert_eq!(seen[0].response_encoding, ResponseEncoding::Json);
}

#[test]
fn non_json_forecast_is_a_decode_failure() {
    let service = StubService::replying("not-json");

    let err =
        predict_environmental_data(&service, &ServiceConfig::default(), "Mumbai", "2024-06-01")
            .unwrap_err();

    assert_eq!(err.kind, PredictionErrorKind::JsonDecodeFailure);
    assert!(!err.details.is_empty());
}

#[test]
fn connection_fault_on_forecast_is_api_call_failed() {
    let service = StubService::unreachable();

    let err =
        predict_environmental_data(&service, &ServiceConfig::default(), "Mumbai", "2024-06-01")
            .unwrap_err();

    assert_eq!(err.kind, PredictionErrorKind::ApiCallFailed);
}

#[test]
fn connection_fault_on_carbon_cycle_returns_sentinel_verbatim() {
    let service = StubService::unreachable();

    let text = simulate_carbon_cycle(&service, &ServiceConfig::default(), "factory", "afforestation");

    assert_eq!(text, "Error fetching carbon cycle simulation data.");
    assert_eq!(text, CARBON_CYCLE_SENTINEL);
}

#[test]
fn connection_fault_on_plant_model_returns_sentinel() {
    let service = StubService::unreachable();

    let text = model_indoor_plant_performance(
        &service,
        &ServiceConfig::default(),
        "Snake Plant (Sansevieria trifasciata)",
        15.0,
    );

    assert_eq!(text, PLANT_PERFORMANCE_SENTINEL);
}

#[test]
fn narratives_are_returned_as_text() {
    let service = StubService::replying("A snake plant absorbs roughly 60 g of CO2 per day.");

    let text = model_indoor_plant_performance(&service, &ServiceConfig::default(), "Snake Plant", 15.0);

    assert_eq!(text, "A snake plant absorbs roughly 60 g of CO2 per day.");
    let seen = service.seen.borrow();
    assert_eq!(seen[0].response_encoding, ResponseEncoding::Text);
    assert!(seen[0].user_content.contains("15.0 square meters"));
}
