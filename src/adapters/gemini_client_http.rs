//! Generative Language API client implementation using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::configuration::generate_content_url;
use crate::domain::{AppError, ServiceConfig};
use crate::ports::{GenerationRequest, GenerativeClient, ResponseEncoding};

const X_GOOG_API_KEY: &str = "X-Goog-Api-Key";
const DEFAULT_STATUS_MESSAGE: &str = "Generative API request failed";

/// HTTP transport for the Generative Language API.
///
/// One request per call. There is no retry wrapper: every failure is final.
#[derive(Clone)]
pub struct HttpGeminiClient {
    api_key: String,
    api_url: Url,
    client: Client,
}

impl std::fmt::Debug for HttpGeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpGeminiClient")
            .field("api_url", &self.api_url)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl HttpGeminiClient {
    /// Create a new HTTP client with the given API key and configuration.
    pub fn new(api_key: String, config: &ServiceConfig) -> Result<Self, AppError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| AppError::api_error(format!("Failed to create HTTP client: {}", e), None))?;

        Ok(Self { api_key, api_url: config.api_url.clone(), client })
    }

    /// Create from the environment variable named in the configuration.
    pub fn from_env_with_config(config: &ServiceConfig) -> Result<Self, AppError> {
        let api_key = std::env::var(&config.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| AppError::EnvironmentVariableMissing(config.api_key_env.clone()))?;

        Self::new(api_key, config)
    }

    fn send_request(&self, endpoint: Url, request: &ApiRequest) -> Result<String, AppError> {
        let response = self
            .client
            .post(endpoint)
            .header(X_GOOG_API_KEY, &self.api_key)
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .map_err(|e| AppError::api_error(format!("HTTP request failed: {}", e), None))?;

        let status = response.status();
        let body_text = response.text().unwrap_or_default();

        if status.is_success() {
            let api_response: ApiResponse = serde_json::from_str(&body_text).map_err(|e| {
                AppError::api_error(format!("Failed to parse response: {}", e), Some(status.as_u16()))
            })?;

            return api_response.into_text().map_err(|message| {
                AppError::api_error(message, Some(status.as_u16()))
            });
        }

        let message = extract_error_message(&body_text).unwrap_or_else(|| {
            if !body_text.trim().is_empty() {
                body_text.clone()
            } else if status.as_u16() == 429 {
                "Rate limited".to_string()
            } else if status.is_server_error() {
                "Server error".to_string()
            } else {
                DEFAULT_STATUS_MESSAGE.to_string()
            }
        });

        Err(AppError::api_error(message, Some(status.as_u16())))
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ApiRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}

impl ApiResponse {
    /// Concatenated text parts of the first candidate.
    fn into_text(self) -> Result<String, String> {
        let text = self
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .map(|content| {
                content.parts.into_iter().filter_map(|part| part.text).collect::<String>()
            })
            .filter(|text| !text.is_empty());

        match text {
            Some(text) => Ok(text),
            None => match self.prompt_feedback.and_then(|feedback| feedback.block_reason) {
                Some(reason) => Err(format!("Prompt blocked: {}", reason)),
                None => Err("No candidate text in response".to_string()),
            },
        }
    }
}

impl From<&GenerationRequest> for ApiRequest {
    fn from(request: &GenerationRequest) -> Self {
        let text_content = |role: Option<&str>, text: &str| Content {
            role: role.map(str::to_string),
            parts: vec![Part { text: Some(text.to_string()) }],
        };

        let generation_config = match request.response_encoding {
            ResponseEncoding::Json => Some(GenerationConfig {
                response_mime_type: ResponseEncoding::Json.mime_type().to_string(),
            }),
            ResponseEncoding::Text => None,
        };

        Self {
            contents: vec![text_content(Some("user"), &request.user_content)],
            system_instruction: request
                .system_instruction
                .as_deref()
                .map(|instruction| text_content(None, instruction)),
            generation_config,
        }
    }
}

fn extract_error_message(body: &str) -> Option<String> {
    if body.trim().is_empty() {
        return None;
    }

    let parsed = serde_json::from_str::<serde_json::Value>(body).ok()?;

    if let Some(msg) = parsed
        .get("error")
        .and_then(|error| error.get("message"))
        .and_then(|message| message.as_str())
    {
        return Some(msg.to_string());
    }

    parsed.get("message").and_then(|message| message.as_str()).map(ToOwned::to_owned)
}

impl GenerativeClient for HttpGeminiClient {
    fn generate(&self, request: &GenerationRequest) -> Result<String, AppError> {
        let endpoint = generate_content_url(&self.api_url, &request.model)?;
        self.send_request(endpoint, &ApiRequest::from(request))
    }
}
