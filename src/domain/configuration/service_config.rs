//! Service configuration domain models.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::AppError;

/// Top-level configuration loaded from `ecocast.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Generative Language service configuration.
    #[serde(default)]
    pub service: ServiceConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.service.validate()
    }
}

/// Generative Language service configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceConfig {
    /// Base URL of the Generative Language REST API.
    #[serde(default = "default_api_url")]
    pub api_url: Url,
    /// Model identifier sent with every request.
    #[serde(default = "default_model")]
    pub model: String,
    /// Request timeout in seconds. Unset leaves the HTTP client default in place.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    /// Name of the environment variable holding the API key.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            model: default_model(),
            timeout_secs: None,
            api_key_env: default_api_key_env(),
        }
    }
}

impl ServiceConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.model.trim().is_empty() {
            return Err(AppError::InvalidConfig("model must not be empty".to_string()));
        }
        if self.timeout_secs == Some(0) {
            return Err(AppError::InvalidConfig("timeout_secs must be greater than 0".to_string()));
        }
        if self.api_key_env.trim().is_empty() {
            return Err(AppError::InvalidConfig("api_key_env must not be empty".to_string()));
        }
        Ok(())
    }
}

/// Endpoint for a `generateContent` call against `model` under `base`.
pub fn generate_content_url(base: &Url, model: &str) -> Result<Url, AppError> {
    let mut base = base.clone();
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base.join(&format!("models/{}:generateContent", model.trim()))
        .map_err(|e| AppError::InvalidConfig(format!("invalid endpoint for model '{}': {}", model, e)))
}

/// Parse and validate configuration content.
pub fn parse_config_content(content: &str) -> Result<AppConfig, AppError> {
    let config: AppConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

fn default_api_url() -> Url {
    Url::parse("https://generativelanguage.googleapis.com/v1beta/")
        .expect("Default API URL must be valid")
}

fn default_model() -> String {
    "gemini-pro".to_string()
}

fn default_api_key_env() -> String {
    "GEMINI_API_KEY".to_string()
}
