use std::io;

use thiserror::Error;

/// Library-wide error type for ecocast operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Configuration values failed validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Required environment variable is not set.
    #[error("Environment variable '{0}' is not set")]
    EnvironmentVariableMissing(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// Generative Language API request failed.
    #[error("Generative API error{}: {message}", status_suffix(.status))]
    GenerativeApiError { message: String, status: Option<u16> },

    /// Interactive input could not be read.
    #[error("Failed to read input: {0}")]
    Prompt(#[from] dialoguer::Error),

    /// Output serialization failed.
    #[error("Failed to serialize output: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub fn api_error<S: Into<String>>(message: S, status: Option<u16>) -> Self {
        AppError::GenerativeApiError { message: message.into(), status }
    }
}

fn status_suffix(status: &Option<u16>) -> String {
    status.map(|code| format!(" ({})", code)).unwrap_or_default()
}
