//! Client used when the service could not be configured at startup.

use crate::domain::AppError;
use crate::ports::{GenerationRequest, GenerativeClient};

/// Fails every call with the startup configuration problem.
///
/// Lets the process keep running after a missing or unusable credential;
/// each call path then reports its own failure.
#[derive(Debug, Clone)]
pub struct UnconfiguredClient {
    reason: String,
}

impl UnconfiguredClient {
    pub fn new(reason: impl Into<String>) -> Self {
        Self { reason: reason.into() }
    }
}

impl GenerativeClient for UnconfiguredClient {
    fn generate(&self, _request: &GenerationRequest) -> Result<String, AppError> {
        Err(AppError::config_error(format!("Generative API not configured: {}", self.reason)))
    }
}
