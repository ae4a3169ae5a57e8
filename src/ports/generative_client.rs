//! Generative Language service port definition.

use crate::domain::AppError;

/// Output encoding requested from the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseEncoding {
    #[default]
    Text,
    Json,
}

impl ResponseEncoding {
    /// MIME type sent as the response encoding hint.
    pub fn mime_type(&self) -> &'static str {
        match self {
            ResponseEncoding::Text => "text/plain",
            ResponseEncoding::Json => "application/json",
        }
    }
}

/// Request sent to the generative service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    /// Model identifier, e.g. `gemini-pro`.
    pub model: String,
    /// Persona and rules for the model.
    pub system_instruction: Option<String>,
    /// The user query.
    pub user_content: String,
    /// Requested output encoding.
    pub response_encoding: ResponseEncoding,
}

/// Port for generative-language API operations.
///
/// Implementations perform at most one outbound call per `generate` and
/// return the raw response text.
pub trait GenerativeClient {
    fn generate(&self, request: &GenerationRequest) -> Result<String, AppError>;
}

impl<T: GenerativeClient + ?Sized> GenerativeClient for Box<T> {
    fn generate(&self, request: &GenerationRequest) -> Result<String, AppError> {
        (**self).generate(request)
    }
}
