//! Model invocation: one prompt in, raw response text or a single failure out.

use std::fmt;

use crate::domain::Prompt;
use crate::ports::{GenerationRequest, GenerativeClient, ResponseEncoding};

/// The one failure condition callers see from the service boundary.
///
/// Transport, authentication, quota and configuration problems all collapse
/// into this value; only the message survives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationFailure {
    pub message: String,
}

impl fmt::Display for InvocationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "API call failed: {}", self.message)
    }
}

impl std::error::Error for InvocationFailure {}

/// Sends prompts to a [`GenerativeClient`] under a fixed model identifier.
pub struct ModelInvoker<'a, C: GenerativeClient + ?Sized> {
    client: &'a C,
    model: &'a str,
}

impl<'a, C: GenerativeClient + ?Sized> ModelInvoker<'a, C> {
    pub fn new(client: &'a C, model: &'a str) -> Self {
        Self { client, model }
    }

    pub fn invoke(
        &self,
        prompt: &Prompt,
        encoding: ResponseEncoding,
    ) -> Result<String, InvocationFailure> {
        let request = GenerationRequest {
            model: self.model.to_string(),
            system_instruction: prompt.system_instruction.clone(),
            user_content: prompt.user_query.clone(),
            response_encoding: encoding,
        };

        self.client
            .generate(&request)
            .map_err(|err| InvocationFailure { message: err.to_string() })
    }
}
