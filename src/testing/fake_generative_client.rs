use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::{GenerationRequest, GenerativeClient};

/// Records every request and replays scripted outcomes in order.
#[derive(Clone, Default)]
pub struct FakeGenerativeClient {
    pub received: Arc<Mutex<Vec<GenerationRequest>>>,
    pub script: Arc<Mutex<VecDeque<Result<String, AppError>>>>,
}

impl FakeGenerativeClient {
    pub fn responding(text: impl Into<String>) -> Self {
        Self::scripted(vec![Ok(text.into())])
    }

    pub fn failing(error: AppError) -> Self {
        Self::scripted(vec![Err(error)])
    }

    pub fn scripted(outcomes: Vec<Result<String, AppError>>) -> Self {
        Self {
            received: Arc::new(Mutex::new(vec![])),
            script: Arc::new(Mutex::new(outcomes.into())),
        }
    }

    pub fn requests(&self) -> Vec<GenerationRequest> {
        self.received.lock().unwrap().clone()
    }
}

impl GenerativeClient for FakeGenerativeClient {
    fn generate(&self, request: &GenerationRequest) -> Result<String, AppError> {
        self.received.lock().unwrap().push(request.clone());
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(AppError::api_error("no scripted response left", None)))
    }
}
