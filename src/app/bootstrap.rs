//! Process-start construction of the generative client.

use tracing::{error, info};

use crate::adapters::{HttpGeminiClient, MockGenerativeClient, UnconfiguredClient};
use crate::domain::ServiceConfig;
use crate::ports::GenerativeClient;

/// Which client the process talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClientMode {
    #[default]
    Live,
    Mock,
}

/// Build the process-wide client once.
///
/// A missing or unusable credential is logged and replaced by a client that
/// fails each call, so the process keeps running and every call path reports
/// its own failure.
pub fn connect(config: &ServiceConfig, mode: ClientMode) -> Box<dyn GenerativeClient> {
    match mode {
        ClientMode::Mock => {
            info!("Mock mode: responses are synthesized locally");
            Box::new(MockGenerativeClient::new())
        }
        ClientMode::Live => match HttpGeminiClient::from_env_with_config(config) {
            Ok(client) => {
                info!(model = %config.model, "✅ Gemini API configured.");
                Box::new(client)
            }
            Err(e) => {
                error!("❌ Error configuring Gemini API: {}", e);
                Box::new(UnconfiguredClient::new(e.to_string()))
            }
        },
    }
}
