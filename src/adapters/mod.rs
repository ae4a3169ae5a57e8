pub mod gemini_client_http;
pub mod mock_client;
pub mod unconfigured_client;

pub use gemini_client_http::HttpGeminiClient;
pub use mock_client::MockGenerativeClient;
pub use unconfigured_client::UnconfiguredClient;
