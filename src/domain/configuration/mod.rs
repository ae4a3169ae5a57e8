mod service_config;

pub use service_config::{AppConfig, ServiceConfig, generate_content_url, parse_config_content};
