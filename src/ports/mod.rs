mod generative_client;

pub use generative_client::{GenerationRequest, GenerativeClient, ResponseEncoding};
