pub mod api;
pub mod bootstrap;
pub mod cli;
pub mod configuration;
pub mod interpreter;
pub mod invoker;

pub use api::EnvironmentalModel;
pub use bootstrap::{ClientMode, connect};
pub use invoker::{InvocationFailure, ModelInvoker};
