//! Language-model access for the trading agent.
//!
//! [`ModelCatalog::resolve`] runs once at start-up and yields immutable
//! handles; each handle implements [`CompletionModel`].

pub mod catalog;
pub mod error;
pub mod model;
pub mod provider;

pub use catalog::{ModelCatalog, ModelSlot};
pub use error::LlmError;
pub use model::{ChatMessage, ChatModel, Completion, CompletionModel, CompletionRequest, Role, Usage};
pub use provider::Provider;
