//! Client modules for external services

pub mod completion;
pub mod openai;

// Re-export all client types
pub use completion::{ChatMessage, ChatRequest, ChatRole, CompletionClient};
pub use openai::OpenAIClient;
