//! Correspondence Core Library
//!
//! Builds correspondence prompts for the county assessor's office and
//! dispatches them to a chat completion service.

pub mod config;
pub mod clients;
pub mod services;
pub mod error;
pub mod constants;

// Re-export main types for easy access
pub use config::{AssistantConfig, OpenAIConfig};
pub use error::{AssistantError, Result};

pub use clients::{ChatMessage, ChatRequest, ChatRole, CompletionClient, OpenAIClient};

pub use services::{CorrespondenceDispatcher, GenerationSettings, PromptBuilder};

pub use correspondence_types::{
    DocumentType,
    GenerationRequest,
    GenerationResult,
    ParseSelectionError,
    ToneOption,
    ValidationWarning,
};
