//! Service modules for business logic

pub mod prompt_builder;
pub mod dispatcher;

// Re-export service types
pub use prompt_builder::{GenerationSettings, PromptBuilder};
pub use dispatcher::CorrespondenceDispatcher;
