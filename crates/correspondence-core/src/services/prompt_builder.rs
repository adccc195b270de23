//! Prompt templating for correspondence requests

use crate::clients::{ChatMessage, ChatRequest};
use crate::config::OpenAIConfig;
use crate::constants::{DEFAULT_MODEL, DEFAULT_TEMPERATURE, SYSTEM_INSTRUCTION};
use correspondence_types::GenerationRequest;

/// Model parameters carried unchanged into every chat request
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationSettings {
    pub model: String,
    pub temperature: f64,
}

impl GenerationSettings {
    pub fn from_config(config: &OpenAIConfig) -> Self {
        Self {
            model: config.model.clone(),
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PromptBuilder {
    settings: GenerationSettings,
}

impl PromptBuilder {
    pub fn new(settings: GenerationSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &GenerationSettings {
        &self.settings
    }

    /// Render the user instruction. User content is inserted verbatim.
    pub fn render(request: &GenerationRequest) -> String {
        format!(
            "You are an AI assistant helping a county assessor's office generate \
            professional correspondence.\n\
            Create a {} {} based on the following details:\n\
            \n\
            {}\n\
            \n\
            Ensure the response is clear, concise, and appropriate for public communication.",
            request.tone.label().to_lowercase(),
            request.document_type.label().to_lowercase(),
            request.user_content
        )
    }

    /// System instruction plus rendered prompt, with the fixed model parameters
    pub fn build_chat_request(&self, request: &GenerationRequest) -> ChatRequest {
        ChatRequest {
            model: self.settings.model.clone(),
            messages: vec![
                ChatMessage::system(SYSTEM_INSTRUCTION),
                ChatMessage::user(Self::render(request)),
            ],
            temperature: self.settings.temperature,
        }
    }
}
