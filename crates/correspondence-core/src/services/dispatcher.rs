//! Correspondence dispatcher: validate, render, send once, map the outcome

use crate::clients::CompletionClient;
use crate::services::prompt_builder::{GenerationSettings, PromptBuilder};
use correspondence_types::{GenerationRequest, GenerationResult, ValidationWarning};

/// Sends one rendered prompt per request to a completion service.
///
/// Service errors never escape `dispatch`; they come back as
/// `GenerationResult::Failed`. Blank content is rejected before any call.
pub struct CorrespondenceDispatcher<C: CompletionClient> {
    client: C,
    prompt_builder: PromptBuilder,
}

impl<C: CompletionClient> CorrespondenceDispatcher<C> {
    pub fn new(client: C, settings: GenerationSettings) -> Self {
        Self {
            client,
            prompt_builder: PromptBuilder::new(settings),
        }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub async fn dispatch(
        &self,
        request: &GenerationRequest,
    ) -> std::result::Result<GenerationResult, ValidationWarning> {
        if let Err(warning) = request.validate() {
            log::warn!("Rejected {} request: {}", request.document_type, warning);
            return Err(warning);
        }

        log::info!(
            "Generating {} ({} tone, {} chars of input)",
            request.document_type,
            request.tone,
            request.user_content.chars().count()
        );

        let chat_request = self.prompt_builder.build_chat_request(request);
        if let Some(prompt) = chat_request.user_prompt() {
            log::debug!("Rendered prompt:\n{}", prompt);
        }

        match self.client.complete(&chat_request).await {
            Ok(text) => {
                log::info!("Document generated ({} chars)", text.chars().count());
                Ok(GenerationResult::Generated { text })
            }
            Err(e) => {
                log::error!("Error generating document: {}", e);
                Ok(GenerationResult::Failed {
                    error_message: e.to_string(),
                })
            }
        }
    }
}
