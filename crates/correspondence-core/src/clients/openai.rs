//! OpenAI chat completions client

use async_trait::async_trait;
use crate::clients::completion::{ChatRequest, CompletionClient};
use crate::config::OpenAIConfig;
use crate::constants::DEFAULT_OPENAI_BASE_URL;
use crate::error::{AssistantError, Result};
use reqwest::{Client as HttpClient, StatusCode};
use log::debug;

pub struct OpenAIClient {
    api_key: String,
    base_url: String,
    http_client: HttpClient,
}

impl OpenAIClient {
    /// No request timeout is set; the transport default applies.
    pub fn new(config: OpenAIConfig) -> Result<Self> {
        let http_client = HttpClient::builder()
            .user_agent(concat!("assessor-correspondence/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let base_url = config
            .base_url
            .unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            api_key: config.api_key,
            base_url,
            http_client,
        })
    }

    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

#[async_trait]
impl CompletionClient for OpenAIClient {
    async fn complete(&self, request: &ChatRequest) -> Result<String> {
        let url = self.completions_url();
        debug!("Sending chat completion request to {} (model {})", url, request.model);

        let response = self.http_client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            let error_text = response.text().await.unwrap_or_default();
            return Err(AssistantError::Auth(
                format!("OpenAI API returned {}: {}", status, error_text)
            ));
        }

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AssistantError::ServiceUnavailable(
                format!("OpenAI API returned {}: {}", status, error_text)
            ));
        }

        let body = response.text().await?;
        let result: serde_json::Value = serde_json::from_str(&body)?;

        extract_completion(&result)
    }
}

/// Pull the first choice's message content out of a completion response
pub fn extract_completion(response: &serde_json::Value) -> Result<String> {
    response["choices"][0]["message"]["content"]
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| AssistantError::Processing("No content in completion response".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::completion::ChatMessage;
    use serde_json::json;

    fn config_with_base(base_url: Option<&str>) -> OpenAIConfig {
        OpenAIConfig {
            api_key: "test-key".to_string(),
            model: "gpt-3.5-turbo".to_string(),
            base_url: base_url.map(str::to_string),
        }
    }

    #[test]
    fn test_extract_completion_returns_first_choice_verbatim() {
        let response = json!({
            "choices": [
                {"message": {"role": "assistant", "content": "  Dear Ms. Smith,\n\nThank you.  "}},
                {"message": {"role": "assistant", "content": "second"}}
            ]
        });

        let text = extract_completion(&response).unwrap();
        assert_eq!(text, "  Dear Ms. Smith,\n\nThank you.  ");
    }

    #[test]
    fn test_extract_completion_without_choices_is_processing_error() {
        let response = json!({"choices": []});
        let err = extract_completion(&response).unwrap_err();
        assert!(matches!(err, AssistantError::Processing(_)));

        let null_content = json!({"choices": [{"message": {"content": null}}]});
        assert!(extract_completion(&null_content).is_err());
    }

    #[test]
    fn test_completions_url_uses_default_and_trims_slash() {
        let default_client = OpenAIClient::new(config_with_base(None)).unwrap();
        assert_eq!(default_client.completions_url(), "https://api.openai.com/v1/chat/completions");

        let custom =
            OpenAIClient::new(config_with_base(Some("http://localhost:8080/v1/"))).unwrap();
        assert_eq!(custom.completions_url(), "http://localhost:8080/v1/chat/completions");
    }

    #[test]
    fn test_chat_request_payload_shape() {
        let request = ChatRequest {
            model: "gpt-3.5-turbo".to_string(),
            messages: vec![ChatMessage::system("sys"), ChatMessage::user("hello")],
            temperature: 0.7,
        };

        let payload = serde_json::to_value(&request).unwrap();
        assert_eq!(payload["model"], "gpt-3.5-turbo");
        assert_eq!(payload["messages"][0]["role"], "system");
        assert_eq!(payload["messages"][1]["role"], "user");
        assert_eq!(payload["messages"][1]["content"], "hello");
        assert_eq!(payload["temperature"], 0.7);
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_maps_to_http_error() {
        let client = OpenAIClient::new(config_with_base(Some("http://127.0.0.1:1/v1"))).unwrap();
        let request = ChatRequest {
            model: "gpt-3.5-turbo".to_string(),
            messages: vec![ChatMessage::user("hello")],
            temperature: 0.7,
        };

        let err = client.complete(&request).await.unwrap_err();
        assert!(matches!(err, AssistantError::Http(_)), "unexpected error: {}", err);
    }
}
