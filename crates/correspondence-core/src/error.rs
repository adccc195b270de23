//! Error types for the correspondence assistant

use thiserror::Error;

/// Main error type for all assistant operations
#[derive(Error, Debug)]
pub enum AssistantError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Processing error: {0}")]
    Processing(String),
}

/// Result type for assistant operations
pub type Result<T> = std::result::Result<T, AssistantError>;
