//! Configuration management for the correspondence assistant

use serde::{Deserialize, Serialize};
use crate::constants::{DEFAULT_MODEL, ENV_API_KEY, ENV_BASE_URL, ENV_MODEL};
use crate::error::{AssistantError, Result};
use std::fmt;
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantConfig {
    pub openai: OpenAIConfig,
}

#[derive(Clone, Serialize, Deserialize)]
pub struct OpenAIConfig {
    #[serde(default)]
    pub api_key: String,

    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default)]
    pub base_url: Option<String>,
}

// Keeps the key out of logs and panic messages
impl fmt::Debug for OpenAIConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = if self.api_key.is_empty() { "<missing>" } else { "<redacted>" };
        f.debug_struct("OpenAIConfig")
            .field("api_key", &key)
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish()
    }
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn config_error(e: config::ConfigError) -> AssistantError {
    AssistantError::Config(format!("Failed to build configuration: {}", e))
}

impl AssistantConfig {
    /// Load configuration from the process environment
    ///
    /// Unrelated variables are skipped without decoding, so non-UTF-8 entries
    /// elsewhere in the environment are harmless.
    pub fn from_env() -> Result<Self> {
        let mut vars = Vec::new();

        for (key, value) in std::env::vars_os() {
            let Some(key) = key.to_str() else { continue };
            if ![ENV_API_KEY, ENV_MODEL, ENV_BASE_URL].contains(&key) {
                continue;
            }

            let value = value.into_string().map_err(|_| {
                AssistantError::Config(format!("{} is not valid UTF-8", key))
            })?;
            vars.push((key.to_string(), value));
        }

        Self::from_vars(vars)
    }

    /// Load configuration from an explicit set of environment-style variables.
    ///
    /// Only `OPENAI_API_KEY`, `OPENAI_MODEL` and `OPENAI_BASE_URL` are read;
    /// empty values count as unset.
    pub fn from_vars<I, K, V>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut builder = config::Config::builder()
            .set_default("openai.api_key", "")
            .map_err(config_error)?
            .set_default("openai.model", DEFAULT_MODEL)
            .map_err(config_error)?;

        for (key, value) in vars {
            let target = match key.as_ref() {
                ENV_API_KEY => "openai.api_key",
                ENV_MODEL => "openai.model",
                ENV_BASE_URL => "openai.base_url",
                _ => continue,
            };

            let value: String = value.into();
            if value.trim().is_empty() {
                continue;
            }

            builder = builder.set_override(target, value).map_err(config_error)?;
        }

        let config: Self = builder
            .build()
            .map_err(config_error)?
            .try_deserialize()
            .map_err(config_error)?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a JSON credentials file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| AssistantError::Config(format!("Failed to read config file: {}", e)))?;

        Self::from_json_str(&content)
    }

    /// Load configuration from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| AssistantError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.openai.api_key.trim().is_empty() {
            return Err(AssistantError::Config(format!(
                "OpenAI API key is required (set {})",
                ENV_API_KEY
            )));
        }

        if self.openai.model.trim().is_empty() {
            return Err(AssistantError::Config("OpenAI model name is required".to_string()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_output_redacts_api_key() {
        let config = OpenAIConfig {
            api_key: "sk-very-secret".to_string(),
            model: DEFAULT_MODEL.to_string(),
            base_url: None,
        };

        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("sk-very-secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
