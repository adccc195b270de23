/// Fixed generation parameters and prompt text

/// Chat model used when the configuration does not name one
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Sampling temperature sent with every request
pub const DEFAULT_TEMPERATURE: f64 = 0.7;

pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// System-role instruction sent ahead of every rendered prompt
pub const SYSTEM_INSTRUCTION: &str =
    "You are a professional assistant for a county assessor's office.";

/// Environment variables read by `AssistantConfig::from_env`
pub const ENV_API_KEY: &str = "OPENAI_API_KEY";
pub const ENV_MODEL: &str = "OPENAI_MODEL";
pub const ENV_BASE_URL: &str = "OPENAI_BASE_URL";
