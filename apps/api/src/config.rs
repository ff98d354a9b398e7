use anyhow::{Context, Result};

/// Default upstream chat-completions endpoint.
pub const DEFAULT_AI_GATEWAY_URL: &str = "https://ai.gateway.lovable.dev/v1/chat/completions";

/// Application configuration loaded from environment variables.
///
/// The API key is optional at startup: without it the server still boots,
/// but every analysis request is answered with a configuration error.
#[derive(Debug, Clone)]
pub struct Config {
    pub ai_gateway_api_key: Option<String>,
    pub ai_gateway_url: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            ai_gateway_api_key: optional_env("AI_GATEWAY_API_KEY"),
            ai_gateway_url: optional_env("AI_GATEWAY_URL")
                .unwrap_or_else(|| DEFAULT_AI_GATEWAY_URL.to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Reads an env var, treating an empty value the same as an unset one.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_env_treats_blank_as_missing() {
        std::env::set_var("ANALYSIS_GATEWAY_TEST_BLANK", "   ");
        assert_eq!(optional_env("ANALYSIS_GATEWAY_TEST_BLANK"), None);
        std::env::remove_var("ANALYSIS_GATEWAY_TEST_BLANK");
    }

    #[test]
    fn test_optional_env_trims_value() {
        std::env::set_var("ANALYSIS_GATEWAY_TEST_KEY", " sk-123 ");
        assert_eq!(
            optional_env("ANALYSIS_GATEWAY_TEST_KEY"),
            Some("sk-123".to_string())
        );
        std::env::remove_var("ANALYSIS_GATEWAY_TEST_KEY");
    }
}
