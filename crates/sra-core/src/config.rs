//! Process configuration.
//!
//! Read once at startup and passed in explicitly; nothing else reads the
//! environment at request time.

/// Immutable service configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Gemini API key. Absence surfaces as a provider auth error on first use.
    pub api_key: Option<String>,
    /// Browser origins allowed to call the API.
    pub allowed_origins: Vec<String>,
}

const DEFAULT_ORIGINS: &str = "http://localhost:8000,http://localhost:8080";

impl AppConfig {
    /// Build the configuration from `GEMINI_API_KEY` and `ALLOWED_ORIGINS`.
    pub fn from_env() -> Self {
        let api_key = std::env::var("GEMINI_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty());

        let origins = std::env::var("ALLOWED_ORIGINS")
            .unwrap_or_else(|_| DEFAULT_ORIGINS.to_string());

        Self {
            api_key,
            allowed_origins: parse_origins(&origins),
        }
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect()
}
