//! Application state.

use sra_core::config::AppConfig;
use sra_core::provider::{CompletionProvider, GeminiClient};
use std::sync::Arc;

/// Application state shared across handlers. Immutable for the process
/// lifetime; requests share nothing else.
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn CompletionProvider>,
    pub allowed_origins: Vec<String>,
}

impl AppState {
    /// Build state from startup configuration, wiring in the Gemini client.
    pub fn new(config: &AppConfig) -> Self {
        Self {
            provider: Arc::new(GeminiClient::with_key(config.api_key.clone())),
            allowed_origins: config.allowed_origins.clone(),
        }
    }

    /// Build state around an arbitrary provider. Used by tests.
    pub fn with_provider(provider: Arc<dyn CompletionProvider>) -> Self {
        Self {
            provider,
            allowed_origins: Vec::new(),
        }
    }
}
