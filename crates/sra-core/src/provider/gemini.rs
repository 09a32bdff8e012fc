//! Gemini HTTP client for analysis generation.
//!
//! Calls the generateContent endpoint once per request and returns the raw
//! completion text; generation parameters are fixed constants.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::CompletionProvider;
use crate::{SraError, SraResult};

/// Default Gemini API base URL.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Default generation model.
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

const TEMPERATURE: f32 = 0.7;
const MAX_OUTPUT_TOKENS: u32 = 800;
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Gemini completion client. The credential is injected at construction and
/// never read from ambient state.
#[derive(Clone)]
pub struct GeminiClient {
    base_url: String,
    model: String,
    api_key: Option<String>,
    client: reqwest::Client,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    max_output_tokens: u32,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<Content>,
}

impl GeminiClient {
    /// Create a new client with the given base URL, model, and credential.
    pub fn new(base_url: &str, model: &str, api_key: Option<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .unwrap_or_default();

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            api_key,
            client,
        }
    }

    /// Create a client with default settings and the given credential.
    pub fn with_key(api_key: Option<String>) -> Self {
        Self::new(DEFAULT_BASE_URL, DEFAULT_MODEL, api_key)
    }
}

#[async_trait]
impl CompletionProvider for GeminiClient {
    async fn complete(&self, prompt: &str) -> SraResult<String> {
        let api_key = self.api_key.as_deref().ok_or(SraError::ProviderAuth)?;

        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: TEMPERATURE,
                max_output_tokens: MAX_OUTPUT_TOKENS,
            },
        };

        debug!(model = %self.model, "Calling Gemini API");
        let response = self
            .client
            .post(format!(
                "{}/v1beta/models/{}:generateContent",
                self.base_url, self.model
            ))
            .header("x-goog-api-key", api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(SraError::ProviderQuota);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SraError::transport(format!(
                "Gemini API error (HTTP {}): {}",
                status, body
            )));
        }

        let body: GenerateResponse = response
            .json()
            .await
            .map_err(|e| SraError::transport(format!("malformed Gemini response: {}", e)))?;

        let text: String = body
            .candidates
            .into_iter()
            .filter_map(|c| c.content)
            .flat_map(|c| c.parts)
            .map(|p| p.text)
            .collect::<Vec<_>>()
            .join("");

        if text.is_empty() {
            return Err(SraError::transport("Gemini returned no candidates"));
        }

        debug!(len = text.len(), "Received Gemini completion");
        Ok(text)
    }
}
