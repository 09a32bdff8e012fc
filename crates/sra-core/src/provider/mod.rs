//! Completion provider seam.
//!
//! The analysis pipeline only needs "prompt in, raw text out"; the trait keeps
//! the HTTP client swappable for a stub in tests.

pub mod gemini;

use async_trait::async_trait;

use crate::SraResult;

pub use gemini::GeminiClient;

/// One-shot text completion against an external model.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Send one prompt and return the raw completion text.
    async fn complete(&self, prompt: &str) -> SraResult<String>;
}
