//! Centralized error types for SRA.

use thiserror::Error;

/// Main error type for SRA operations.
#[derive(Error, Debug)]
pub enum SraError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Provider credential is not configured")]
    ProviderAuth,

    #[error("Provider rate limit or quota exhausted")]
    ProviderQuota,

    #[error("Provider transport failure: {0}")]
    ProviderTransport(String),

    #[error("Unusable provider output: {0}")]
    Parse(String),
}

/// Result type for SRA operations.
pub type SraResult<T> = Result<T, SraError>;

impl SraError {
    /// Create an invalid input error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a transport error.
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::ProviderTransport(msg.into())
    }
}

impl From<reqwest::Error> for SraError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::ProviderTransport("request timed out".to_string())
        } else {
            Self::ProviderTransport(err.to_string())
        }
    }
}
