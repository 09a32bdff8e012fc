//! Input validation for incoming findings.

use crate::{SraError, SraResult};

/// Reject empty or whitespace-only findings, returning the trimmed text
/// otherwise. No side effects.
pub fn validate_finding(text: &str) -> SraResult<&str> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(SraError::invalid_input(
            "vulnerability text must not be empty",
        ));
    }
    Ok(trimmed)
}
