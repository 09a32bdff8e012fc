//! Request and result models for vulnerability analysis.

use serde::{Deserialize, Serialize};

/// Incoming analysis request: one free-text vulnerability finding.
/// A missing field deserializes as empty so the validator can reject it with
/// a 400 instead of a deserialization failure.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisRequest {
    #[serde(default)]
    pub vulnerability_text: String,
}

/// Severity rating for a finding.
///
/// `Unknown` is the fallback when the provider output names no recognizable
/// level; it is never omitted from a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
    #[default]
    Unknown,
}

impl Severity {
    /// The four real ratings, in ascending order. `Unknown` is excluded.
    pub const LEVELS: [Severity; 4] = [
        Severity::Low,
        Severity::Medium,
        Severity::High,
        Severity::Critical,
    ];

    /// Case-insensitive lookup of a single token against the enumeration.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::LEVELS
            .into_iter()
            .find(|level| token.eq_ignore_ascii_case(level.as_str()))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
            Severity::Critical => "Critical",
            Severity::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured analysis produced for one finding. Immutable once returned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub risk_summary: String,
    pub severity: Severity,
    pub remediation_steps: Vec<String>,
}
