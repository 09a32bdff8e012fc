//! Defensive parsing of provider completions.
//!
//! The prompt asks for JSON, but upstream text generation is not guaranteed to
//! comply. Parsing is therefore best-effort: a JSON object is preferred
//! (including one wrapped in markdown fences), and anything else falls back to
//! labeled-section and list scanning. Only an empty completion is an error.

use serde::Deserialize;

use super::model::{AnalysisResult, Severity};
use crate::{SraError, SraResult};

/// Substituted when the provider supplies no remediation steps at all.
pub const NO_STEPS_FALLBACK: &str =
    "No specific remediation steps were provided by the analysis.";

/// Substituted when no risk summary can be located in the completion.
pub const NO_SUMMARY_FALLBACK: &str = "Analysis completed";

/// Loose mirror of the JSON shape the prompt requests. Every field is
/// optional so partial compliance still yields a result.
#[derive(Deserialize)]
struct RawAnalysis {
    risk_summary: Option<String>,
    severity: Option<String>,
    remediation_steps: Option<Vec<String>>,
}

/// Parse a raw completion into an [`AnalysisResult`].
///
/// Fails only when `raw` is empty or whitespace; missing fields default
/// rather than erroring.
pub fn parse_completion(raw: &str) -> SraResult<AnalysisResult> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(SraError::Parse("empty completion".to_string()));
    }

    let json_str = extract_json(trimmed);
    if let Ok(parsed) = serde_json::from_str::<RawAnalysis>(&json_str) {
        return Ok(from_json(parsed));
    }

    Ok(from_text(trimmed))
}

fn from_json(raw: RawAnalysis) -> AnalysisResult {
    let risk_summary = raw
        .risk_summary
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| NO_SUMMARY_FALLBACK.to_string());

    let severity = raw
        .severity
        .as_deref()
        .map(str::trim)
        .and_then(Severity::from_token)
        .unwrap_or_default();

    let steps: Vec<String> = raw
        .remediation_steps
        .unwrap_or_default()
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    AnalysisResult {
        risk_summary,
        severity,
        remediation_steps: ensure_steps(steps),
    }
}

fn from_text(text: &str) -> AnalysisResult {
    let steps = collect_list_items(text);
    let severity = scan_severity(text);
    let risk_summary = labeled_section(text, "risk summary")
        .or_else(|| longest_prose_block(text))
        .unwrap_or_else(|| NO_SUMMARY_FALLBACK.to_string());

    AnalysisResult {
        risk_summary,
        severity,
        remediation_steps: ensure_steps(steps),
    }
}

fn ensure_steps(steps: Vec<String>) -> Vec<String> {
    if steps.is_empty() {
        vec![NO_STEPS_FALLBACK.to_string()]
    } else {
        steps
    }
}

/// Pull a JSON candidate out of a completion that may wrap it in markdown
/// fences or surround it with prose.
fn extract_json(text: &str) -> String {
    let trimmed = text.trim();

    // Fenced ```json block first
    if let Some(start) = trimmed.find("```json") {
        let after_marker = &trimmed[start + 7..];
        if let Some(end) = after_marker.find("```") {
            return after_marker[..end].trim().to_string();
        }
    }

    // Then an unlabeled ``` fence
    if let Some(start) = trimmed.find("```") {
        let after_marker = &trimmed[start + 3..];
        if let Some(end) = after_marker.find("```") {
            return after_marker[..end].trim().to_string();
        }
    }

    // Bare object: slice from the first { to the last }
    if let (Some(start), Some(end)) = (trimmed.find('{'), trimmed.rfind('}')) {
        if end > start {
            return trimmed[start..=end].to_string();
        }
    }

    trimmed.to_string()
}

/// First word-boundary match against the severity enumeration wins.
/// Substrings inside other words ("overflow", "allow") do not count.
fn scan_severity(text: &str) -> Severity {
    text.split(|c: char| !c.is_ascii_alphabetic())
        .filter(|word| !word.is_empty())
        .find_map(Severity::from_token)
        .unwrap_or_default()
}

/// Collect bulleted or numbered lines with markers stripped, in order.
fn collect_list_items(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter_map(strip_list_marker)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Strip a leading "- ", "* ", "• " or "N. " / "N) " marker, or return None
/// for non-list lines.
fn strip_list_marker(line: &str) -> Option<&str> {
    for bullet in ["- ", "* ", "• "] {
        if let Some(rest) = line.strip_prefix(bullet) {
            return Some(rest.trim());
        }
    }

    let digits = line.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits > 0 {
        let rest = &line[digits..];
        if let Some(stripped) = rest.strip_prefix(". ").or_else(|| rest.strip_prefix(") ")) {
            return Some(stripped.trim());
        }
    }

    None
}

/// Find a `<label>: ...` section, case-insensitively. The value is the
/// remainder of the labeled line plus any following plain lines up to a blank
/// line, a list item, or another labeled line.
fn labeled_section(text: &str, label: &str) -> Option<String> {
    let mut lines = text.lines();
    let mut collected: Vec<String> = Vec::new();
    let mut found = false;

    for line in lines.by_ref() {
        let lower = line.to_ascii_lowercase();
        if let Some(pos) = lower.find(label) {
            let after_label = &line[pos + label.len()..];
            if let Some(colon) = after_label.find(':') {
                let value = after_label[colon + 1..].trim();
                if !value.is_empty() {
                    collected.push(value.to_string());
                }
                found = true;
                break;
            }
        }
    }
    if !found {
        return None;
    }

    for line in lines {
        let trimmed = line.trim();
        if trimmed.is_empty() || strip_list_marker(trimmed).is_some() || is_label_line(trimmed) {
            break;
        }
        collected.push(trimmed.to_string());
    }

    let joined = collected.join(" ").trim().to_string();
    if joined.is_empty() {
        None
    } else {
        Some(joined)
    }
}

/// Lines like "Severity: ..." or "Remediation steps:" terminate a section.
fn is_label_line(line: &str) -> bool {
    let lower = line.to_ascii_lowercase();
    lower.starts_with("severity") || lower.starts_with("remediation")
}

/// Longest paragraph that is neither a list nor a bare label line.
fn longest_prose_block(text: &str) -> Option<String> {
    text.split("\n\n")
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .filter(|block| {
            block
                .lines()
                .all(|line| strip_list_marker(line.trim()).is_none())
        })
        .max_by_key(|block| block.len())
        .map(|block| block.split_whitespace().collect::<Vec<_>>().join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_completion() {
        let raw = r#"{
            "risk_summary": "Attacker-controlled SQL reaches the database.",
            "severity": "Critical",
            "remediation_steps": ["Use parameterized queries", "Validate input", "Audit the ORM layer"]
        }"#;
        let result = parse_completion(raw).unwrap();
        assert_eq!(
            result.risk_summary,
            "Attacker-controlled SQL reaches the database."
        );
        assert_eq!(result.severity, Severity::Critical);
        assert_eq!(result.remediation_steps.len(), 3);
        assert_eq!(result.remediation_steps[0], "Use parameterized queries");
    }

    #[test]
    fn test_json_in_markdown_fence() {
        let raw = "```json\n{\"risk_summary\": \"Session tokens leak via logs.\", \"severity\": \"high\", \"remediation_steps\": [\"Redact tokens\"]}\n```";
        let result = parse_completion(raw).unwrap();
        assert_eq!(result.severity, Severity::High);
        assert_eq!(result.remediation_steps, vec!["Redact tokens"]);
    }

    #[test]
    fn test_json_missing_fields_default() {
        let raw = r#"{"remediation_steps": ["Rotate keys"]}"#;
        let result = parse_completion(raw).unwrap();
        assert_eq!(result.severity, Severity::Unknown);
        assert_eq!(result.risk_summary, NO_SUMMARY_FALLBACK);
        assert_eq!(result.remediation_steps, vec!["Rotate keys"]);
    }

    #[test]
    fn test_json_invalid_severity_defaults_unknown() {
        let raw = r#"{"risk_summary": "x", "severity": "Catastrophic", "remediation_steps": ["y"]}"#;
        let result = parse_completion(raw).unwrap();
        assert_eq!(result.severity, Severity::Unknown);
    }

    #[test]
    fn test_text_fallback_with_labels_and_bullets() {
        let raw = "Risk summary: The login form concatenates user input into SQL.\n\nSeverity: High\n\nRemediation steps:\n- Use parameterized queries\n- Add input validation\n- Enable WAF rules";
        let result = parse_completion(raw).unwrap();
        assert_eq!(
            result.risk_summary,
            "The login form concatenates user input into SQL."
        );
        assert_eq!(result.severity, Severity::High);
        assert_eq!(
            result.remediation_steps,
            vec![
                "Use parameterized queries",
                "Add input validation",
                "Enable WAF rules"
            ]
        );
    }

    #[test]
    fn test_text_numbered_steps_in_order() {
        let raw = "Severity: Medium\n1. Patch the library\n2) Restrict network egress\n3. Re-run the scanner";
        let result = parse_completion(raw).unwrap();
        assert_eq!(
            result.remediation_steps,
            vec![
                "Patch the library",
                "Restrict network egress",
                "Re-run the scanner"
            ]
        );
    }

    #[test]
    fn test_severity_scan_ignores_substrings() {
        let raw = "A buffer overflow allows code execution.\nSeverity: Critical\n- Apply the vendor patch";
        let result = parse_completion(raw).unwrap();
        // "overflow"/"allows" must not register as Low
        assert_eq!(result.severity, Severity::Critical);
    }

    #[test]
    fn test_no_severity_token_defaults_unknown() {
        let raw = "This looks bad.\n- Investigate further";
        let result = parse_completion(raw).unwrap();
        assert_eq!(result.severity, Severity::Unknown);
    }

    #[test]
    fn test_no_steps_gets_fallback_entry() {
        let raw = r#"{"risk_summary": "Minor information disclosure.", "severity": "Low", "remediation_steps": []}"#;
        let result = parse_completion(raw).unwrap();
        assert_eq!(result.remediation_steps, vec![NO_STEPS_FALLBACK]);
    }

    #[test]
    fn test_empty_completion_is_parse_error() {
        assert!(matches!(parse_completion(""), Err(SraError::Parse(_))));
        assert!(matches!(parse_completion("  \n "), Err(SraError::Parse(_))));
    }

    #[test]
    fn test_longest_prose_block_as_summary() {
        let raw = "Severity: Low\n\nShort note.\n\nThe exposed endpoint reveals internal hostnames which could aid reconnaissance against the staging environment.\n\n- Restrict the endpoint";
        let result = parse_completion(raw).unwrap();
        assert!(result.risk_summary.starts_with("The exposed endpoint"));
    }
}
