//! Prompt template for the analysis request.

/// Instructions sent with every finding. Asks the model for the three output
/// fields in a JSON shape the parser can pick apart; the parser still copes
/// with plain-text drift.
const ANALYSIS_PROMPT_TEMPLATE: &str = r#"You are a cybersecurity expert analyzing vulnerability findings.
Analyze the following vulnerability finding and provide:

1. A concise risk summary (2-3 sentences)
2. A severity level (choose one: Low, Medium, High, Critical)
3. A list of 3-5 specific remediation steps

Vulnerability Finding:
{finding}

Provide your response in the following JSON format:
{
    "risk_summary": "your risk summary here",
    "severity": "Low/Medium/High/Critical",
    "remediation_steps": ["step 1", "step 2", "step 3", ...]
}
"#;

/// Render the analysis prompt for one validated finding.
///
/// Pure function: identical input always yields an identical prompt.
pub fn build_prompt(finding: &str) -> String {
    ANALYSIS_PROMPT_TEMPLATE.replace("{finding}", finding)
}
