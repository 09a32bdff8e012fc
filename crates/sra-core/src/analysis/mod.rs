//! Vulnerability analysis pipeline.
//!
//! Linear per-request flow: validate the finding, render the prompt, call the
//! completion provider once, parse the completion into an [`AnalysisResult`].

pub mod model;
pub mod parser;
pub mod prompt;
pub mod validate;

use crate::provider::CompletionProvider;
use crate::SraResult;
use model::AnalysisResult;

/// Run the full analysis pipeline for one finding.
///
/// Holds no state across calls; the only side effect is the single provider
/// request.
pub async fn analyze(
    provider: &dyn CompletionProvider,
    vulnerability_text: &str,
) -> SraResult<AnalysisResult> {
    let finding = validate::validate_finding(vulnerability_text)?;
    let prompt = prompt::build_prompt(finding);

    let completion = provider.complete(&prompt).await?;
    tracing::debug!(len = completion.len(), "Received completion");

    parser::parse_completion(&completion)
}
