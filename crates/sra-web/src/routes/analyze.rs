//! Analysis route handler.

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use sra_core::analysis::model::{AnalysisRequest, AnalysisResult};
use sra_core::SraError;

use crate::state::AppState;

/// Error payload returned to callers. Server-side causes stay in the logs.
#[derive(Serialize)]
pub struct ErrorBody {
    pub detail: String,
}

const GENERIC_FAILURE: &str = "analysis failed, please try again later";

/// POST /process - Analyze one vulnerability finding.
pub async fn process(
    State(state): State<AppState>,
    Json(req): Json<AnalysisRequest>,
) -> Result<Json<AnalysisResult>, (StatusCode, Json<ErrorBody>)> {
    let result = sra_core::analysis::analyze(state.provider.as_ref(), &req.vulnerability_text)
        .await
        .map_err(into_response_error)?;

    Ok(Json(result))
}

/// Collapse the error taxonomy into the two user-visible status classes.
/// Internal detail is logged, never echoed.
fn into_response_error(err: SraError) -> (StatusCode, Json<ErrorBody>) {
    match err {
        SraError::InvalidInput(detail) => (StatusCode::BAD_REQUEST, Json(ErrorBody { detail })),
        other => {
            tracing::error!(error = %other, "Analysis request failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody {
                    detail: GENERIC_FAILURE.to_string(),
                }),
            )
        }
    }
}
