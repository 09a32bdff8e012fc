//! Frontend and liveness route handlers.
//!
//! Serves the embedded analysis form HTML.

use axum::response::{Html, IntoResponse, Json};
use serde_json::json;

const INDEX_HTML: &str = include_str!("../../../../assets/web/index.html");

/// GET / - Serve the analysis form page.
pub async fn index() -> impl IntoResponse {
    Html(INDEX_HTML)
}

/// GET /health - Liveness message.
pub async fn health() -> impl IntoResponse {
    Json(json!({ "message": "Security Report Assistant API is running" }))
}
