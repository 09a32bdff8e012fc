//! SRA Web Server
//!
//! Axum-based HTTP layer: one analysis endpoint plus the embedded frontend.

pub mod routes;
pub mod state;

use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use state::AppState;

/// Create the application router.
///
/// Only the configured browser origins may call the API; an empty list
/// disables cross-origin access entirely.
pub fn create_router(state: AppState, allowed_origins: &[String]) -> Router {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(routes::frontend::index))
        .route("/health", get(routes::frontend::health))
        .route("/process", post(routes::analyze::process))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Run the web server.
pub async fn run_server(state: AppState, host: &str, port: u16) -> anyhow::Result<()> {
    let allowed_origins = state.allowed_origins.clone();
    let app = create_router(state, &allowed_origins);

    let listener = tokio::net::TcpListener::bind(format!("{}:{}", host, port)).await?;
    tracing::info!("Web server listening on http://{}:{}", host, port);

    axum::serve(listener, app).await?;
    Ok(())
}
