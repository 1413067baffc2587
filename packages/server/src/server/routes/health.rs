use axum::{extract::State, Json};
use serde::Serialize;

use crate::server::app::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    fetcher: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    search_provider: Option<String>,
    search_enabled: bool,
}

/// Health check endpoint
///
/// The service holds no connections, so this only reports how the pipeline
/// is wired. Always 200.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        fetcher: state.scraper.fetcher_name().to_string(),
        search_provider: state.scraper.searcher_name().map(str::to_string),
        search_enabled: state.scraper.searcher_name().is_some(),
    })
}

/// Liveness text at the root path
pub async fn root_handler() -> &'static str {
    "API is running"
}
