use axum::{extract::State, response::Json};
use tracing::instrument;

use crate::schemas::{AppState, HealthResponse};

/// Health check endpoint
#[instrument(skip(state))]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let frontend = if tokio::fs::metadata(state.index_path())
        .await
        .map(|m| m.is_file())
        .unwrap_or(false)
    {
        "available"
    } else {
        "missing"
    };

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        frontend: frontend.to_string(),
    })
}
