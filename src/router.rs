use std::time::Duration;

use axum::{Router, routing::get};
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::REQUEST_TIMEOUT_SECS;
use crate::handlers::health::health_check;
use crate::schemas::AppState;

/// Create application router: health check plus the frontend bundle.
///
/// Unknown paths are answered with index.html so the client router can
/// resolve them.
pub fn create_router(state: AppState) -> Router {
    let frontend =
        ServeDir::new(state.dist_dir.as_path()).fallback(ServeFile::new(state.index_path()));

    Router::new()
        .route("/health", get(health_check))
        .fallback_service(frontend)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::new(Duration::from_secs(REQUEST_TIMEOUT_SECS)))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
