#[cfg(test)]
pub mod test_utils {
    use crate::config::{ServeConfig, initialize_app_state};
    use crate::router::create_router;
    use axum::Router;
    use std::fs;
    use tempfile::TempDir;
    use tracing::Level;
    use tracing_subscriber::FmtSubscriber;

    pub const INDEX_MARKER: &str = "<title>ChainFund</title>";

    /// Create a dist directory holding a minimal frontend bundle
    pub fn setup_test_dist() -> TempDir {
        let dir = TempDir::new().expect("Failed to create temp dist dir");
        fs::write(
            dir.path().join("index.html"),
            format!("<!DOCTYPE html><html><head>{INDEX_MARKER}</head><body></body></html>"),
        )
        .expect("Failed to write index.html");
        fs::write(dir.path().join("app.js"), "console.log('chainfund');")
            .expect("Failed to write app.js");
        dir
    }

    /// Initialize tracing for tests with output to STDERR.
    ///
    /// The log level is taken from RUST_LOG, defaulting to WARN.
    fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
        let log_level = std::env::var("RUST_LOG")
            .ok()
            .and_then(|level| level.parse::<Level>().ok())
            .unwrap_or(Level::WARN);

        let subscriber = FmtSubscriber::builder()
            .with_max_level(log_level)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    /// Create axum app serving `dist`
    pub fn setup_test_app(dist: &std::path::Path) -> Router {
        let _guard = init_test_tracing();
        let config =
            ServeConfig::new("127.0.0.1:0", dist).expect("Failed to build serve config");
        create_router(initialize_app_state(&config))
    }
}
