use std::path::PathBuf;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::config::INDEX_FILE;

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Directory of the built frontend bundle
    pub dist_dir: Arc<PathBuf>,
}

impl AppState {
    pub fn new(dist_dir: PathBuf) -> Self {
        Self {
            dist_dir: Arc::new(dist_dir),
        }
    }

    pub fn index_path(&self) -> PathBuf {
        self.dist_dir.join(INDEX_FILE)
    }
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Whether the frontend bundle is present: "available" or "missing"
    pub frontend: String,
}
