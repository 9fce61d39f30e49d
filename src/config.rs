use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{info, warn};

use crate::schemas::AppState;

pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
pub const DEFAULT_DIST_DIR: &str = "workspace/frontend/dist";
pub const INDEX_FILE: &str = "index.html";

/// Seconds before a request is aborted by the timeout layer
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid bind address '{0}': expected IP:PORT")]
    InvalidBindAddress(String),
    #[error("Frontend directory '{0}' is not a directory")]
    NotADirectory(String),
}

/// Settings of the `serve` command after validation
#[derive(Debug, Clone, PartialEq)]
pub struct ServeConfig {
    pub bind_address: SocketAddr,
    pub dist_dir: PathBuf,
}

impl ServeConfig {
    pub fn new(bind_address: &str, dist_dir: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let bind_address = bind_address
            .parse()
            .map_err(|_| ConfigError::InvalidBindAddress(bind_address.to_string()))?;
        let dist_dir = dist_dir.as_ref().to_path_buf();
        if dist_dir.exists() && !dist_dir.is_dir() {
            return Err(ConfigError::NotADirectory(dist_dir.display().to_string()));
        }
        Ok(Self {
            bind_address,
            dist_dir,
        })
    }

    pub fn index_path(&self) -> PathBuf {
        self.dist_dir.join(INDEX_FILE)
    }
}

/// Initialize application state for the router
pub fn initialize_app_state(config: &ServeConfig) -> AppState {
    let index = config.index_path();
    if index.is_file() {
        info!("Serving frontend from {}", config.dist_dir.display());
    } else {
        warn!(
            "{} not found; build the frontend with `trunk build` in workspace/frontend",
            index.display()
        );
    }
    AppState::new(config.dist_dir.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_parse() {
        let config = ServeConfig::new(DEFAULT_BIND_ADDRESS, DEFAULT_DIST_DIR).unwrap();
        assert_eq!(config.bind_address.port(), 8080);
        assert_eq!(
            config.index_path(),
            PathBuf::from("workspace/frontend/dist/index.html")
        );
    }

    #[test]
    fn test_rejects_bad_bind_address() {
        let err = ServeConfig::new("localhost", DEFAULT_DIST_DIR).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid bind address 'localhost': expected IP:PORT"
        );
    }

    #[test]
    fn test_rejects_file_as_dist_dir() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let err = ServeConfig::new(DEFAULT_BIND_ADDRESS, file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::NotADirectory(_)));
    }
}
