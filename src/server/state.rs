//! Application state shared across HTTP handlers

use crate::config::Config;
use crate::storage::FileRegistry;
use crate::utils::error::Result;
use std::sync::Arc;

/// HTTP server state shared across handlers
///
/// Cloned into every actix worker; all fields are behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration (shared read-only)
    pub config: Arc<Config>,
    /// File registry backing the API
    pub registry: Arc<FileRegistry>,
}

impl AppState {
    /// Create a new AppState with shared resources
    pub fn new(config: Config, registry: FileRegistry) -> Self {
        Self {
            config: Arc::new(config),
            registry: Arc::new(registry),
        }
    }

    /// Open the registry named by the configuration and build the state
    pub async fn from_config(config: Config) -> Result<Self> {
        let registry = FileRegistry::new(&config.storage.local_path).await?;
        Ok(Self::new(config, registry))
    }

    /// Get configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
