//! Configuration management for filedrop
//!
//! Configuration comes from an optional YAML file, overridden by command line
//! flags and `FILEDROP_*` environment variables (see [`cli::Cli`]).

pub mod cli;
pub mod models;

pub use cli::Cli;
pub use models::*;

use crate::utils::error::{FileDropError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Storage directory settings
    #[serde(default)]
    pub storage: FileStorageConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| FileDropError::Config(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_yaml(&content)?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Parse and validate configuration from YAML text
    ///
    /// Malformed YAML is a [`FileDropError::Yaml`]; well-formed but invalid
    /// settings are a [`FileDropError::Config`].
    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(content)?;

        config.validate()?;
        Ok(config)
    }

    /// Get server configuration
    pub fn server(&self) -> &ServerConfig {
        &self.server
    }

    /// Get storage configuration
    pub fn storage(&self) -> &FileStorageConfig {
        &self.storage
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.server
            .validate()
            .map_err(|e| FileDropError::Config(format!("Server config error: {}", e)))?;

        self.server
            .cors
            .validate()
            .map_err(|e| FileDropError::Config(format!("CORS config error: {}", e)))?;

        self.storage
            .validate()
            .map_err(|e| FileDropError::Config(format!("Storage config error: {}", e)))?;

        Ok(())
    }
}
