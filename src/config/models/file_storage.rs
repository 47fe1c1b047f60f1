//! File storage configuration

use super::*;
use serde::{Deserialize, Serialize};

/// File storage configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileStorageConfig {
    /// Directory holding the uploaded files
    #[serde(default = "default_local_path")]
    pub local_path: String,
    /// Directory holding the built UI bundle, served at `/` when present
    #[serde(default)]
    pub static_dir: Option<String>,
}

impl Default for FileStorageConfig {
    fn default() -> Self {
        Self {
            local_path: default_local_path(),
            static_dir: None,
        }
    }
}

impl FileStorageConfig {
    /// Validate storage configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.local_path.trim().is_empty() {
            return Err("Storage path cannot be empty".to_string());
        }

        if let Some(dir) = &self.static_dir {
            if dir.trim().is_empty() {
                return Err("Static directory cannot be empty".to_string());
            }
        }

        Ok(())
    }
}
