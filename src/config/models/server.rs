//! Listener and browser-access settings

use super::*;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Where the HTTP listener binds and how many workers it runs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Actix picks one worker per core when unset
    #[serde(default)]
    pub workers: Option<usize>,
    #[serde(default)]
    pub cors: CorsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
            cors: CorsConfig::default(),
        }
    }
}

impl ServerConfig {
    /// `host:port` to bind
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.port == 0 {
            return Err("Port cannot be 0".to_string());
        }
        if self.host.trim().is_empty() {
            return Err("Host cannot be empty".to_string());
        }
        if self.workers == Some(0) {
            return Err("Worker count cannot be 0".to_string());
        }
        Ok(())
    }
}

/// Which browser origins may call the API from another site
///
/// Methods and headers are fixed by the API itself; only the origin list
/// and preflight cache lifetime are configurable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorsConfig {
    #[serde(default = "default_cors_enabled")]
    pub enabled: bool,
    /// Exact origins such as `https://files.example.com`; empty or `*` admits any
    #[serde(default)]
    pub allowed_origins: Vec<String>,
    /// Seconds a browser may cache a preflight answer
    #[serde(default = "default_preflight_max_age")]
    pub max_age: u32,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            enabled: default_cors_enabled(),
            allowed_origins: Vec::new(),
            max_age: default_preflight_max_age(),
        }
    }
}

impl CorsConfig {
    pub fn allows_all_origins(&self) -> bool {
        self.allowed_origins.is_empty() || self.allowed_origins.iter().any(|o| o == "*")
    }

    /// Origins must be `scheme://host[:port]` with no path, or `*`
    pub fn validate(&self) -> Result<(), String> {
        if !self.enabled {
            return Ok(());
        }

        for origin in self.allowed_origins.iter().filter(|o| *o != "*") {
            let rest = origin
                .strip_prefix("http://")
                .or_else(|| origin.strip_prefix("https://"))
                .ok_or_else(|| format!("Origin {:?} must start with http:// or https://", origin))?;

            if rest.is_empty() || rest.contains('/') {
                return Err(format!("Origin {:?} must not carry a path", origin));
            }
        }

        if self.allows_all_origins() {
            warn!("CORS admits every origin; any site can upload and delete files");
        }
        Ok(())
    }
}

fn default_cors_enabled() -> bool {
    true
}

fn default_preflight_max_age() -> u32 {
    3600
}
