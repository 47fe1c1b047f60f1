//! Logging setup
//!
//! Installs the global `tracing` subscriber. The filter comes from `RUST_LOG`
//! and falls back to the level passed on the command line.

use crate::utils::error::{FileDropError, Result};
use tracing_subscriber::EnvFilter;

/// Output format for log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human readable, one line per event
    #[default]
    Pretty,
    /// One JSON object per event
    Json,
}

pub struct LoggingUtils;

impl LoggingUtils {
    /// Build the filter, preferring `RUST_LOG` over the supplied default
    pub fn env_filter(default_level: &str) -> Result<EnvFilter> {
        match EnvFilter::try_from_default_env() {
            Ok(filter) => Ok(filter),
            Err(_) => EnvFilter::try_new(default_level).map_err(|e| {
                FileDropError::config(format!("Invalid log level '{}': {}", default_level, e))
            }),
        }
    }

    /// Install the global subscriber
    pub fn init_logger(default_level: &str, format: LogFormat) -> Result<()> {
        let filter = Self::env_filter(default_level)?;
        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_thread_ids(false);

        let installed = match format {
            LogFormat::Pretty => builder.try_init(),
            LogFormat::Json => builder.json().try_init(),
        };

        installed
            .map_err(|e| FileDropError::server(format!("Failed to install logger: {}", e)))
    }
}
