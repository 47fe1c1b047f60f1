//! Command line interface

use super::Config;
use crate::utils::error::Result;
use crate::utils::logging::LogFormat;
use clap::Parser;
use std::path::PathBuf;

/// Upload, list, download and delete files in a server-side directory
#[derive(Debug, Clone, Parser)]
#[command(name = "filedrop", version, about)]
pub struct Cli {
    /// YAML configuration file
    #[arg(short, long, env = "FILEDROP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Address to bind
    #[arg(long, env = "FILEDROP_HOST")]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "FILEDROP_PORT")]
    pub port: Option<u16>,

    /// Directory holding uploaded files
    #[arg(long, env = "FILEDROP_STORAGE_DIR")]
    pub storage_dir: Option<String>,

    /// Directory holding the built UI bundle
    #[arg(long, env = "FILEDROP_STATIC_DIR")]
    pub static_dir: Option<String>,

    /// Default log filter when RUST_LOG is unset
    #[arg(long, env = "FILEDROP_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Emit logs as JSON
    #[arg(long, env = "FILEDROP_LOG_JSON")]
    pub log_json: bool,
}

impl Cli {
    /// Log format selected on the command line
    pub fn log_format(&self) -> LogFormat {
        if self.log_json {
            LogFormat::Json
        } else {
            LogFormat::Pretty
        }
    }

    /// Load the configuration file (if any) and apply command line overrides
    pub async fn load_config(&self) -> Result<Config> {
        let config = match &self.config {
            Some(path) => Config::from_file(path).await?,
            None => Config::default(),
        };

        let config = self.apply(config);
        config.validate()?;
        Ok(config)
    }

    /// Override configuration values with those given on the command line
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(dir) = &self.storage_dir {
            config.storage.local_path = dir.clone();
        }
        if let Some(dir) = &self.static_dir {
            config.storage.static_dir = Some(dir.clone());
        }
        config
    }
}
