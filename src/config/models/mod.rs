//! Configuration data models

#![allow(missing_docs)]

pub mod file_storage;
pub mod server;

pub use file_storage::*;
pub use server::*;

/// Default bind host
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    3000
}

/// Default storage directory, relative to the working directory
pub fn default_local_path() -> String {
    "uploads".to_string()
}
