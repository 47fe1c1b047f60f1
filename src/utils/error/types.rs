//! Error type definitions

use thiserror::Error;

/// Result type alias for filedrop
pub type Result<T> = std::result::Result<T, FileDropError>;

/// Main error type for filedrop
#[derive(Error, Debug)]
pub enum FileDropError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Config file is not valid YAML
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Upload request carried no file
    #[error("Missing input: {0}")]
    MissingInput(String),

    /// Filename cannot be stored as a single directory entry
    #[error("Invalid filename: {0}")]
    InvalidName(String),

    /// Malformed multipart payload
    #[error("Multipart error: {0}")]
    Multipart(String),

    /// Download or delete target absent
    #[error("Not found: {0}")]
    NotFound(String),

    /// Storage directory could not be enumerated
    #[error("Directory read failure: {0}")]
    DirectoryRead(String),

    /// Upload could not be persisted
    #[error("Write failure: {0}")]
    Write(String),

    /// Existing file could not be removed
    #[error("Delete failure: {0}")]
    Delete(String),

    /// Internal server errors
    #[error("Internal server error: {0}")]
    Internal(String),
}
