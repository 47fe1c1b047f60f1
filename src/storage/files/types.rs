//! File registry types

use serde::{Deserialize, Serialize};

/// A file held by the registry, identified only by its name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredFile {
    /// Filename exactly as uploaded
    pub filename: String,
}

impl StoredFile {
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
        }
    }
}

/// Bytes read back from the registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileContent {
    /// Filename exactly as stored, used as the download name hint
    pub filename: String,
    /// Full file content
    pub content: Vec<u8>,
}
