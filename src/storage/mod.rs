//! Storage layer for filedrop

/// File storage module
pub mod files;

pub use files::{FileContent, FileRegistry, StoredFile};
