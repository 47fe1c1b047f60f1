//! File storage
//!
//! A flat directory of named files exposing upload, list, download and delete.

mod registry;
mod types;

pub use registry::{FileRegistry, is_plain_filename};
pub use types::{FileContent, StoredFile};
