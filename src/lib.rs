//! # filedrop
//!
//! A small HTTP file drop: clients upload, list, download and delete named
//! files kept in one server-side directory.
//!
//! The directory is the only state. A file is stored under the exact name it
//! was uploaded with, a second upload of the same name replaces the first,
//! and listing always reflects what is on disk.
//!
//! ## Library use
//!
//! ```rust,no_run
//! use filedrop::FileRegistry;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let registry = FileRegistry::new("uploads").await?;
//!     registry.upload("hello.txt", b"Hello").await?;
//!     assert!(registry.list().await?.contains(&"hello.txt".to_string()));
//!     Ok(())
//! }
//! ```
//!
//! ## Server
//!
//! ```rust,no_run
//! use filedrop::{Config, HttpServer};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_file("config/filedrop.yaml").await?;
//!     HttpServer::new(&config).await?.start().await?;
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod server;
pub mod storage;
pub mod utils;

pub use config::{Cli, Config};
pub use server::{AppState, HttpServer};
pub use storage::{FileContent, FileRegistry, StoredFile};
pub use utils::error::{FileDropError, Result};

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
