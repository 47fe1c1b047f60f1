//! Utility modules for filedrop

pub mod error;
pub mod logging;
