//! HTTP route modules

pub mod files;
pub mod ui;
