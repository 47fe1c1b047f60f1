//! Error handling for filedrop
//!
//! One error enum covers configuration, startup and registry failures. It
//! converts into a JSON HTTP response through `actix_web::ResponseError`.

#![allow(missing_docs)]

mod helpers;
mod response;
mod types;

pub use response::ErrorResponse;
pub use types::{FileDropError, Result};
