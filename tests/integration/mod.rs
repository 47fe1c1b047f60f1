//! Integration tests for filedrop
//!
//! These run real requests through the application factory against a
//! temporary storage directory.

pub mod file_api_tests;
