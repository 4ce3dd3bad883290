//! # Registry Config
//!
//! Configuration management for the User Registry.
//! Supports layered configuration from files and environment variables,
//! with fail-fast validation.

mod app_config;
mod loader;
mod validation;

pub use app_config::*;
pub use loader::*;
pub use validation::*;
