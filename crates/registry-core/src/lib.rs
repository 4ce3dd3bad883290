//! # Registry Core
//!
//! Core types, traits, and error definitions for the User Registry.
//! Every other crate in the workspace builds on the entity, id and error
//! types defined here.

pub mod domain;
pub mod error;
pub mod health;
pub mod id;
pub mod logging;
pub mod result;
pub mod validation;

pub use domain::*;
pub use error::*;
pub use health::*;
pub use id::*;
pub use logging::LogFormat;
pub use result::*;
pub use validation::*;

// Re-export shaku for dependency injection
pub use shaku::Interface;
