//! # Registry Server Library
//!
//! Wires configuration, storage, service, and HTTP layers into a runnable
//! application. The binary in `main.rs` is a thin shell around [`app`].

pub mod app;
pub mod di;
pub mod startup;

pub use app::Application;
