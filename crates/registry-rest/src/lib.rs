//! # Registry REST
//!
//! REST API layer using Axum for the User Registry.
//! Exposes the user CRUD endpoints, health probes, and the OpenAPI document.

pub mod controllers;
pub mod extractors;
pub mod middleware;
pub mod openapi;
pub mod responses;
pub mod router;
pub mod state;

pub use router::*;
pub use state::*;
