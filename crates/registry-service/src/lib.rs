//! # Registry Service
//!
//! Application service for user records. Each operation is a thin,
//! single-step wrapper over the [`UserRepository`](registry_repository::UserRepository)
//! that validates input and turns a missing record into `NotFound`.

pub mod dto;
pub mod r#impl;
pub mod user_service;

pub use dto::*;
pub use r#impl::UserServiceImpl;
pub use user_service::*;
