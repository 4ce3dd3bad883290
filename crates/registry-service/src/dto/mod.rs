//! Data transfer objects exchanged with the REST layer.

mod user_dto;

pub use user_dto::*;
