//! User-related DTOs.

use registry_core::rules::not_blank;
use registry_core::{NewUser, User, UserId};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request to create a new user.
///
/// Clients may send the full user shape; the `id` is accepted but ignored
/// because the store assigns identifiers.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<UserId>,

    #[validate(
        length(min = 1, max = 64, message = "Username must be 1-64 characters"),
        custom(function = "not_blank", message = "Username cannot be blank")
    )]
    pub username: String,

    #[validate(email(message = "Invalid email address"))]
    pub email: String,
}

impl CreateUserRequest {
    /// Creates a request without an id.
    #[must_use]
    pub fn new(username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: None,
            username: username.into(),
            email: email.into(),
        }
    }
}

impl From<CreateUserRequest> for NewUser {
    fn from(request: CreateUserRequest) -> Self {
        NewUser::new(request.username, request.email)
    }
}

/// Request to replace a user's username and email.
///
/// When `id` is present it must equal the id in the path.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateUserRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<UserId>,

    #[validate(
        length(min = 1, max = 64, message = "Username must be 1-64 characters"),
        custom(function = "not_blank", message = "Username cannot be blank")
    )]
    pub username: String,

    #[validate(email(message = "Invalid email address"))]
    pub email: String,
}

impl UpdateUserRequest {
    /// Creates a request without an id.
    #[must_use]
    pub fn new(username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: None,
            username: username.into(),
            email: email.into(),
        }
    }

    /// Sets the id carried in the body.
    #[must_use]
    pub fn with_id(mut self, id: UserId) -> Self {
        self.id = Some(id);
        self
    }
}

/// User response DTO.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub id: UserId,
    pub username: String,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
        }
    }
}
