//! User service trait definition.

use crate::dto::{CreateUserRequest, UpdateUserRequest, UserResponse};
use async_trait::async_trait;
use registry_core::{HealthStatus, Interface, RegistryResult, UserId};

/// User service trait.
#[async_trait]
pub trait UserService: Interface + Send + Sync {
    /// Lists all users in ascending id order.
    async fn list_users(&self) -> RegistryResult<Vec<UserResponse>>;

    /// Gets a user by ID.
    async fn get_user(&self, id: UserId) -> RegistryResult<UserResponse>;

    /// Creates a new user. Any id in the request is ignored.
    async fn create_user(&self, request: CreateUserRequest) -> RegistryResult<UserResponse>;

    /// Replaces a user's username and email.
    async fn update_user(&self, id: UserId, request: UpdateUserRequest) -> RegistryResult<UserResponse>;

    /// Deletes a user.
    async fn delete_user(&self, id: UserId) -> RegistryResult<()>;

    /// Reports the health of the underlying store.
    async fn health(&self) -> HealthStatus;
}
