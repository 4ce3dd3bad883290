//! Repository trait definitions.

use async_trait::async_trait;
use registry_core::{HealthStatus, Interface, NewUser, RegistryResult, User, UserId};

/// Storage interface for user records.
///
/// Implementations own the collection exclusively and assign ids on
/// [`add`](Self::add). Ids are never reused, even after a record is removed.
#[async_trait]
pub trait UserRepository: Interface + Send + Sync {
    /// Returns every user, ordered by id.
    async fn list(&self) -> RegistryResult<Vec<User>>;

    /// Finds a user by ID.
    async fn find_by_id(&self, id: UserId) -> RegistryResult<Option<User>>;

    /// Persists a new user and returns it with its assigned id.
    async fn add(&self, user: NewUser) -> RegistryResult<User>;

    /// Overwrites the stored record with the same id.
    ///
    /// Returns `None` when no record has that id.
    async fn update(&self, user: &User) -> RegistryResult<Option<User>>;

    /// Removes a user by ID, returning whether a record was removed.
    async fn remove(&self, id: UserId) -> RegistryResult<bool>;

    /// Reports whether the backing store is reachable.
    async fn health(&self) -> HealthStatus {
        HealthStatus::Healthy
    }
}
