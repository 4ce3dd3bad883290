//! In-memory user repository.

use crate::traits::UserRepository;
use async_trait::async_trait;
use parking_lot::RwLock;
use registry_core::{NewUser, RegistryError, RegistryResult, User, UserId};
use shaku::Component;
use std::collections::BTreeMap;
use tracing::debug;

/// Rows plus the id high-water mark.
///
/// `last_id` only grows, so an id freed by a delete is never handed out again.
#[derive(Debug, Default)]
pub struct UserTable {
    rows: BTreeMap<UserId, User>,
    last_id: i64,
}

impl UserTable {
    fn next_id(&mut self) -> RegistryResult<UserId> {
        self.last_id = self
            .last_id
            .checked_add(1)
            .ok_or_else(|| RegistryError::Internal("User id space exhausted".to_string()))?;
        Ok(UserId::new(self.last_id))
    }
}

/// User repository backed by a map guarded by a read/write lock.
///
/// Contents live only as long as the process.
#[derive(Component, Default)]
#[shaku(interface = UserRepository)]
pub struct InMemoryUserRepository {
    #[shaku(default)]
    table: RwLock<UserTable>,
}

impl InMemoryUserRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-populated with users, keeping their ids.
    #[must_use]
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        let mut table = UserTable::default();
        for user in users {
            table.last_id = table.last_id.max(user.id.into_inner());
            table.rows.insert(user.id, user);
        }
        Self {
            table: RwLock::new(table),
        }
    }

    /// Number of stored users.
    #[must_use]
    pub fn len(&self) -> usize {
        self.table.read().rows.len()
    }

    /// Returns true when no users are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.table.read().rows.is_empty()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list(&self) -> RegistryResult<Vec<User>> {
        debug!("Listing users");
        Ok(self.table.read().rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: UserId) -> RegistryResult<Option<User>> {
        debug!("Finding user by id: {}", id);
        Ok(self.table.read().rows.get(&id).cloned())
    }

    async fn add(&self, user: NewUser) -> RegistryResult<User> {
        let mut table = self.table.write();
        let user = user.with_id(table.next_id()?);
        debug!("Inserting user: {}", user.id);
        table.rows.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update(&self, user: &User) -> RegistryResult<Option<User>> {
        debug!("Updating user: {}", user.id);
        let mut table = self.table.write();
        Ok(table.rows.get_mut(&user.id).map(|stored| {
            stored.apply_changes(user.username.clone(), user.email.clone());
            stored.clone()
        }))
    }

    async fn remove(&self, id: UserId) -> RegistryResult<bool> {
        debug!("Removing user: {}", id);
        Ok(self.table.write().rows.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(n: u32) -> NewUser {
        NewUser::new(format!("user{}", n), format!("user{}@example.com", n))
    }

    #[tokio::test]
    async fn test_add_assigns_increasing_ids() {
        let repo = InMemoryUserRepository::new();
        let first = repo.add(new_user(1)).await.unwrap();
        let second = repo.add(new_user(2)).await.unwrap();

        assert_eq!(first.id, UserId::new(1));
        assert_eq!(second.id, UserId::new(2));
        assert_eq!(repo.len(), 2);
    }

    #[tokio::test]
    async fn test_ids_not_reused_after_remove() {
        let repo = InMemoryUserRepository::new();
        repo.add(new_user(1)).await.unwrap();
        let second = repo.add(new_user(2)).await.unwrap();

        assert!(repo.remove(second.id).await.unwrap());
        let third = repo.add(new_user(3)).await.unwrap();
        assert_eq!(third.id, UserId::new(3));
    }

    #[tokio::test]
    async fn test_with_users_continues_after_highest_id() {
        let repo = InMemoryUserRepository::with_users([
            User::new(UserId::new(7), "seven", "seven@example.com"),
            User::new(UserId::new(3), "three", "three@example.com"),
        ]);

        let listed = repo.list().await.unwrap();
        assert_eq!(listed[0].id, UserId::new(3));
        assert_eq!(listed[1].id, UserId::new(7));

        let added = repo.add(new_user(8)).await.unwrap();
        assert_eq!(added.id, UserId::new(8));
    }

    #[tokio::test]
    async fn test_add_fails_when_ids_exhausted() {
        let repo = InMemoryUserRepository::with_users([User::new(
            UserId::new(i64::MAX),
            "last",
            "last@example.com",
        )]);

        let err = repo.add(new_user(1)).await.unwrap_err();
        assert!(matches!(err, RegistryError::Internal(_)));
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn test_update_missing_returns_none() {
        let repo = InMemoryUserRepository::new();
        let ghost = User::new(UserId::new(42), "ghost", "ghost@example.com");
        assert!(repo.update(&ghost).await.unwrap().is_none());
        assert!(repo.is_empty());
    }

    #[tokio::test]
    async fn test_update_overwrites_fields() {
        let repo = InMemoryUserRepository::new();
        let mut user = repo.add(new_user(1)).await.unwrap();
        user.email = "changed@example.com".to_string();

        let updated = repo.update(&user).await.unwrap().unwrap();
        assert_eq!(updated.email, "changed@example.com");
        assert_eq!(repo.find_by_id(user.id).await.unwrap(), Some(updated));
    }

    #[tokio::test]
    async fn test_remove_missing_returns_false() {
        let repo = InMemoryUserRepository::new();
        assert!(!repo.remove(UserId::new(1)).await.unwrap());
    }

    #[tokio::test]
    async fn test_health_is_always_healthy() {
        let repo = InMemoryUserRepository::new();
        assert!(repo.health().await.is_healthy());
    }
}
