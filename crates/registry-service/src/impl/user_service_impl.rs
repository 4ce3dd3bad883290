//! User service implementation.

use crate::dto::{CreateUserRequest, UpdateUserRequest, UserResponse};
use crate::user_service::UserService;
use async_trait::async_trait;
use registry_core::{HealthStatus, RegistryError, RegistryResult, User, UserId, ValidateExt};
use registry_repository::UserRepository;
use shaku::Component;
use std::sync::Arc;
use tracing::{debug, info};

/// User service backed by whichever repository the module provides.
#[derive(Component)]
#[shaku(interface = UserService)]
pub struct UserServiceImpl {
    #[shaku(inject)]
    user_repository: Arc<dyn UserRepository>,
}

impl UserServiceImpl {
    /// Creates a new user service.
    #[must_use]
    pub fn new(user_repository: Arc<dyn UserRepository>) -> Self {
        Self { user_repository }
    }
}

#[async_trait]
impl UserService for UserServiceImpl {
    async fn list_users(&self) -> RegistryResult<Vec<UserResponse>> {
        debug!("Listing users");

        let users = self.user_repository.list().await?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    async fn get_user(&self, id: UserId) -> RegistryResult<UserResponse> {
        debug!("Getting user: {}", id);

        let user = self
            .user_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| RegistryError::not_found("User", id))?;

        Ok(UserResponse::from(user))
    }

    async fn create_user(&self, request: CreateUserRequest) -> RegistryResult<UserResponse> {
        debug!("Creating user: {}", request.username);

        request.validate_request()?;

        let saved_user = self.user_repository.add(request.into()).await?;

        info!("User created: {}", saved_user.id);
        Ok(UserResponse::from(saved_user))
    }

    async fn update_user(&self, id: UserId, request: UpdateUserRequest) -> RegistryResult<UserResponse> {
        debug!("Updating user: {}", id);

        request.validate_request()?;

        if let Some(body_id) = request.id {
            if body_id != id {
                return Err(RegistryError::validation(format!(
                    "Body id {} does not match path id {}",
                    body_id, id
                )));
            }
        }

        let user = User::new(id, request.username, request.email);
        let updated_user = self
            .user_repository
            .update(&user)
            .await?
            .ok_or_else(|| RegistryError::not_found("User", id))?;

        info!("User updated: {}", id);
        Ok(UserResponse::from(updated_user))
    }

    async fn delete_user(&self, id: UserId) -> RegistryResult<()> {
        debug!("Deleting user: {}", id);

        if !self.user_repository.remove(id).await? {
            return Err(RegistryError::not_found("User", id));
        }

        info!("User deleted: {}", id);
        Ok(())
    }

    async fn health(&self) -> HealthStatus {
        self.user_repository.health().await
    }
}

impl std::fmt::Debug for UserServiceImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserServiceImpl").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::mock;
    use mockall::predicate::eq;
    use registry_core::NewUser;
    use registry_repository::InMemoryUserRepository;

    mock! {
        pub Repo {}

        #[async_trait]
        impl UserRepository for Repo {
            async fn list(&self) -> RegistryResult<Vec<User>>;
            async fn find_by_id(&self, id: UserId) -> RegistryResult<Option<User>>;
            async fn add(&self, user: NewUser) -> RegistryResult<User>;
            async fn update(&self, user: &User) -> RegistryResult<Option<User>>;
            async fn remove(&self, id: UserId) -> RegistryResult<bool>;
            async fn health(&self) -> HealthStatus;
        }
    }

    fn seeded_service() -> UserServiceImpl {
        let repo = InMemoryUserRepository::with_users((1..=3).map(|n| {
            User::new(
                UserId::new(n),
                format!("user{}", n),
                format!("user{}@example.com", n),
            )
        }));
        UserServiceImpl::new(Arc::new(repo))
    }

    fn store_down() -> RegistryError {
        RegistryError::Database("connection refused".to_string())
    }

    #[tokio::test]
    async fn test_create_returns_fresh_id() {
        let service = seeded_service();

        let created = service
            .create_user(CreateUserRequest::new("user4", "user4@example.com"))
            .await
            .unwrap();

        assert_eq!(created.username, "user4");
        assert_eq!(created.id, UserId::new(4));
    }

    #[tokio::test]
    async fn test_create_ignores_client_id() {
        let service = seeded_service();
        let mut request = CreateUserRequest::new("sneaky", "sneaky@example.com");
        request.id = Some(UserId::new(1));

        let created = service.create_user(request).await.unwrap();
        assert_ne!(created.id, UserId::new(1));
        assert_eq!(service.get_user(UserId::new(1)).await.unwrap().username, "user1");
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_request() {
        let service = seeded_service();
        let err = service
            .create_user(CreateUserRequest::new("", "user@example.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, RegistryError::Validation(_)));
        assert_eq!(service.list_users().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_get_after_create_matches() {
        let service = seeded_service();
        let created = service
            .create_user(CreateUserRequest::new("alice", "alice@example.com"))
            .await
            .unwrap();

        let fetched = service.get_user(created.id).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_get_missing_user() {
        let service = seeded_service();
        let err = service.get_user(UserId::new(99)).await.unwrap_err();
        assert_eq!(err.status_code(), 404);
    }

    #[tokio::test]
    async fn test_update_replaces_fields_and_keeps_id() {
        let service = seeded_service();

        let updated = service
            .update_user(
                UserId::new(1),
                UpdateUserRequest::new("user1_updated", "user1_updated@example.com"),
            )
            .await
            .unwrap();
        assert_eq!(updated.id, UserId::new(1));

        let fetched = service.get_user(UserId::new(1)).await.unwrap();
        assert_eq!(fetched.username, "user1_updated");
        assert_eq!(fetched.email, "user1_updated@example.com");
    }

    #[tokio::test]
    async fn test_update_accepts_matching_body_id() {
        let service = seeded_service();
        let request = UpdateUserRequest::new("two", "two@example.com").with_id(UserId::new(2));
        assert!(service.update_user(UserId::new(2), request).await.is_ok());
    }

    #[tokio::test]
    async fn test_update_rejects_mismatched_body_id() {
        let service = seeded_service();
        let request = UpdateUserRequest::new("two", "two@example.com").with_id(UserId::new(3));

        let err = service.update_user(UserId::new(2), request).await.unwrap_err();
        assert!(matches!(err, RegistryError::Validation(_)));
        assert_eq!(service.get_user(UserId::new(2)).await.unwrap().username, "user2");
    }

    #[tokio::test]
    async fn test_update_missing_user() {
        let service = seeded_service();
        let err = service
            .update_user(UserId::new(42), UpdateUserRequest::new("x", "x@example.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, RegistryError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete_then_get_is_not_found() {
        let service = seeded_service();
        service.delete_user(UserId::new(1)).await.unwrap();

        let err = service.get_user(UserId::new(1)).await.unwrap_err();
        assert!(matches!(err, RegistryError::NotFound { .. }));

        let err = service.delete_user(UserId::new(1)).await.unwrap_err();
        assert!(matches!(err, RegistryError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_creates_and_deletes_balance_out() {
        let service = UserServiceImpl::new(Arc::new(InMemoryUserRepository::new()));

        let mut ids = Vec::new();
        for n in 0..10 {
            let created = service
                .create_user(CreateUserRequest::new(
                    format!("u{}", n),
                    format!("u{}@example.com", n),
                ))
                .await
                .unwrap();
            assert!(!ids.contains(&created.id));
            ids.push(created.id);
        }
        for id in ids.iter().take(4) {
            service.delete_user(*id).await.unwrap();
        }

        assert_eq!(service.list_users().await.unwrap().len(), 6);

        let next = service
            .create_user(CreateUserRequest::new("late", "late@example.com"))
            .await
            .unwrap();
        assert!(!ids.contains(&next.id));
    }

    #[tokio::test]
    async fn test_list_propagates_store_failure() {
        let mut repo = MockRepo::new();
        repo.expect_list().times(1).returning(|| Err(store_down()));
        let service = UserServiceImpl::new(Arc::new(repo));

        let err = service.list_users().await.unwrap_err();
        assert!(err.is_store_failure());
    }

    #[tokio::test]
    async fn test_create_propagates_store_failure() {
        let mut repo = MockRepo::new();
        repo.expect_add().times(1).returning(|_| Err(store_down()));
        let service = UserServiceImpl::new(Arc::new(repo));

        let err = service
            .create_user(CreateUserRequest::new("user4", "user4@example.com"))
            .await
            .unwrap_err();
        assert!(err.is_store_failure());
    }

    #[tokio::test]
    async fn test_update_passes_path_id_to_store() {
        let mut repo = MockRepo::new();
        repo.expect_update()
            .withf(|user: &User| user.id == UserId::new(7) && user.username == "seven")
            .times(1)
            .returning(|user| Ok(Some(user.clone())));
        let service = UserServiceImpl::new(Arc::new(repo));

        let updated = service
            .update_user(UserId::new(7), UpdateUserRequest::new("seven", "seven@example.com"))
            .await
            .unwrap();
        assert_eq!(updated.id, UserId::new(7));
    }

    #[tokio::test]
    async fn test_delete_propagates_store_failure() {
        let mut repo = MockRepo::new();
        repo.expect_remove()
            .with(eq(UserId::new(1)))
            .times(1)
            .returning(|_| Err(store_down()));
        let service = UserServiceImpl::new(Arc::new(repo));

        let err = service.delete_user(UserId::new(1)).await.unwrap_err();
        assert!(err.is_store_failure());
    }

    #[tokio::test]
    async fn test_health_delegates_to_store() {
        let mut repo = MockRepo::new();
        repo.expect_health()
            .times(1)
            .returning(|| HealthStatus::Unhealthy("disk full".to_string()));
        let service = UserServiceImpl::new(Arc::new(repo));

        assert_eq!(
            service.health().await,
            HealthStatus::Unhealthy("disk full".to_string())
        );
    }
}
