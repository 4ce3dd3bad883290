//! SQLite user repository implementation.

use crate::{traits::UserRepository, DatabasePoolInterface};
use async_trait::async_trait;
use registry_core::{HealthStatus, NewUser, RegistryResult, User, UserId};
use shaku::Component;
use sqlx::FromRow;
use std::sync::Arc;
use tracing::{debug, warn};

/// SQLite user repository implementation.
#[derive(Component, Clone)]
#[shaku(interface = UserRepository)]
pub struct SqliteUserRepository {
    #[shaku(inject)]
    pool: Arc<dyn DatabasePoolInterface>,
}

impl SqliteUserRepository {
    /// Creates a new SQLite user repository.
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }
}

/// Database row representation of a user.
#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    username: String,
    email: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User::new(UserId::new(row.id), row.username, row.email)
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn list(&self) -> RegistryResult<Vec<User>> {
        debug!("Listing users");

        let rows = sqlx::query_as::<_, UserRow>(
            "SELECT id, username, email FROM users ORDER BY id",
        )
        .fetch_all(self.pool.inner())
        .await?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn find_by_id(&self, id: UserId) -> RegistryResult<Option<User>> {
        debug!("Finding user by id: {}", id);

        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, username, email FROM users WHERE id = ?",
        )
        .bind(id.into_inner())
        .fetch_optional(self.pool.inner())
        .await?;

        Ok(row.map(User::from))
    }

    async fn add(&self, user: NewUser) -> RegistryResult<User> {
        debug!("Inserting user: {}", user.username);

        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (username, email)
            VALUES (?, ?)
            RETURNING id, username, email
            "#,
        )
        .bind(&user.username)
        .bind(&user.email)
        .fetch_one(self.pool.inner())
        .await?;

        Ok(row.into())
    }

    async fn update(&self, user: &User) -> RegistryResult<Option<User>> {
        debug!("Updating user: {}", user.id);

        let row = sqlx::query_as::<_, UserRow>(
            r#"
            UPDATE users
            SET username = ?, email = ?
            WHERE id = ?
            RETURNING id, username, email
            "#,
        )
        .bind(&user.username)
        .bind(&user.email)
        .bind(user.id.into_inner())
        .fetch_optional(self.pool.inner())
        .await?;

        Ok(row.map(User::from))
    }

    async fn remove(&self, id: UserId) -> RegistryResult<bool> {
        debug!("Removing user: {}", id);

        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id.into_inner())
            .execute(self.pool.inner())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn health(&self) -> HealthStatus {
        match self.pool.health_check().await {
            Ok(()) => HealthStatus::Healthy,
            Err(e) => {
                warn!("User store health check failed: {}", e);
                HealthStatus::Unhealthy(e.to_string())
            }
        }
    }
}
