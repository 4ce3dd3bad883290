//! Common test infrastructure for database integration tests.

use registry_config::DatabaseConfig;
use registry_repository::{DatabasePool, DatabasePoolInterface};
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

/// Test database wrapper.
///
/// Owns a temporary directory holding a SQLite file; the directory and the
/// database are removed when the wrapper is dropped.
pub struct TestDatabase {
    dir: TempDir,
    pool: Arc<DatabasePool>,
}

impl TestDatabase {
    /// Creates a fresh, migrated database.
    pub async fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let pool = Self::open(&dir.path().join("users.db")).await;
        Self { dir, pool }
    }

    /// Returns a reference to the database pool.
    pub fn pool(&self) -> Arc<DatabasePool> {
        Arc::clone(&self.pool)
    }

    /// Closes the current pool and opens a new one on the same file.
    pub async fn reopen(self) -> Self {
        self.pool.close().await;
        let pool = Self::open(&self.path()).await;
        Self { dir: self.dir, pool }
    }

    fn path(&self) -> PathBuf {
        self.dir.path().join("users.db")
    }

    async fn open(path: &std::path::Path) -> Arc<DatabasePool> {
        let config = DatabaseConfig {
            url: format!("sqlite://{}?mode=rwc", path.display()),
            min_connections: 1,
            max_connections: 5,
            ..DatabaseConfig::default()
        };

        let pool = DatabasePool::connect(&config)
            .await
            .expect("Failed to open SQLite database");
        pool.run_migrations()
            .await
            .expect("Failed to run migrations");
        Arc::new(pool)
    }
}
