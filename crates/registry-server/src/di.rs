//! Dependency injection module using Shaku.
//!
//! One module per storage backend:
//! - `SqliteModule`: SQLite pool, SQL-backed repository, user service
//! - `InMemoryModule`: process-local repository, user service
//!
//! The backend is chosen from configuration when the application starts;
//! nothing downstream of the modules knows which one is in use.

use registry_config::DatabaseConfig;
use registry_core::RegistryResult;
use registry_repository::{
    DatabasePool, DatabasePoolInterface, DatabasePoolParameters, InMemoryUserRepository,
    SqliteUserRepository, UserRepository,
};
use registry_service::UserServiceImpl;
use shaku::{module, HasComponent};
use std::sync::Arc;
use tracing::info;

module! {
    pub SqliteModule {
        components = [
            DatabasePool,
            SqliteUserRepository,
            UserServiceImpl,
        ],
        providers = [],
    }
}

module! {
    pub InMemoryModule {
        components = [
            InMemoryUserRepository,
            UserServiceImpl,
        ],
        providers = [],
    }
}

/// Builds the SQLite module, opening the pool and optionally migrating.
pub async fn build_sqlite_module(db_config: &DatabaseConfig) -> RegistryResult<Arc<SqliteModule>> {
    let db_pool = DatabasePool::connect(db_config).await?;

    if db_config.run_migrations {
        db_pool.run_migrations().await?;
    }

    let module = SqliteModule::builder()
        .with_component_parameters::<DatabasePool>(DatabasePoolParameters {
            pool: db_pool.into_inner(),
        })
        .build();

    info!("SQLite storage module ready");
    Ok(Arc::new(module))
}

/// Builds the in-memory module with an empty store.
#[must_use]
pub fn build_in_memory_module() -> Arc<InMemoryModule> {
    info!("In-memory storage module ready");
    Arc::new(InMemoryModule::builder().build())
}

/// Trait for resolving the storage component from any module.
///
/// The service itself is resolved through `AppState::from_module`.
pub trait ServiceResolver {
    /// Resolves the user repository from the module.
    fn user_repository(&self) -> Arc<dyn UserRepository>;
}

impl ServiceResolver for SqliteModule {
    fn user_repository(&self) -> Arc<dyn UserRepository> {
        self.resolve()
    }
}

impl ServiceResolver for InMemoryModule {
    fn user_repository(&self) -> Arc<dyn UserRepository> {
        self.resolve()
    }
}

/// Trait for resolving the database pool from modules that have one.
pub trait DatabaseResolver {
    /// Resolves the database pool from the module.
    fn database_pool(&self) -> Arc<dyn DatabasePoolInterface>;
}

impl DatabaseResolver for SqliteModule {
    fn database_pool(&self) -> Arc<dyn DatabasePoolInterface> {
        self.resolve()
    }
}
