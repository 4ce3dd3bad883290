//! Application assembly: storage module, seeding, router, and serving.

use crate::di::{build_in_memory_module, build_sqlite_module, DatabaseResolver, ServiceResolver};
use axum::Router;
use registry_config::{AppConfig, StorageBackend};
use registry_core::{RegistryError, RegistryResult};
use registry_repository::{seed_sample_users, DatabasePoolInterface, UserRepository};
use registry_rest::{create_router, AppState};
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// A fully wired application, ready to serve.
pub struct Application {
    config: AppConfig,
    router: Router,
    pool: Option<Arc<dyn DatabasePoolInterface>>,
}

impl Application {
    /// Builds the storage module selected by `storage.backend` and the router on top of it.
    pub async fn build(config: AppConfig) -> RegistryResult<Self> {
        info!("Storage backend: {}", config.storage.backend);

        let (state, repository, pool) = match config.storage.backend {
            StorageBackend::Sqlite => {
                let module = build_sqlite_module(&config.database).await?;
                (
                    AppState::from_module(module.as_ref()),
                    module.user_repository(),
                    Some(module.database_pool()),
                )
            }
            StorageBackend::Memory => {
                let module = build_in_memory_module();
                (
                    AppState::from_module(module.as_ref()),
                    module.user_repository(),
                    None,
                )
            }
        };

        if config.storage.seed_sample_data {
            seed(repository.as_ref()).await?;
        }

        let router = create_router(state, &config.server);

        Ok(Self {
            config,
            router,
            pool,
        })
    }

    /// Returns the configured router.
    #[must_use]
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Returns the configuration the application was built with.
    #[must_use]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Binds the configured address and serves until `shutdown` resolves.
    pub async fn serve<F>(self, shutdown: F) -> RegistryResult<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = self.config.server.addr();
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| RegistryError::Internal(format!("Failed to bind {}: {}", addr, e)))?;

        info!("Starting REST server on http://{}", addr);

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| RegistryError::Internal(format!("REST server error: {}", e)))?;

        if let Some(pool) = self.pool {
            pool.close().await;
        }

        info!("Server shutdown complete");
        Ok(())
    }
}

async fn seed(repository: &dyn UserRepository) -> RegistryResult<()> {
    let inserted = seed_sample_users(repository).await?;
    if inserted == 0 {
        info!("Store already has users; skipping sample data");
    }
    Ok(())
}
