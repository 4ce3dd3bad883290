//! Configuration loader with layered sources.

use crate::{AppConfig, ConfigValidator};
use config::{Config, ConfigError, Environment, File};
use registry_core::RegistryError;
use std::path::Path;
use tracing::{debug, info};

/// Environment variable prefix for overrides, e.g. `REGISTRY__SERVER__PORT`.
pub const ENV_PREFIX: &str = "REGISTRY";

/// Environment variable selecting the environment-specific config file.
pub const ENVIRONMENT_VAR: &str = "REGISTRY_ENVIRONMENT";

/// Configuration loader with layered sources.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: AppConfig,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    ///
    /// Configuration is loaded from multiple sources in order:
    /// 1. `config/default.toml` - Default values
    /// 2. `config/{environment}.toml` - Environment-specific overrides
    /// 3. `config/local.toml` - Untracked local overrides
    /// 4. Environment variables with `REGISTRY__` prefix
    pub fn new(config_dir: impl AsRef<Path>) -> Result<Self, RegistryError> {
        let config = Self::load_config(config_dir.as_ref())?;
        Ok(Self { config })
    }

    /// Loads configuration from the default location (`./config`).
    pub fn from_default_location() -> Result<Self, RegistryError> {
        Self::new("./config")
    }

    /// Consumes the loader, returning the configuration.
    #[must_use]
    pub fn into_config(self) -> AppConfig {
        self.config
    }

    /// Loads configuration from the specified directory.
    fn load_config(config_dir: &Path) -> Result<AppConfig, RegistryError> {
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file found or error loading it: {}", e);
        }

        let environment =
            std::env::var(ENVIRONMENT_VAR).unwrap_or_else(|_| "development".to_string());

        info!("Loading configuration for environment: {}", environment);

        let mut builder = Config::builder();

        for name in ["default", environment.as_str(), "local"] {
            let path = config_dir.join(format!("{}.toml", name));
            if path.exists() {
                debug!("Loading config from: {}", path.display());
                builder = builder.add_source(File::from(path).required(false));
            }
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let app_config: AppConfig = builder
            .build()
            .and_then(|config| config.try_deserialize())
            .map_err(config_error_to_registry_error)?;

        Self::validate_config(&app_config)?;

        Ok(app_config)
    }

    /// Validates the configuration.
    fn validate_config(config: &AppConfig) -> Result<(), RegistryError> {
        ConfigValidator::validate(config).map_err(|errors| {
            let message = errors
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ");
            RegistryError::Configuration(message)
        })
    }
}

fn config_error_to_registry_error(err: ConfigError) -> RegistryError {
    RegistryError::Configuration(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StorageBackend;
    use std::fs;

    #[test]
    fn test_missing_directory_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ConfigLoader::new(dir.path().join("absent"))
            .unwrap()
            .into_config();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.storage.backend, StorageBackend::Sqlite);
    }

    #[test]
    fn test_default_file_overrides_builtin_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("default.toml"),
            "[server]\nport = 9100\n\n[storage]\nbackend = \"memory\"\nseed_sample_data = false\n",
        )
        .unwrap();

        let config = ConfigLoader::new(dir.path()).unwrap().into_config();
        assert_eq!(config.server.port, 9100);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.storage.backend, StorageBackend::Memory);
        assert!(!config.storage.seed_sample_data);
    }

    #[test]
    fn test_local_file_wins_over_default() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("default.toml"), "[server]\nport = 9100\n").unwrap();
        fs::write(dir.path().join("local.toml"), "[server]\nport = 9200\n").unwrap();

        let config = ConfigLoader::new(dir.path()).unwrap().into_config();
        assert_eq!(config.server.port, 9200);
    }

    #[test]
    fn test_invalid_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("default.toml"), "[server]\nport = 0\n").unwrap();

        let err = ConfigLoader::new(dir.path()).err().unwrap();
        assert!(matches!(err, RegistryError::Configuration(_)));
    }

    #[test]
    fn test_into_config_returns_loaded_values() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("default.toml"), "[observability]\nlog_format = \"json\"\n").unwrap();

        let config = ConfigLoader::new(dir.path()).unwrap().into_config();
        assert_eq!(config.observability.log_format, "json");
    }
}
