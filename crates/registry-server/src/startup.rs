//! Server startup utilities.

use registry_config::{AppConfig, StorageBackend};
use tracing::info;

/// Prints the startup banner.
pub fn print_banner() {
    info!(r#"
  _   _                 ____            _     _
 | | | |___  ___ _ __ |  _ \ ___  __ _(_)___| |_ _ __ _   _
 | | | / __|/ _ \ '__|| |_) / _ \/ _` | / __| __| '__| | | |
 | |_| \__ \  __/ |   |  _ <  __/ (_| | \__ \ |_| |  | |_| |
  \___/|___/\___|_|   |_| \_\___|\__, |_|___/\__|_|   \__, |
                                 |___/                |___/
    "#);
}

/// Prints server startup information.
pub fn print_startup_info(config: &AppConfig) {
    let separator = "=".repeat(60);
    let port = config.server.port;
    info!("{}", separator);
    info!("REST API:  http://{}/api/users", config.server.addr());
    info!("Health:    http://0.0.0.0:{}/health", port);
    info!("API Docs:  http://0.0.0.0:{}/swagger-ui", port);
    match config.storage.backend {
        StorageBackend::Sqlite => info!("Storage:   sqlite ({})", config.database.url),
        StorageBackend::Memory => info!("Storage:   memory (data is lost on shutdown)"),
    }
    info!("{}", separator);
}
