//! # User Registry Server
//!
//! Main entry point. Loads configuration, initializes logging, wires the
//! storage backend chosen in configuration, and serves the REST API until
//! Ctrl+C or SIGTERM.

use registry_config::ConfigLoader;
use registry_core::{logging::init_logging, LogFormat, RegistryResult};
use registry_server::{
    startup::{print_banner, print_startup_info},
    Application,
};
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Application error: {}", e);
        eprintln!("registry-server: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> RegistryResult<()> {
    let config = ConfigLoader::from_default_location()?.into_config();

    let log_format: LogFormat = config.observability.log_format.parse()?;
    init_logging(&config.observability.log_level, log_format)?;

    print_banner();
    info!("Starting User Registry Server...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));
    info!("Environment: {}", config.app.environment);

    let app = Application::build(config).await?;
    print_startup_info(app.config());

    app.serve(shutdown_signal()).await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received terminate signal, initiating graceful shutdown...");
        }
    }
}
