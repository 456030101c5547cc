//! Server binary for the Mergington activities service.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `mergington-config.yaml` (or the file named
//!    by `MERGINGTON_CONFIG`)
//! 2. Initialize structured logging (tracing)
//! 3. Build the activity registry from the configured catalogue
//! 4. Serve the HTTP API until `Ctrl-C`

mod error;

use std::path::PathBuf;
use std::sync::Arc;

use mergington_api::{AppState, ServerConfig};
use mergington_core::config::LoggingConfig;
use mergington_core::ServiceConfig;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::error::ServerError;

/// Config file used when `MERGINGTON_CONFIG` is unset.
const DEFAULT_CONFIG_PATH: &str = "mergington-config.yaml";

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration, registry construction, or the
/// server itself fails.
#[tokio::main]
async fn main() -> Result<(), ServerError> {
    // 1. Load configuration. Logging is not up yet, so remember whether the
    //    file was found and report it afterwards.
    let config_path = std::env::var("MERGINGTON_CONFIG")
        .map_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from);
    let config_found = config_path.exists();
    let config = if config_found {
        ServiceConfig::from_file(&config_path)?
    } else {
        let mut config = ServiceConfig::default();
        config.server.apply_env_overrides();
        config
    };

    // 2. Initialize structured logging.
    init_tracing(&config.logging)?;
    info!("mergington-server starting");
    if config_found {
        info!(path = %config_path.display(), "Configuration loaded");
    } else {
        info!(path = %config_path.display(), "Config file not found, using defaults");
    }

    // 3. Build the registry.
    let registry = config.build_registry()?;
    info!(
        activities = registry.len(),
        configured = !config.activities.is_empty(),
        "Activity registry initialized"
    );

    // 4. Serve until Ctrl-C.
    let server_config = ServerConfig::from(&config.server);
    let state = Arc::new(AppState::new(registry));
    mergington_api::start_server(&server_config, state, shutdown_signal()).await?;

    info!("mergington-server shutdown complete");

    Ok(())
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_tracing(logging: &LoggingConfig) -> Result<(), ServerError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    let result = if logging.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    result.map_err(|e| ServerError::Logging {
        message: e.to_string(),
    })
}

/// Resolve when the process receives `Ctrl-C`.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for Ctrl-C, shutting down");
    } else {
        info!("Ctrl-C received, shutting down");
    }
}
