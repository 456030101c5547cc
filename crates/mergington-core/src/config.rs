//! Configuration loading and typed config structures for the activities
//! service.
//!
//! The configuration lives in `mergington-config.yaml`. Every field has a
//! default, so an empty or missing file yields a working setup that serves
//! the built-in catalogue on `0.0.0.0:8000`.
//!
//! ```yaml
//! server:
//!   host: "0.0.0.0"
//!   port: 8000
//!   static_dir: "static"
//! logging:
//!   level: "info"
//! activities:
//!   - name: "Robotics Club"
//!     description: "Build and program robots"
//!     schedule: "Mondays, 3:30 PM - 5:00 PM"
//!     max_participants: 8
//!     participants: []
//! ```

use std::path::Path;

use mergington_types::Activity;
use serde::Deserialize;

use crate::error::RegistryError;
use crate::registry::ActivityRegistry;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level service configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ServiceConfig {
    /// HTTP listener and static file settings.
    #[serde(default)]
    pub server: ServerSettings,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Activity catalogue override. Empty means the built-in catalogue.
    #[serde(default)]
    pub activities: Vec<SeedActivity>,
}

impl ServiceConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// Environment variables override file values for the listener:
    /// - `MERGINGTON_HOST` overrides `server.host`
    /// - `MERGINGTON_PORT` overrides `server.port` (ignored unless a valid port)
    /// - `MERGINGTON_STATIC_DIR` overrides `server.static_dir`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let mut config = Self::parse(&contents)?;
        config.server.apply_env_overrides();
        Ok(config)
    }

    /// Parse configuration from a YAML string.
    ///
    /// No environment overrides are applied.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yml::from_str(yaml)?)
    }

    /// Build the registry this configuration describes.
    ///
    /// Uses the configured `activities` when present, otherwise the
    /// built-in catalogue.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidSeed`] if a configured activity
    /// breaks a registry invariant.
    pub fn build_registry(&self) -> Result<ActivityRegistry, RegistryError> {
        if self.activities.is_empty() {
            return Ok(ActivityRegistry::seeded());
        }
        ActivityRegistry::from_seed(
            self.activities
                .iter()
                .map(|seed| (seed.name.clone(), seed.activity.clone())),
        )
    }
}

/// HTTP listener and static file settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerSettings {
    /// Host address to bind to.
    #[serde(default = "default_host")]
    pub host: String,

    /// TCP port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory served under `/static`.
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

impl ServerSettings {
    /// Apply `MERGINGTON_*` environment variable overrides.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from an arbitrary key lookup.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("MERGINGTON_HOST") {
            self.host = val;
        }
        if let Some(port) = lookup("MERGINGTON_PORT").and_then(|val| val.parse().ok()) {
            self.port = port;
        }
        if let Some(val) = lookup("MERGINGTON_STATIC_DIR") {
            self.static_dir = val;
        }
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive (trace, debug, info, warn, error) used when
    /// `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON log lines instead of human-readable text.
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

/// A configured activity together with its name.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SeedActivity {
    /// Display name and registry key.
    pub name: String,

    /// The activity record.
    #[serde(flatten)]
    pub activity: Activity,
}

// ---------------------------------------------------------------------------
// Default value functions
// ---------------------------------------------------------------------------

fn default_host() -> String {
    "0.0.0.0".to_owned()
}

const fn default_port() -> u16 {
    8000
}

fn default_static_dir() -> String {
    "static".to_owned()
}

fn default_log_level() -> String {
    "info".to_owned()
}
