//! Error types for the server binary.
//!
//! [`ServerError`] is the top-level error type that wraps every failure
//! mode during startup and serving.

/// Top-level error for the server binary.
///
/// Each variant wraps a specific subsystem error, providing a single
/// error type that `main` can propagate with `?`.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: mergington_core::ConfigError,
    },

    /// The configured activity catalogue is invalid.
    #[error("registry error: {source}")]
    Registry {
        /// The underlying registry error.
        #[from]
        source: mergington_core::RegistryError,
    },

    /// The HTTP server failed to bind or serve.
    #[error("server error: {source}")]
    Serve {
        /// The underlying server error.
        #[from]
        source: mergington_api::ServeError,
    },

    /// The logging subscriber could not be installed.
    #[error("logging error: {message}")]
    Logging {
        /// Description of the logging failure.
        message: String,
    },
}
