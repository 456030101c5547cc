//! Shared application state for the API server.
//!
//! [`AppState`] owns the activity registry for the lifetime of the server.
//! It is created once at startup, wrapped in [`Arc`](std::sync::Arc), and
//! handed to the router; nothing else holds registry state.

use mergington_core::ActivityRegistry;
use tokio::sync::RwLock;

/// Shared state for the Axum application.
#[derive(Debug)]
pub struct AppState {
    /// The activity registry. Mutations must hold the write guard for the
    /// full registry call.
    pub registry: RwLock<ActivityRegistry>,
}

impl AppState {
    /// Create application state around an existing registry.
    pub fn new(registry: ActivityRegistry) -> Self {
        Self {
            registry: RwLock::new(registry),
        }
    }

    /// Create application state holding the built-in catalogue.
    pub fn seeded() -> Self {
        Self::new(ActivityRegistry::seeded())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::seeded()
    }
}
