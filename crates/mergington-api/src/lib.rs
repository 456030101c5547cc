//! HTTP API server for the Mergington activities service.
//!
//! This crate provides an Axum HTTP server that exposes:
//!
//! - **REST endpoints** for listing activities and for signing students
//!   up to, or removing them from, an activity
//! - **Static files** (`/static/*`) for the browser front end, with `GET /`
//!   redirecting to `/static/index.html`
//!
//! # Architecture
//!
//! Handlers share a single [`ActivityRegistry`] owned by [`AppState`] and
//! injected through Axum's `State` extractor. Reads take the registry's
//! read lock; `signup` and `unregister` hold the write lock across the
//! whole check-then-mutate call so concurrent requests for the last open
//! spot cannot both succeed.
//!
//! [`ActivityRegistry`]: mergington_core::ActivityRegistry

pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;

// Re-export primary types for convenience.
pub use error::ApiError;
pub use router::build_router;
pub use server::{start_server, ServeError, ServerConfig};
pub use state::AppState;
