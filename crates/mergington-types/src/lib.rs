//! Shared type definitions for the Mergington activities service.
//!
//! This crate is the single source of truth for the records exchanged
//! between the registry, the HTTP API, and the browser UI. Types flow
//! downstream to `TypeScript` via `ts-rs` so the static front end can
//! consume the same shapes the server emits.
//!
//! # Modules
//!
//! - [`activity`] -- The [`Activity`] record and its capacity helpers
//! - [`responses`] -- JSON payloads returned by the HTTP API

pub mod activity;
pub mod responses;

// Re-export all public types at crate root for convenience.
pub use activity::Activity;
pub use responses::{ErrorResponse, MessageResponse};
