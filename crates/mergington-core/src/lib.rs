//! Activity registry and supporting pieces for the Mergington activities
//! service.
//!
//! # Modules
//!
//! - [`registry`] -- [`ActivityRegistry`], the in-memory store of activities
//!   with the guarded `signup` and `unregister` mutations.
//! - [`seed`] -- The built-in activity catalogue the registry starts with.
//! - [`config`] -- Configuration loading from `mergington-config.yaml` into
//!   strongly-typed structs.
//! - [`error`] -- [`RegistryError`], the registry failure taxonomy.
//!
//! [`ActivityRegistry`]: registry::ActivityRegistry
//! [`RegistryError`]: error::RegistryError

pub mod config;
pub mod error;
pub mod registry;
pub mod seed;

pub use config::{ConfigError, ServiceConfig};
pub use error::RegistryError;
pub use registry::ActivityRegistry;
