//! JSON payloads returned by the HTTP API.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Confirmation body for a successful signup or unregister.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct MessageResponse {
    /// Human-readable confirmation naming the student and the activity.
    pub message: String,
}

impl MessageResponse {
    /// Wrap a confirmation message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Error body for a rejected request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ErrorResponse {
    /// Human-readable reason the request was rejected.
    pub detail: String,
}
