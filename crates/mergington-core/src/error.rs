//! Error types for the `mergington-core` crate.
//!
//! The `Display` text of the request-level variants is what clients see in
//! the `detail` field of an error response, so each message carries the
//! phrase the front end keys on ("Activity not found", "already signed up",
//! "no spots left", "not registered").

/// Errors that can occur during registry operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// No activity is registered under the requested name.
    #[error("Activity not found")]
    NotFound {
        /// The name that was looked up.
        activity: String,
    },

    /// The student is already in the activity's participant list.
    #[error("Student {email} is already signed up for {activity}")]
    AlreadyRegistered {
        /// The activity name.
        activity: String,
        /// The student's email.
        email: String,
    },

    /// The activity has reached its maximum participant count.
    #[error("Activity {activity} is full: no spots left")]
    CapacityExceeded {
        /// The full activity.
        activity: String,
        /// Its maximum capacity.
        capacity: u32,
    },

    /// The student is not in the activity's participant list.
    #[error("Student {email} is not registered for {activity}")]
    NotRegistered {
        /// The activity name.
        activity: String,
        /// The student's email.
        email: String,
    },

    /// A seed entry violates the registry invariants.
    #[error("invalid seed activity {activity:?}: {reason}")]
    InvalidSeed {
        /// The offending activity name.
        activity: String,
        /// Which rule was broken.
        reason: String,
    },
}

impl RegistryError {
    /// Whether the error is a lookup miss rather than a rule violation.
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
