//! The [`Activity`] record.
//!
//! An activity is keyed by its display name in the registry, so the name
//! is not stored on the record itself. The serialized shape is exactly
//! what `GET /activities` returns for each entry:
//!
//! ```json
//! {
//!   "description": "Learn strategies and compete in chess tournaments",
//!   "schedule": "Fridays, 3:30 PM - 5:00 PM",
//!   "max_participants": 12,
//!   "participants": ["michael@mergington.edu", "daniel@mergington.edu"]
//! }
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A single extracurricular activity.
///
/// `participants` is kept in signup order and never holds more than
/// `max_participants` entries or the same email twice. The registry is the
/// only writer and enforces both rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Activity {
    /// Free-text description shown in the UI.
    pub description: String,
    /// Free-text meeting schedule.
    pub schedule: String,
    /// Maximum number of participants.
    pub max_participants: u32,
    /// Registered student emails, oldest signup first.
    #[serde(default)]
    pub participants: Vec<String>,
}

impl Activity {
    /// Create an activity with no participants.
    pub fn new(
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
    ) -> Self {
        Self {
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: Vec::new(),
        }
    }

    /// Whether `email` is already in the participant list.
    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    /// Number of registered participants.
    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }

    /// Remaining open spots. Zero when full.
    pub fn spots_left(&self) -> usize {
        usize::try_from(self.max_participants)
            .unwrap_or(usize::MAX)
            .saturating_sub(self.participants.len())
    }

    /// Whether the activity has no open spots.
    pub fn is_full(&self) -> bool {
        self.spots_left() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chess() -> Activity {
        let mut activity = Activity::new(
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            2,
        );
        activity.participants.push("michael@mergington.edu".to_owned());
        activity
    }

    #[test]
    fn spots_left_counts_down_to_zero() {
        let mut activity = chess();
        assert_eq!(activity.spots_left(), 1);
        assert!(!activity.is_full());

        activity.participants.push("daniel@mergington.edu".to_owned());
        assert_eq!(activity.spots_left(), 0);
        assert!(activity.is_full());
    }

    #[test]
    fn has_participant_matches_exact_email() {
        let activity = chess();
        assert!(activity.has_participant("michael@mergington.edu"));
        assert!(!activity.has_participant("Michael@mergington.edu"));
        assert!(!activity.has_participant("daniel@mergington.edu"));
    }

    #[test]
    fn serializes_with_api_field_names() {
        let json = serde_json::to_value(chess()).unwrap_or_default();
        assert_eq!(json["max_participants"], 2);
        assert_eq!(json["schedule"], "Fridays, 3:30 PM - 5:00 PM");
        assert_eq!(json["participants"][0], "michael@mergington.edu");
        assert!(json["description"].is_string());
    }

    #[test]
    fn deserializes_without_participants() {
        let raw = r#"{"description":"d","schedule":"s","max_participants":3}"#;
        let parsed: Result<Activity, _> = serde_json::from_str(raw);
        assert!(parsed.is_ok());
        if let Ok(activity) = parsed {
            assert!(activity.participants.is_empty());
            assert_eq!(activity.spots_left(), 3);
        }
    }
}
