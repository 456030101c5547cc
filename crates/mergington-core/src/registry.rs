//! In-memory activity registry.
//!
//! [`ActivityRegistry`] maps activity names to [`Activity`] records and is
//! the only place participant lists change. It is a plain owned value with
//! `&mut self` mutations; callers that share it across tasks wrap it in a
//! lock and hold the write guard for the whole call, which makes each
//! check-then-mutate sequence atomic.
//!
//! # Check order
//!
//! `signup` checks existence, then duplicates, then capacity. A duplicate
//! signup against a full activity therefore reports
//! [`RegistryError::AlreadyRegistered`], not
//! [`RegistryError::CapacityExceeded`]. Clients observe this ordering, so
//! it must not be rearranged.

use std::collections::{BTreeMap, BTreeSet};

use mergington_types::{Activity, MessageResponse};
use tracing::debug;

use crate::error::RegistryError;
use crate::seed;

/// The collection of all activities, keyed by display name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityRegistry {
    activities: BTreeMap<String, Activity>,
}

impl ActivityRegistry {
    /// Create an empty registry.
    pub const fn new() -> Self {
        Self {
            activities: BTreeMap::new(),
        }
    }

    /// Create a registry holding the built-in activity catalogue.
    pub fn seeded() -> Self {
        Self {
            activities: seed::default_activities().into_iter().collect(),
        }
    }

    /// Build a registry from `(name, activity)` pairs, validating each one.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidSeed`] if a name repeats, a capacity
    /// is zero, an activity lists the same email twice, or an activity
    /// starts with more participants than it allows.
    pub fn from_seed<I>(entries: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = (String, Activity)>,
    {
        let mut activities = BTreeMap::new();
        for (name, activity) in entries {
            validate_seed_entry(&name, &activity)?;
            if activities.contains_key(&name) {
                return Err(invalid_seed(&name, "duplicate activity name"));
            }
            activities.insert(name, activity);
        }
        Ok(Self { activities })
    }

    /// Return the full name-to-record mapping.
    pub const fn list_activities(&self) -> &BTreeMap<String, Activity> {
        &self.activities
    }

    /// Look up a single activity.
    pub fn get(&self, activity_name: &str) -> Option<&Activity> {
        self.activities.get(activity_name)
    }

    /// Number of activities.
    pub fn len(&self) -> usize {
        self.activities.len()
    }

    /// Whether the registry holds no activities.
    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    /// Activity names in key order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.activities.keys().map(String::as_str)
    }

    /// Register `email` for `activity_name`.
    ///
    /// On success the email is appended to the end of the participant list.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::NotFound`] if the activity does not exist.
    /// - [`RegistryError::AlreadyRegistered`] if the email is already listed.
    /// - [`RegistryError::CapacityExceeded`] if the activity is full.
    ///
    /// The registry is unchanged on error.
    pub fn signup(
        &mut self,
        activity_name: &str,
        email: &str,
    ) -> Result<MessageResponse, RegistryError> {
        let activity = self.get_mut(activity_name)?;

        if activity.has_participant(email) {
            return Err(RegistryError::AlreadyRegistered {
                activity: activity_name.to_owned(),
                email: email.to_owned(),
            });
        }

        if activity.is_full() {
            return Err(RegistryError::CapacityExceeded {
                activity: activity_name.to_owned(),
                capacity: activity.max_participants,
            });
        }

        activity.participants.push(email.to_owned());
        debug!(
            activity = activity_name,
            email,
            spots_left = activity.spots_left(),
            "participant added"
        );

        Ok(MessageResponse::new(format!(
            "Signed up {email} for {activity_name}"
        )))
    }

    /// Remove `email` from `activity_name`.
    ///
    /// The relative order of the remaining participants is preserved.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::NotFound`] if the activity does not exist.
    /// - [`RegistryError::NotRegistered`] if the email is not listed.
    ///
    /// The registry is unchanged on error.
    pub fn unregister(
        &mut self,
        activity_name: &str,
        email: &str,
    ) -> Result<MessageResponse, RegistryError> {
        let activity = self.get_mut(activity_name)?;

        let Some(position) = activity.participants.iter().position(|p| p == email) else {
            return Err(RegistryError::NotRegistered {
                activity: activity_name.to_owned(),
                email: email.to_owned(),
            });
        };

        activity.participants.remove(position);
        debug!(
            activity = activity_name,
            email,
            spots_left = activity.spots_left(),
            "participant removed"
        );

        Ok(MessageResponse::new(format!(
            "Unregistered {email} from {activity_name}"
        )))
    }

    fn get_mut(&mut self, activity_name: &str) -> Result<&mut Activity, RegistryError> {
        self.activities
            .get_mut(activity_name)
            .ok_or_else(|| RegistryError::NotFound {
                activity: activity_name.to_owned(),
            })
    }
}

fn validate_seed_entry(name: &str, activity: &Activity) -> Result<(), RegistryError> {
    if activity.max_participants == 0 {
        return Err(invalid_seed(name, "max_participants must be positive"));
    }

    let mut seen = BTreeSet::new();
    for email in &activity.participants {
        if !seen.insert(email.as_str()) {
            return Err(invalid_seed(name, &format!("participant {email} listed twice")));
        }
    }

    if usize::try_from(activity.max_participants).is_ok_and(|max| activity.participants.len() > max)
    {
        return Err(invalid_seed(
            name,
            &format!(
                "{} participants exceed capacity {}",
                activity.participants.len(),
                activity.max_participants
            ),
        ));
    }

    Ok(())
}

fn invalid_seed(name: &str, reason: &str) -> RegistryError {
    RegistryError::InvalidSeed {
        activity: name.to_owned(),
        reason: reason.to_owned(),
    }
}
