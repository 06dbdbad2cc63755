use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum number of characters allowed in an event description.
pub const DESCRIPTION_MAX_CHARS: usize = 280;

/// An authenticated user, as resolved from a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    /// Display name shown as the owner of events this user creates.
    pub display_name: String,
}

impl User {
    /// Creates a new user with the given display name.
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            display_name: display_name.into(),
        }
    }

    /// Sets a specific ID for this user (useful for testing).
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }
}

/// Day of the week for recurrence descriptors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

/// How often a recurring event repeats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecurrenceRate {
    /// One-off event.
    #[default]
    None,
    Daily,
    Weekly,
    Monthly,
}

/// Recurrence descriptor: a rate plus the weekdays it applies to.
///
/// Carried on the event model but never expanded into occurrences;
/// recurring-event expansion is out of scope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recurrence {
    pub rate: RecurrenceRate,
    #[serde(default)]
    pub days: Vec<Weekday>,
}

impl Recurrence {
    /// Returns true if this descriptor represents a one-off event.
    pub fn is_none(&self) -> bool {
        self.rate == RecurrenceRate::None
    }
}

/// A scheduled event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: Uuid,
    /// Logical group for bulk deletion. Events created as a recurring
    /// series share a group ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<Uuid>,
    pub title: String,
    pub description: String,
    pub location: String,
    pub start_at: DateTime<Utc>,
    pub end_at: DateTime<Utc>,
    /// Display name of the user who created the event. Derived from the
    /// authenticated session, never from the request body.
    pub owner: String,
    #[serde(default)]
    pub recurrence: Recurrence,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Event {
    /// Creates a new event owned by the given display name.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        location: impl Into<String>,
        start_at: DateTime<Utc>,
        end_at: DateTime<Utc>,
        owner: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            group_id: None,
            title: title.into(),
            description: description.into(),
            location: location.into(),
            start_at,
            end_at,
            owner: owner.into(),
            recurrence: Recurrence::default(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Sets the group ID for this event.
    pub fn with_group_id(mut self, group_id: Uuid) -> Self {
        self.group_id = Some(group_id);
        self
    }

    /// Sets the recurrence descriptor for this event.
    pub fn with_recurrence(mut self, recurrence: Recurrence) -> Self {
        self.recurrence = recurrence;
        self
    }

    /// Sets a specific ID for this event (useful for testing).
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }
}
