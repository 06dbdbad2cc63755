//! API request types for event operations.
//!
//! These types are shared between the server and client for type-safe API
//! communication. Following the Functional Core pattern, these are pure data
//! types with no I/O.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::{FieldError, ScheduleError};
use super::types::{Event, Recurrence};
use super::validation::{validate_fields, validate_schedule};

/// Request payload for creating a new event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEventRequest {
    pub title: String,
    pub description: String,
    pub location: String,
    pub start_at: DateTime<Utc>,
    pub end_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<Uuid>,
    #[serde(default)]
    pub recurrence: Recurrence,
}

impl CreateEventRequest {
    /// Creates a request with the required fields.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        location: impl Into<String>,
        start_at: DateTime<Utc>,
        end_at: DateTime<Utc>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            location: location.into(),
            start_at,
            end_at,
            group_id: None,
            recurrence: Recurrence::default(),
        }
    }

    /// Sets the group ID.
    pub fn with_group_id(mut self, group_id: Uuid) -> Self {
        self.group_id = Some(group_id);
        self
    }

    /// Sets the recurrence descriptor.
    pub fn with_recurrence(mut self, recurrence: Recurrence) -> Self {
        self.recurrence = recurrence;
        self
    }

    /// Runs field and schedule validation over the payload.
    ///
    /// Returns both error lists; callers treat two empty lists as pass.
    pub fn validate(&self) -> (Vec<FieldError>, Vec<ScheduleError>) {
        (
            validate_fields(&self.title, &self.description, &self.location),
            validate_schedule(self.start_at, self.end_at),
        )
    }

    /// Converts into an Event owned by the given display name.
    ///
    /// Text fields are trimmed; identifier and timestamps are stamped here.
    pub fn into_event(self, owner: impl Into<String>) -> Event {
        let mut event = Event::new(
            self.title.trim(),
            self.description.trim(),
            self.location.trim(),
            self.start_at,
            self.end_at,
            owner,
        )
        .with_recurrence(self.recurrence);
        event.group_id = self.group_id;
        event
    }
}

/// Request payload for partially updating an event.
///
/// Only supplied fields change; everything else keeps its current value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateEventRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurrence: Option<Recurrence>,
}

impl UpdateEventRequest {
    /// Creates an empty update request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the location.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Sets the start timestamp.
    pub fn with_start_at(mut self, start_at: DateTime<Utc>) -> Self {
        self.start_at = Some(start_at);
        self
    }

    /// Sets the end timestamp.
    pub fn with_end_at(mut self, end_at: DateTime<Utc>) -> Self {
        self.end_at = Some(end_at);
        self
    }

    /// Sets the recurrence descriptor.
    pub fn with_recurrence(mut self, recurrence: Recurrence) -> Self {
        self.recurrence = Some(recurrence);
        self
    }

    /// Returns true if no field is supplied.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.location.is_none()
            && self.start_at.is_none()
            && self.end_at.is_none()
            && self.recurrence.is_none()
    }

    /// Applies the supplied fields to an existing event and refreshes its
    /// `updated_at` timestamp.
    pub fn apply_to(self, event: &mut Event) {
        if let Some(title) = self.title {
            event.title = title.trim().to_string();
        }
        if let Some(description) = self.description {
            event.description = description.trim().to_string();
        }
        if let Some(location) = self.location {
            event.location = location.trim().to_string();
        }
        if let Some(start_at) = self.start_at {
            event.start_at = start_at;
        }
        if let Some(end_at) = self.end_at {
            event.end_at = end_at;
        }
        if let Some(recurrence) = self.recurrence {
            event.recurrence = recurrence;
        }
        event.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::types::{RecurrenceRate, Weekday};
    use chrono::TimeZone;

    fn ts(h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2030, 1, 1, h, 0, 0).unwrap()
    }

    #[test]
    fn test_create_request_valid() {
        let req = CreateEventRequest::new("Meetup", "Fun", "Park", ts(10), ts(11));
        let (field_errors, schedule_errors) = req.validate();
        assert!(field_errors.is_empty());
        assert!(schedule_errors.is_empty());
    }

    #[test]
    fn test_create_request_reports_both_error_kinds() {
        let req = CreateEventRequest::new("", "Fun", "Park", ts(11), ts(10));
        let (field_errors, schedule_errors) = req.validate();
        assert_eq!(field_errors, vec![FieldError::EmptyTitle]);
        assert_eq!(schedule_errors, vec![ScheduleError::StartNotBeforeEnd]);
    }

    #[test]
    fn test_into_event_trims_and_stamps_owner() {
        let req = CreateEventRequest::new("  Meetup ", " Fun ", " Park ", ts(10), ts(11));
        let event = req.into_event("ada");

        assert_eq!(event.title, "Meetup");
        assert_eq!(event.description, "Fun");
        assert_eq!(event.location, "Park");
        assert_eq!(event.owner, "ada");
    }

    #[test]
    fn test_update_applies_only_supplied_fields() {
        let mut event = Event::new("Meetup", "Fun", "Park", ts(10), ts(11), "ada");
        let original_updated_at = event.updated_at;

        let update = UpdateEventRequest::new()
            .with_title("Picnic")
            .with_end_at(ts(12));
        update.apply_to(&mut event);

        assert_eq!(event.title, "Picnic");
        assert_eq!(event.end_at, ts(12));
        assert_eq!(event.description, "Fun");
        assert_eq!(event.location, "Park");
        assert_eq!(event.start_at, ts(10));
        assert!(event.updated_at >= original_updated_at);
    }

    #[test]
    fn test_update_recurrence() {
        let mut event = Event::new("Meetup", "Fun", "Park", ts(10), ts(11), "ada");
        let update = UpdateEventRequest::new().with_recurrence(Recurrence {
            rate: RecurrenceRate::Weekly,
            days: vec![Weekday::Friday],
        });
        update.apply_to(&mut event);

        assert_eq!(event.recurrence.rate, RecurrenceRate::Weekly);
    }

    #[test]
    fn test_update_is_empty() {
        assert!(UpdateEventRequest::new().is_empty());
        assert!(!UpdateEventRequest::new().with_title("x").is_empty());
    }

    #[test]
    fn test_update_deserializes_from_partial_json() {
        let update: UpdateEventRequest =
            serde_json::from_str(r#"{"title":"Picnic"}"#).unwrap();
        assert_eq!(update.title.as_deref(), Some("Picnic"));
        assert!(update.description.is_none());
    }
}
