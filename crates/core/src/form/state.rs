use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use uuid::Uuid;

use crate::event::{
    validate_fields, validate_schedule, CreateEventRequest, Event, FieldError, Recurrence,
    ScheduleError, UpdateEventRequest,
};

/// Date format used by calendar input widgets.
const DATE_FORMAT: &str = "%Y-%m-%d";
/// Time format used by time input widgets (minute granularity).
const TIME_FORMAT: &str = "%H:%M";

/// A form field, used to merge changes into the form state by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Description,
    Location,
    StartDate,
    StartTime,
    EndDate,
    EndTime,
}

/// In-progress field values for an open form.
///
/// Date and time fields hold the raw widget strings; timestamps are derived
/// only at submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormData {
    pub title: String,
    pub description: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub start_time: String,
    pub end_time: String,
    pub recurrence: Recurrence,
}

impl Default for FormData {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            location: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            start_time: "00:00".to_string(),
            end_time: "00:00".to_string(),
            recurrence: Recurrence::default(),
        }
    }
}

/// Where the form is in its lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormPhase {
    /// No form open.
    Closed,
    /// Fields are being edited; a rejected submit attempt stays here.
    Editing,
    /// A validated draft has been handed to the submission workflow.
    Submitting,
    /// The remote request was rejected; field values are retained for retry.
    Failed { message: String },
}

/// A validated, submission-ready snapshot of the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDraft {
    pub title: String,
    pub description: String,
    pub location: String,
    pub start_at: DateTime<Utc>,
    pub end_at: DateTime<Utc>,
    pub recurrence: Recurrence,
}

impl EventDraft {
    /// Converts the draft into a creation payload.
    pub fn into_create_request(self) -> CreateEventRequest {
        CreateEventRequest::new(
            self.title,
            self.description,
            self.location,
            self.start_at,
            self.end_at,
        )
        .with_recurrence(self.recurrence)
    }

    /// Converts the draft into a full-field update payload.
    pub fn into_update_request(self) -> UpdateEventRequest {
        UpdateEventRequest::new()
            .with_title(self.title)
            .with_description(self.description)
            .with_location(self.location)
            .with_start_at(self.start_at)
            .with_end_at(self.end_at)
            .with_recurrence(self.recurrence)
    }
}

/// Transient state for an open create/edit form.
///
/// Holds the field values, the two independent error lists, and the current
/// phase. `close()` resets everything and must be invoked by the modal owner
/// whenever the modal closes, however that close was triggered.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub data: FormData,
    /// Field-presence and length errors from the last submit attempt.
    pub field_errors: Vec<FieldError>,
    /// Start/end relationship errors from the last submit attempt.
    pub schedule_errors: Vec<ScheduleError>,
    phase: FormPhase,
    target: Option<Uuid>,
}

impl Default for FormPhase {
    fn default() -> Self {
        FormPhase::Closed
    }
}

impl FormState {
    /// Creates a closed form.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current lifecycle phase.
    pub fn phase(&self) -> &FormPhase {
        &self.phase
    }

    /// The event being edited, if the form was opened over an existing one.
    pub fn target(&self) -> Option<Uuid> {
        self.target
    }

    /// Returns true if either error list is non-empty.
    pub fn has_errors(&self) -> bool {
        !self.field_errors.is_empty() || !self.schedule_errors.is_empty()
    }

    /// Opens a blank creation form.
    pub fn open_blank(&mut self) {
        self.reset();
        self.phase = FormPhase::Editing;
    }

    /// Opens the form prefilled from an existing event.
    ///
    /// Timestamps are reformatted down to the granularity of the date and
    /// time input widgets.
    pub fn open_with(&mut self, event: &Event) {
        self.reset();
        self.data = FormData {
            title: event.title.clone(),
            description: event.description.clone(),
            location: event.location.clone(),
            start_date: event.start_at.format(DATE_FORMAT).to_string(),
            end_date: event.end_at.format(DATE_FORMAT).to_string(),
            start_time: event.start_at.format(TIME_FORMAT).to_string(),
            end_time: event.end_at.format(TIME_FORMAT).to_string(),
            recurrence: event.recurrence.clone(),
        };
        self.target = Some(event.id);
        self.phase = FormPhase::Editing;
    }

    /// Merges a single field change into the form state.
    ///
    /// A change while in the failed phase returns the form to editing.
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Title => self.data.title = value,
            FormField::Description => self.data.description = value,
            FormField::Location => self.data.location = value,
            FormField::StartDate => self.data.start_date = value,
            FormField::StartTime => self.data.start_time = value,
            FormField::EndDate => self.data.end_date = value,
            FormField::EndTime => self.data.end_time = value,
        }
        if matches!(self.phase, FormPhase::Failed { .. }) {
            self.phase = FormPhase::Editing;
        }
    }

    /// Attempts to submit the form.
    ///
    /// Runs field validation, derives UTC timestamps from the date+time
    /// string pairs, then runs schedule validation. On any failure the
    /// corresponding error list is populated and the form stays in editing;
    /// on success the phase moves to submitting and a draft is returned for
    /// the workflow to send.
    pub fn try_submit(&mut self) -> Option<EventDraft> {
        if matches!(self.phase, FormPhase::Closed) {
            return None;
        }
        self.phase = FormPhase::Editing;

        self.field_errors =
            validate_fields(&self.data.title, &self.data.description, &self.data.location);
        if !self.field_errors.is_empty() {
            return None;
        }

        let mut parse_errors = Vec::new();
        let start_at = match parse_timestamp(&self.data.start_date, &self.data.start_time) {
            Some(ts) => Some(ts),
            None => {
                parse_errors.push(ScheduleError::InvalidStart);
                None
            }
        };
        let end_at = match parse_timestamp(&self.data.end_date, &self.data.end_time) {
            Some(ts) => Some(ts),
            None => {
                parse_errors.push(ScheduleError::InvalidEnd);
                None
            }
        };
        let (Some(start_at), Some(end_at)) = (start_at, end_at) else {
            self.schedule_errors = parse_errors;
            return None;
        };

        self.schedule_errors = validate_schedule(start_at, end_at);
        if !self.schedule_errors.is_empty() {
            return None;
        }

        self.phase = FormPhase::Submitting;
        Some(EventDraft {
            title: self.data.title.trim().to_string(),
            description: self.data.description.trim().to_string(),
            location: self.data.location.trim().to_string(),
            start_at,
            end_at,
            recurrence: self.data.recurrence.clone(),
        })
    }

    /// Marks the in-flight submission as applied: resets every field and
    /// both error lists, and closes the form.
    pub fn settle(&mut self) {
        self.reset();
    }

    /// Marks the in-flight submission as rejected by the server or network.
    ///
    /// Field values are retained so the user can retry.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.phase = FormPhase::Failed {
            message: message.into(),
        };
    }

    /// Closes the form from any phase, clearing all field values and both
    /// error lists.
    pub fn close(&mut self) {
        self.reset();
    }

    fn reset(&mut self) {
        self.data = FormData::default();
        self.field_errors.clear();
        self.schedule_errors.clear();
        self.target = None;
        self.phase = FormPhase::Closed;
    }
}

/// Derives a UTC timestamp from a date string and a time string as entered
/// in the form widgets. Returns None if either does not parse.
fn parse_timestamp(date: &str, time: &str) -> Option<DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(date, DATE_FORMAT).ok()?;
    let time = NaiveTime::parse_from_str(time, TIME_FORMAT).ok()?;
    Some(date.and_time(time).and_utc())
}
