mod error;
mod operations;
mod requests;
mod types;
mod validation;

pub use error::{FieldError, ScheduleError};
pub use operations::{
    patch_event, remove_event, remove_group, sort_events_chronologically,
};
pub use requests::{CreateEventRequest, UpdateEventRequest};
pub use types::{Event, Recurrence, RecurrenceRate, User, Weekday, DESCRIPTION_MAX_CHARS};
pub use validation::{validate_fields, validate_schedule};
