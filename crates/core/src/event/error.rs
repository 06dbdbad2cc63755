use thiserror::Error;

/// Validation failures for the text fields of an event form.
///
/// The `Display` output is the user-facing message rendered inline in the
/// form.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("Title field can't be empty")]
    EmptyTitle,
    #[error("Description must be less than 280 characters. Current character count: {count}.")]
    DescriptionTooLong { count: usize },
    #[error("Description field can't be empty")]
    EmptyDescription,
    #[error("Location field can't be empty")]
    EmptyLocation,
}

/// Validation failures for the start/end time relationship, tracked
/// separately from field-presence errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("Start date must be before end date")]
    StartNotBeforeEnd,
    #[error("Start date or time is not valid")]
    InvalidStart,
    #[error("End date or time is not valid")]
    InvalidEnd,
}
