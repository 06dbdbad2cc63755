//! Pure validation rules for event submissions.
//!
//! Both functions evaluate every rule independently rather than
//! short-circuiting, so a single pass reports all applicable errors in a
//! fixed order. Callers treat an empty list as pass.

use chrono::{DateTime, Utc};

use super::error::{FieldError, ScheduleError};
use super::types::DESCRIPTION_MAX_CHARS;

/// Validates the text fields of an event, returning every violated rule in
/// order: empty title, description over the limit (with the actual character
/// count), empty description, empty location.
pub fn validate_fields(title: &str, description: &str, location: &str) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if title.is_empty() {
        errors.push(FieldError::EmptyTitle);
    }

    let count = description.chars().count();
    if count > DESCRIPTION_MAX_CHARS {
        errors.push(FieldError::DescriptionTooLong { count });
    }

    if description.is_empty() {
        errors.push(FieldError::EmptyDescription);
    }

    if location.is_empty() {
        errors.push(FieldError::EmptyLocation);
    }

    errors
}

/// Validates the start/end relationship of a schedule.
///
/// The start must be strictly before the end; equal timestamps are rejected.
pub fn validate_schedule(start_at: DateTime<Utc>, end_at: DateTime<Utc>) -> Vec<ScheduleError> {
    let mut errors = Vec::new();

    if start_at >= end_at {
        errors.push(ScheduleError::StartNotBeforeEnd);
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ts(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2030, 1, 1, h, m, 0).unwrap()
    }

    #[test]
    fn test_valid_fields_pass() {
        assert!(validate_fields("Meetup", "Fun", "Park").is_empty());
    }

    #[test]
    fn test_empty_title() {
        let errors = validate_fields("", "Fun", "Park");
        assert_eq!(errors, vec![FieldError::EmptyTitle]);
    }

    #[test]
    fn test_empty_description() {
        let errors = validate_fields("Meetup", "", "Park");
        assert_eq!(errors, vec![FieldError::EmptyDescription]);
    }

    #[test]
    fn test_empty_location() {
        let errors = validate_fields("Meetup", "Fun", "");
        assert_eq!(errors, vec![FieldError::EmptyLocation]);
    }

    #[test]
    fn test_all_fields_empty_reports_all_in_order() {
        let errors = validate_fields("", "", "");
        assert_eq!(
            errors,
            vec![
                FieldError::EmptyTitle,
                FieldError::EmptyDescription,
                FieldError::EmptyLocation,
            ]
        );
    }

    #[test]
    fn test_description_at_limit_passes() {
        let description = "x".repeat(280);
        assert!(validate_fields("Meetup", &description, "Park").is_empty());
    }

    #[test]
    fn test_description_over_limit_embeds_count() {
        let description = "x".repeat(281);
        let errors = validate_fields("Meetup", &description, "Park");
        assert_eq!(errors, vec![FieldError::DescriptionTooLong { count: 281 }]);
        assert!(errors[0].to_string().contains("281"));
    }

    #[test]
    fn test_description_counts_characters_not_bytes() {
        // 281 two-byte characters is over the limit by character count.
        let description = "é".repeat(281);
        let errors = validate_fields("Meetup", &description, "Park");
        assert_eq!(errors, vec![FieldError::DescriptionTooLong { count: 281 }]);
    }

    #[test]
    fn test_schedule_start_before_end_passes() {
        assert!(validate_schedule(ts(10, 0), ts(11, 0)).is_empty());
    }

    #[test]
    fn test_schedule_start_after_end_rejected() {
        let errors = validate_schedule(ts(10, 0), ts(9, 0));
        assert_eq!(errors, vec![ScheduleError::StartNotBeforeEnd]);
    }

    #[test]
    fn test_schedule_equal_timestamps_rejected() {
        let errors = validate_schedule(ts(10, 0), ts(10, 0));
        assert_eq!(errors, vec![ScheduleError::StartNotBeforeEnd]);
    }
}
