//! SQLite row conversion functions.
//!
//! Pure functions for converting between SQLite rows and domain types,
//! testable in isolation without database access.

use chrono::{DateTime, Utc};
use rusqlite::Row;
use uuid::Uuid;

use eventline_core::event::{Event, Recurrence};
use eventline_core::storage::RepositoryError;

/// Format a timestamp for storage (RFC 3339, lexicographically sortable).
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339()
}

/// Serialize a recurrence descriptor to JSON for storage.
pub fn recurrence_to_json(recurrence: &Recurrence) -> Result<String, RepositoryError> {
    serde_json::to_string(recurrence).map_err(|e| RepositoryError::Serialization(e.to_string()))
}

fn parse_datetime(value: &str, column: usize) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(
                column,
                rusqlite::types::Type::Text,
                Box::new(e),
            )
        })
}

fn parse_uuid(value: &str, column: usize) -> rusqlite::Result<Uuid> {
    Uuid::parse_str(value).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(column, rusqlite::types::Type::Text, Box::new(e))
    })
}

/// Convert a SQLite row to an Event.
///
/// Expected columns: id, group_id, title, description, location, owner,
/// start_at, end_at, recurrence, created_at, updated_at
pub fn row_to_event(row: &Row) -> rusqlite::Result<Event> {
    let id: String = row.get(0)?;
    let group_id: Option<String> = row.get(1)?;
    let title: String = row.get(2)?;
    let description: String = row.get(3)?;
    let location: String = row.get(4)?;
    let owner: String = row.get(5)?;
    let start_at: String = row.get(6)?;
    let end_at: String = row.get(7)?;
    let recurrence: String = row.get(8)?;
    let created_at: String = row.get(9)?;
    let updated_at: String = row.get(10)?;

    let group_id = match group_id {
        Some(value) => Some(parse_uuid(&value, 1)?),
        None => None,
    };

    let recurrence: Recurrence = serde_json::from_str(&recurrence).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(8, rusqlite::types::Type::Text, Box::new(e))
    })?;

    Ok(Event {
        id: parse_uuid(&id, 0)?,
        group_id,
        title,
        description,
        location,
        owner,
        start_at: parse_datetime(&start_at, 6)?,
        end_at: parse_datetime(&end_at, 7)?,
        recurrence,
        created_at: parse_datetime(&created_at, 9)?,
        updated_at: parse_datetime(&updated_at, 10)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use eventline_core::event::{RecurrenceRate, Weekday};

    #[test]
    fn test_datetime_round_trip() {
        let dt = Utc.with_ymd_and_hms(2030, 1, 1, 10, 30, 0).unwrap();
        let stored = format_datetime(&dt);
        let parsed = parse_datetime(&stored, 0).unwrap();
        assert_eq!(parsed, dt);
    }

    #[test]
    fn test_recurrence_json_round_trip() {
        let recurrence = Recurrence {
            rate: RecurrenceRate::Weekly,
            days: vec![Weekday::Monday, Weekday::Friday],
        };
        let json = recurrence_to_json(&recurrence).unwrap();
        let parsed: Recurrence = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, recurrence);
    }
}
