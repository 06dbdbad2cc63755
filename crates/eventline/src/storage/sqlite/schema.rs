//! SQLite schema definitions and SQL query constants.

/// SQL statement to create all tables.
pub const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS events (
    id TEXT PRIMARY KEY,
    group_id TEXT,
    title TEXT NOT NULL,
    description TEXT NOT NULL,
    location TEXT NOT NULL,
    owner TEXT NOT NULL,
    start_at TEXT NOT NULL,
    end_at TEXT NOT NULL,
    recurrence TEXT NOT NULL,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_events_group_id ON events(group_id);
CREATE INDEX IF NOT EXISTS idx_events_start_at ON events(start_at);
"#;

pub const INSERT_EVENT: &str = r#"
INSERT INTO events (id, group_id, title, description, location, owner,
                    start_at, end_at, recurrence, created_at, updated_at)
VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)
"#;

pub const SELECT_EVENT_BY_ID: &str = r#"
SELECT id, group_id, title, description, location, owner,
       start_at, end_at, recurrence, created_at, updated_at
FROM events WHERE id = ?1
"#;

pub const SELECT_ALL_EVENTS: &str = r#"
SELECT id, group_id, title, description, location, owner,
       start_at, end_at, recurrence, created_at, updated_at
FROM events
ORDER BY start_at, title
"#;

pub const UPDATE_EVENT: &str = r#"
UPDATE events
SET group_id = ?2, title = ?3, description = ?4, location = ?5, owner = ?6,
    start_at = ?7, end_at = ?8, recurrence = ?9, updated_at = ?10
WHERE id = ?1
"#;

pub const DELETE_EVENT: &str = "DELETE FROM events WHERE id = ?1";

pub const DELETE_EVENTS_BY_GROUP: &str = "DELETE FROM events WHERE group_id = ?1";
