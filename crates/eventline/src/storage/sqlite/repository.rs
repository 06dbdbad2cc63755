//! SQLite repository implementation.

use async_trait::async_trait;
use tokio_rusqlite::Connection;
use uuid::Uuid;

use eventline_core::event::Event;
use eventline_core::storage::{EventRepository, RepositoryError, Result};

use super::conversions::{format_datetime, recurrence_to_json, row_to_event};
use super::error::map_tokio_rusqlite_error;
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-based event repository.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Creates a new repository with a file-based database.
    ///
    /// The database file will be created if it doesn't exist.
    /// Schema tables are created automatically.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Creates a new repository with an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES)
                .map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }
}

#[async_trait]
impl EventRepository for SqliteRepository {
    async fn get_event(&self, id: Uuid) -> Result<Option<Event>> {
        let id_str = id.to_string();

        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(schema::SELECT_EVENT_BY_ID).map_err(wrap_err)?;
                match stmt.query_row([&id_str], row_to_event) {
                    Ok(event) => Ok(Some(event)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Event", id.to_string()))
    }

    async fn list_events(&self) -> Result<Vec<Event>> {
        self.conn
            .call(|conn| {
                let mut stmt = conn.prepare(schema::SELECT_ALL_EVENTS).map_err(wrap_err)?;
                let rows = stmt.query_map([], row_to_event).map_err(wrap_err)?;

                let mut events = Vec::new();
                for row_result in rows {
                    events.push(row_result.map_err(wrap_err)?);
                }
                Ok(events)
            })
            .await
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }

    async fn create_event(&self, event: &Event) -> Result<()> {
        let id = event.id.to_string();
        let group_id = event.group_id.map(|g| g.to_string());
        let title = event.title.clone();
        let description = event.description.clone();
        let location = event.location.clone();
        let owner = event.owner.clone();
        let start_at = format_datetime(&event.start_at);
        let end_at = format_datetime(&event.end_at);
        let recurrence = recurrence_to_json(&event.recurrence)?;
        let created_at = format_datetime(&event.created_at);
        let updated_at = format_datetime(&event.updated_at);
        let event_id = event.id.to_string();

        self.conn
            .call(move |conn| {
                conn.execute(
                    schema::INSERT_EVENT,
                    rusqlite::params![
                        id,
                        group_id,
                        title,
                        description,
                        location,
                        owner,
                        start_at,
                        end_at,
                        recurrence,
                        created_at,
                        updated_at,
                    ],
                )
                .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Event", event_id))
    }

    async fn update_event(&self, event: &Event) -> Result<()> {
        let id = event.id.to_string();
        let group_id = event.group_id.map(|g| g.to_string());
        let title = event.title.clone();
        let description = event.description.clone();
        let location = event.location.clone();
        let owner = event.owner.clone();
        let start_at = format_datetime(&event.start_at);
        let end_at = format_datetime(&event.end_at);
        let recurrence = recurrence_to_json(&event.recurrence)?;
        let updated_at = format_datetime(&event.updated_at);
        let event_id = event.id.to_string();

        let rows = self
            .conn
            .call(move |conn| {
                conn.execute(
                    schema::UPDATE_EVENT,
                    rusqlite::params![
                        id,
                        group_id,
                        title,
                        description,
                        location,
                        owner,
                        start_at,
                        end_at,
                        recurrence,
                        updated_at,
                    ],
                )
                .map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Event", event_id.clone()))?;

        if rows == 0 {
            return Err(RepositoryError::NotFound {
                entity_type: "Event",
                id: event_id,
            });
        }
        Ok(())
    }

    async fn delete_event(&self, id: Uuid) -> Result<()> {
        let id_str = id.to_string();

        let rows = self
            .conn
            .call(move |conn| {
                conn.execute(schema::DELETE_EVENT, [&id_str])
                    .map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Event", id.to_string()))?;

        if rows == 0 {
            return Err(RepositoryError::NotFound {
                entity_type: "Event",
                id: id.to_string(),
            });
        }
        Ok(())
    }

    async fn delete_events_by_group(&self, group_id: Uuid) -> Result<u64> {
        let group_str = group_id.to_string();

        let rows = self
            .conn
            .call(move |conn| {
                conn.execute(schema::DELETE_EVENTS_BY_GROUP, [&group_str])
                    .map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Event", group_id.to_string()))?;

        Ok(rows as u64)
    }
}
