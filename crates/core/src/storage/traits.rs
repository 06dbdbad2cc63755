use async_trait::async_trait;
use uuid::Uuid;

use crate::event::Event;

use super::Result;

/// Repository for event operations.
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Gets an event by its ID.
    async fn get_event(&self, id: Uuid) -> Result<Option<Event>>;

    /// Gets all events.
    async fn list_events(&self) -> Result<Vec<Event>>;

    /// Creates a new event.
    async fn create_event(&self, event: &Event) -> Result<()>;

    /// Updates an existing event.
    async fn update_event(&self, event: &Event) -> Result<()>;

    /// Deletes an event by its ID.
    async fn delete_event(&self, id: Uuid) -> Result<()>;

    /// Deletes every event in a group. Returns the number deleted.
    async fn delete_events_by_group(&self, group_id: Uuid) -> Result<u64>;
}
