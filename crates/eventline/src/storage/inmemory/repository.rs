//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use eventline_core::event::{sort_events_chronologically, Event};
use eventline_core::storage::{EventRepository, RepositoryError, Result};

/// In-memory storage backend.
///
/// Uses a HashMap wrapped in `Arc<RwLock<_>>` for thread-safe access.
/// Data is not persisted and will be lost when the repository is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    events: Arc<RwLock<HashMap<Uuid, Event>>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EventRepository for InMemoryRepository {
    async fn get_event(&self, id: Uuid) -> Result<Option<Event>> {
        let events = self.events.read().await;
        Ok(events.get(&id).cloned())
    }

    async fn list_events(&self) -> Result<Vec<Event>> {
        let events = self.events.read().await;
        let mut events: Vec<Event> = events.values().cloned().collect();
        sort_events_chronologically(&mut events);
        Ok(events)
    }

    async fn create_event(&self, event: &Event) -> Result<()> {
        let mut events = self.events.write().await;
        if events.contains_key(&event.id) {
            return Err(RepositoryError::AlreadyExists {
                entity_type: "Event",
                id: event.id.to_string(),
            });
        }
        events.insert(event.id, event.clone());
        Ok(())
    }

    async fn update_event(&self, event: &Event) -> Result<()> {
        let mut events = self.events.write().await;
        if !events.contains_key(&event.id) {
            return Err(RepositoryError::NotFound {
                entity_type: "Event",
                id: event.id.to_string(),
            });
        }
        events.insert(event.id, event.clone());
        Ok(())
    }

    async fn delete_event(&self, id: Uuid) -> Result<()> {
        let mut events = self.events.write().await;
        if events.remove(&id).is_none() {
            return Err(RepositoryError::NotFound {
                entity_type: "Event",
                id: id.to_string(),
            });
        }
        Ok(())
    }

    async fn delete_events_by_group(&self, group_id: Uuid) -> Result<u64> {
        let mut events = self.events.write().await;
        let before = events.len();
        events.retain(|_, e| e.group_id != Some(group_id));
        Ok((before - events.len()) as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn sample_event(title: &str) -> Event {
        Event::new(
            title,
            "Fun",
            "Park",
            Utc.with_ymd_and_hms(2030, 1, 1, 10, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2030, 1, 1, 11, 0, 0).unwrap(),
            "ada",
        )
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let repo = InMemoryRepository::new();
        let event = sample_event("Meetup");

        repo.create_event(&event).await.unwrap();
        let fetched = repo.get_event(event.id).await.unwrap();
        assert_eq!(fetched, Some(event));
    }

    #[tokio::test]
    async fn test_create_duplicate_fails() {
        let repo = InMemoryRepository::new();
        let event = sample_event("Meetup");

        repo.create_event(&event).await.unwrap();
        let err = repo.create_event(&event).await.unwrap_err();
        assert!(matches!(err, RepositoryError::AlreadyExists { .. }));
    }

    #[tokio::test]
    async fn test_update_missing_fails() {
        let repo = InMemoryRepository::new();
        let event = sample_event("Meetup");

        let err = repo.update_event(&event).await.unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_update_replaces() {
        let repo = InMemoryRepository::new();
        let mut event = sample_event("Meetup");
        repo.create_event(&event).await.unwrap();

        event.title = "Picnic".to_string();
        repo.update_event(&event).await.unwrap();

        let fetched = repo.get_event(event.id).await.unwrap().unwrap();
        assert_eq!(fetched.title, "Picnic");
    }

    #[tokio::test]
    async fn test_list_is_sorted() {
        let repo = InMemoryRepository::new();

        let mut later = sample_event("Later");
        later.start_at = Utc.with_ymd_and_hms(2030, 2, 1, 10, 0, 0).unwrap();
        later.end_at = Utc.with_ymd_and_hms(2030, 2, 1, 11, 0, 0).unwrap();

        repo.create_event(&later).await.unwrap();
        repo.create_event(&sample_event("Earlier")).await.unwrap();

        let events = repo.list_events().await.unwrap();
        assert_eq!(events[0].title, "Earlier");
        assert_eq!(events[1].title, "Later");
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = InMemoryRepository::new();
        let event = sample_event("Meetup");
        repo.create_event(&event).await.unwrap();

        repo.delete_event(event.id).await.unwrap();
        assert!(repo.get_event(event.id).await.unwrap().is_none());

        let err = repo.delete_event(event.id).await.unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete_by_group() {
        let repo = InMemoryRepository::new();
        let group = Uuid::new_v4();

        repo.create_event(&sample_event("A").with_group_id(group))
            .await
            .unwrap();
        repo.create_event(&sample_event("B").with_group_id(group))
            .await
            .unwrap();
        repo.create_event(&sample_event("C")).await.unwrap();

        let deleted = repo.delete_events_by_group(group).await.unwrap();
        assert_eq!(deleted, 2);
        assert_eq!(repo.list_events().await.unwrap().len(), 1);

        // Deleting an empty group is not an error.
        assert_eq!(repo.delete_events_by_group(group).await.unwrap(), 0);
    }
}
