//! Event API operations.

use super::EventlineClient;
use crate::error::Result;
use eventline_core::event::{CreateEventRequest, Event, UpdateEventRequest};
use serde::Deserialize;
use uuid::Uuid;

/// Response body for a group delete.
#[derive(Debug, Deserialize)]
pub struct GroupDeleteResponse {
    pub deleted: u64,
}

impl EventlineClient {
    /// List all events, sorted by start time.
    pub async fn list_events(&self) -> Result<Vec<Event>> {
        let response = self.client.get(self.url("/api/events")).send().await?;
        self.handle_response(response).await
    }

    /// Create a new event. Requires a bearer token.
    pub async fn create_event(&self, req: CreateEventRequest) -> Result<Event> {
        let request = self.client.post(self.url("/api/events")).json(&req);
        let response = self.authorized(request).send().await?;
        self.handle_response(response).await
    }

    /// Get event by ID.
    pub async fn get_event(&self, id: Uuid) -> Result<Event> {
        let response = self
            .client
            .get(self.url(&format!("/api/events/{}", id)))
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Partially update an event. Requires a bearer token.
    pub async fn update_event(&self, id: Uuid, req: UpdateEventRequest) -> Result<Event> {
        let request = self
            .client
            .patch(self.url(&format!("/api/events/{}", id)))
            .json(&req);
        let response = self.authorized(request).send().await?;
        self.handle_response(response).await
    }

    /// Delete event by ID. Requires a bearer token.
    pub async fn delete_event(&self, id: Uuid) -> Result<()> {
        let request = self.client.delete(self.url(&format!("/api/events/{}", id)));
        let response = self.authorized(request).send().await?;
        self.handle_delete_response(response).await
    }

    /// Delete every event in a recurrence group. Returns how many were
    /// removed. Requires a bearer token.
    pub async fn delete_events_by_group(&self, group_id: Uuid) -> Result<u64> {
        let request = self
            .client
            .delete(self.url(&format!("/api/events/deleteAllEvents/{}", group_id)));
        let response = self.authorized(request).send().await?;
        let body: GroupDeleteResponse = self.handle_response(response).await?;
        Ok(body.deleted)
    }
}
