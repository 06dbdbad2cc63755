//! Event CRUD handlers.
//!
//! Handlers go through the `EventRepository` trait object on `AppState`, so
//! they work the same against the in-memory store and SQLite.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use eventline_core::event::{CreateEventRequest, Event, UpdateEventRequest};
use eventline_core::storage::RepositoryError;

use crate::{auth::CurrentUser, handlers::AppError, state::AppState};

/// Error response with message (for validation failures).
fn error_response(status: StatusCode, message: impl Into<String>) -> (StatusCode, String) {
    let msg = message.into();
    tracing::warn!(status = %status, message = %msg, "API error");
    (status, msg)
}

/// Collect the validation messages for a create payload into one response body.
fn validation_messages(field_errors: &[impl ToString], schedule_errors: &[impl ToString]) -> String {
    field_errors
        .iter()
        .map(ToString::to_string)
        .chain(schedule_errors.iter().map(ToString::to_string))
        .collect::<Vec<_>>()
        .join("\n")
}

// ============================================================================
// List Events
// ============================================================================

/// List all events, sorted by start time (GET /api/events).
pub async fn list_events(State(state): State<AppState>) -> Result<Json<Vec<Event>>, AppError> {
    let events = state.event_repo.list_events().await?;
    Ok(Json(events))
}

// ============================================================================
// Get Event
// ============================================================================

/// Get a single event by ID (GET /api/events/{id}).
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Event>, AppError> {
    let event = state.event_repo.get_event(id).await?;

    match event {
        Some(e) => Ok(Json(e)),
        None => Err(RepositoryError::NotFound {
            entity_type: "Event",
            id: id.to_string(),
        }
        .into()),
    }
}

// ============================================================================
// Create Event
// ============================================================================

/// Create a new event (POST /api/events).
///
/// Requires a bearer session. The session's user becomes the event owner.
pub async fn create_event(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
    payload_result: Result<Json<CreateEventRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Event>), (StatusCode, String)> {
    let Json(payload) = payload_result.map_err(|e| {
        error_response(StatusCode::BAD_REQUEST, format!("Failed to parse body: {e}"))
    })?;

    tracing::debug!(payload = ?payload, "Received create event request");

    let (field_errors, schedule_errors) = payload.validate();
    if !field_errors.is_empty() || !schedule_errors.is_empty() {
        return Err(error_response(
            StatusCode::BAD_REQUEST,
            validation_messages(&field_errors, &schedule_errors),
        ));
    }

    let event = payload.into_event(&user.display_name);

    state
        .event_repo
        .create_event(&event)
        .await
        .map_err(|e| error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    tracing::info!(event_id = %event.id, title = %event.title, owner = %event.owner, "Created event");

    Ok((StatusCode::CREATED, Json(event)))
}

// ============================================================================
// Update Event
// ============================================================================

/// Partially update an event by ID (PATCH /api/events/{id}).
///
/// Only the fields present in the payload change. The merged event is
/// re-validated before it is persisted, so an update can never push a stored
/// event into an invalid state.
pub async fn update_event(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    payload_result: Result<Json<UpdateEventRequest>, JsonRejection>,
) -> Result<Json<Event>, (StatusCode, String)> {
    let Json(payload) = payload_result.map_err(|e| {
        error_response(StatusCode::BAD_REQUEST, format!("Failed to parse body: {e}"))
    })?;

    tracing::debug!(event_id = %id, payload = ?payload, "Received update event request");

    let mut event = state
        .event_repo
        .get_event(id)
        .await
        .map_err(|e| error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?
        .ok_or_else(|| error_response(StatusCode::NOT_FOUND, format!("Event {id} not found")))?;

    payload.apply_to(&mut event);

    let field_errors =
        eventline_core::event::validate_fields(&event.title, &event.description, &event.location);
    let schedule_errors = eventline_core::event::validate_schedule(event.start_at, event.end_at);
    if !field_errors.is_empty() || !schedule_errors.is_empty() {
        return Err(error_response(
            StatusCode::BAD_REQUEST,
            validation_messages(&field_errors, &schedule_errors),
        ));
    }

    state
        .event_repo
        .update_event(&event)
        .await
        .map_err(|e| error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    tracing::info!(event_id = %id, user = %user.display_name, "Updated event");

    Ok(Json(event))
}

// ============================================================================
// Delete Event
// ============================================================================

/// Delete an event by ID (DELETE /api/events/{id}).
pub async fn delete_event(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    tracing::debug!(event_id = %id, "Received delete event request");

    state.event_repo.delete_event(id).await?;

    tracing::info!(event_id = %id, user = %user.display_name, "Deleted event");

    Ok(StatusCode::OK)
}

// ============================================================================
// Delete Group
// ============================================================================

/// Delete every event belonging to a recurrence group
/// (DELETE /api/events/deleteAllEvents/{group_id}).
pub async fn delete_events_by_group(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
    Path(group_id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    tracing::debug!(group_id = %group_id, "Received delete group request");

    let deleted = state.event_repo.delete_events_by_group(group_id).await?;

    tracing::info!(
        group_id = %group_id,
        deleted = %deleted,
        user = %user.display_name,
        "Deleted event group"
    );

    Ok(Json(serde_json::json!({ "deleted": deleted })))
}
