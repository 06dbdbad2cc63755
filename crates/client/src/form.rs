//! Submission workflow for the event form.
//!
//! Drives a `FormState` through a create or edit submission against the API
//! and folds the accepted event back into a local event list. The form only
//! closes once the server has accepted the event; a rejected request moves
//! the form to the failed phase with its field values intact.

use eventline_core::event::{patch_event, sort_events_chronologically, Event};
use eventline_core::form::FormState;

use crate::client::EventlineClient;

/// What happened to a submit attempt.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// The server accepted the event; the local list has been updated and
    /// the form is closed.
    Applied(Event),
    /// Local validation rejected the form; its error lists are populated
    /// and it stays open for correction.
    RejectedInvalid,
    /// The server or network rejected the request; the form keeps its field
    /// values so the user can retry.
    Failed(String),
    /// The form was not open.
    NotOpen,
}

/// Submits the open form.
///
/// A form opened over an existing event produces a partial update against
/// that event; a blank form produces a creation. On acceptance the returned
/// event replaces its predecessor in `events` (or is appended) and the list
/// is re-sorted.
pub async fn submit_form(
    client: &EventlineClient,
    form: &mut FormState,
    events: &mut Vec<Event>,
) -> SubmitOutcome {
    let target = form.target();
    let Some(draft) = form.try_submit() else {
        if form.has_errors() {
            return SubmitOutcome::RejectedInvalid;
        }
        return SubmitOutcome::NotOpen;
    };

    let result = match target {
        Some(id) => client.update_event(id, draft.into_update_request()).await,
        None => client.create_event(draft.into_create_request()).await,
    };

    match result {
        Ok(event) => {
            if !patch_event(events, &event) {
                events.push(event.clone());
            }
            sort_events_chronologically(events);
            form.settle();
            SubmitOutcome::Applied(event)
        }
        Err(err) => {
            let message = err.to_string();
            form.fail(message.clone());
            SubmitOutcome::Failed(message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::{
        extract::Path,
        http::StatusCode,
        routing::{patch, post},
        Json, Router,
    };
    use chrono::TimeZone;
    use chrono::Utc;
    use uuid::Uuid;

    use eventline_core::event::{CreateEventRequest, UpdateEventRequest};
    use eventline_core::form::{FormField, FormPhase};

    async fn spawn_server(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }

    /// Server that accepts creates and updates, echoing the payload back as
    /// a stored event.
    fn accepting_server() -> Router {
        async fn create(Json(req): Json<CreateEventRequest>) -> (StatusCode, Json<Event>) {
            (StatusCode::CREATED, Json(req.into_event("ada")))
        }
        async fn update(
            Path(id): Path<Uuid>,
            Json(req): Json<UpdateEventRequest>,
        ) -> Json<Event> {
            let mut event = Event::new(
                "old title",
                "old description",
                "old location",
                Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap(),
                Utc.with_ymd_and_hms(2030, 1, 1, 1, 0, 0).unwrap(),
                "ada",
            )
            .with_id(id);
            req.apply_to(&mut event);
            Json(event)
        }
        Router::new()
            .route("/api/events", post(create))
            .route("/api/events/{id}", patch(update))
    }

    /// Server that rejects every create with a validation message.
    fn rejecting_server() -> Router {
        async fn create() -> (StatusCode, String) {
            (
                StatusCode::BAD_REQUEST,
                "Start date must be before end date".to_string(),
            )
        }
        Router::new().route("/api/events", post(create))
    }

    fn filled_form() -> FormState {
        let mut form = FormState::new();
        form.open_blank();
        form.set_field(FormField::Title, "Meetup");
        form.set_field(FormField::Description, "Fun");
        form.set_field(FormField::Location, "Park");
        form.set_field(FormField::StartDate, "2030-01-01");
        form.set_field(FormField::StartTime, "10:00");
        form.set_field(FormField::EndDate, "2030-01-01");
        form.set_field(FormField::EndTime, "11:00");
        form
    }

    #[tokio::test]
    async fn test_create_applies_and_closes_form() {
        let client = EventlineClient::new(spawn_server(accepting_server()).await);
        let mut form = filled_form();
        let mut events = Vec::new();

        let outcome = submit_form(&client, &mut form, &mut events).await;

        let SubmitOutcome::Applied(event) = outcome else {
            panic!("expected Applied, got {outcome:?}");
        };
        assert_eq!(event.title, "Meetup");
        assert_eq!(event.owner, "ada");
        assert_eq!(events.len(), 1);
        assert_eq!(*form.phase(), FormPhase::Closed);
    }

    #[tokio::test]
    async fn test_invalid_form_never_hits_the_server() {
        // No server at all: local validation must reject first.
        let client = EventlineClient::new("http://127.0.0.1:1");
        let mut form = FormState::new();
        form.open_blank();
        let mut events = Vec::new();

        let outcome = submit_form(&client, &mut form, &mut events).await;

        assert!(matches!(outcome, SubmitOutcome::RejectedInvalid));
        assert!(form.has_errors());
        assert_eq!(*form.phase(), FormPhase::Editing);
        assert!(events.is_empty());
    }

    #[tokio::test]
    async fn test_closed_form_is_noop() {
        let client = EventlineClient::new("http://127.0.0.1:1");
        let mut form = FormState::new();
        let mut events = Vec::new();

        let outcome = submit_form(&client, &mut form, &mut events).await;

        assert!(matches!(outcome, SubmitOutcome::NotOpen));
    }

    #[tokio::test]
    async fn test_server_rejection_keeps_form_data() {
        let client = EventlineClient::new(spawn_server(rejecting_server()).await);
        let mut form = filled_form();
        let mut events = Vec::new();

        let outcome = submit_form(&client, &mut form, &mut events).await;

        let SubmitOutcome::Failed(message) = outcome else {
            panic!("expected Failed, got {outcome:?}");
        };
        assert!(message.contains("Start date must be before end date"));
        assert!(matches!(form.phase(), FormPhase::Failed { .. }));
        assert_eq!(form.data.title, "Meetup");
        assert!(events.is_empty());
    }

    #[tokio::test]
    async fn test_edit_replaces_event_in_list() {
        let client = EventlineClient::new(spawn_server(accepting_server()).await);

        let existing = Event::new(
            "Meetup",
            "Fun",
            "Park",
            Utc.with_ymd_and_hms(2030, 1, 1, 10, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2030, 1, 1, 11, 0, 0).unwrap(),
            "ada",
        );
        let mut events = vec![existing.clone()];

        let mut form = FormState::new();
        form.open_with(&existing);
        form.set_field(FormField::Title, "Meetup v2");

        let outcome = submit_form(&client, &mut form, &mut events).await;

        let SubmitOutcome::Applied(event) = outcome else {
            panic!("expected Applied, got {outcome:?}");
        };
        assert_eq!(event.id, existing.id);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].title, "Meetup v2");
        assert_eq!(*form.phase(), FormPhase::Closed);
    }
}
