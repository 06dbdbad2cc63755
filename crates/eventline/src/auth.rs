//! Bearer-token sessions and the authentication extractor.
//!
//! Identity provider integration is out of scope; sessions are issued
//! out-of-band (seeded from configuration, or inserted directly in tests)
//! and presented as `Authorization: Bearer <token>` headers.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, StatusCode},
};
use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use eventline_core::event::User;

use crate::state::AppState;

/// An authenticated session keyed by an opaque bearer token.
#[derive(Debug, Clone)]
pub struct Session {
    pub token: String,
    pub user: User,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    /// Creates a session with the given token and lifetime.
    pub fn new(token: impl Into<String>, user: User, ttl: Duration) -> Self {
        let now = Utc::now();
        Self {
            token: token.into(),
            user,
            created_at: now,
            expires_at: now + ttl,
        }
    }
}

/// Returns true if the session has expired at the given instant.
pub fn is_session_expired(session: &Session, now: DateTime<Utc>) -> bool {
    session.expires_at <= now
}

/// In-memory session store.
///
/// Sessions are not persisted and are lost when the store is dropped.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<String, Session>>>,
}

impl SessionStore {
    /// Creates a new empty session store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a session, replacing any existing session with the same token.
    pub async fn insert(&self, session: Session) {
        let mut sessions = self.sessions.write().await;
        sessions.insert(session.token.clone(), session);
    }

    /// Issues a fresh session for the user and returns its token.
    pub async fn issue(&self, user: User, ttl: Duration) -> String {
        let token = Uuid::new_v4().to_string();
        self.insert(Session::new(token.clone(), user, ttl)).await;
        token
    }

    /// Looks up a session by token.
    pub async fn get(&self, token: &str) -> Option<Session> {
        let sessions = self.sessions.read().await;
        sessions.get(token).cloned()
    }

    /// Removes a session by token.
    pub async fn revoke(&self, token: &str) {
        let mut sessions = self.sessions.write().await;
        sessions.remove(token);
    }
}

/// Extractor for the authenticated user. Returns 401 if not authenticated.
pub struct CurrentUser(pub User);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .ok_or((StatusCode::UNAUTHORIZED, "Missing authorization header"))?;

        let header_value = auth_header
            .to_str()
            .map_err(|_| (StatusCode::UNAUTHORIZED, "Invalid authorization header"))?;

        let token = header_value
            .strip_prefix("Bearer ")
            .ok_or((StatusCode::UNAUTHORIZED, "Expected a bearer token"))?;

        let session = state
            .sessions
            .get(token)
            .await
            .ok_or((StatusCode::UNAUTHORIZED, "Session not found"))?;

        if is_session_expired(&session, Utc::now()) {
            state.sessions.revoke(token).await;
            return Err((StatusCode::UNAUTHORIZED, "Session expired"));
        }

        Ok(CurrentUser(session.user))
    }
}
