//! Shared application state.
//!
//! Cloned for each request handler; storage is reached through a repository
//! trait object so backends can be swapped at compile time via features.

use std::sync::Arc;

use eventline_core::storage::EventRepository;

use crate::auth::SessionStore;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Event repository for the selected storage backend.
    pub event_repo: Arc<dyn EventRepository>,
    /// Bearer-token session store backing the auth extractor.
    pub sessions: SessionStore,
}

impl AppState {
    /// Creates state over the given repository.
    pub fn new(event_repo: Arc<dyn EventRepository>) -> Self {
        Self {
            event_repo,
            sessions: SessionStore::new(),
        }
    }

    /// Creates state backed by the in-memory repository.
    #[cfg(feature = "inmemory")]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(crate::storage::InMemoryRepository::new()))
    }

    /// Creates state backed by a SQLite database at the given path.
    #[cfg(feature = "sqlite")]
    pub async fn sqlite(path: &str) -> eventline_core::storage::Result<Self> {
        let repo = crate::storage::SqliteRepository::new(path).await?;
        Ok(Self::new(Arc::new(repo)))
    }
}

#[cfg(feature = "inmemory")]
impl Default for AppState {
    fn default() -> Self {
        Self::in_memory()
    }
}
