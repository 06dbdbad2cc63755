use std::env;

use chrono::Duration;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to SQLite database file (default: "eventline.db")
    /// Note: Only used when the `sqlite` feature is enabled.
    #[allow(dead_code)]
    pub sqlite_path: String,
    /// Optional bearer token seeded as a development session.
    pub dev_token: Option<String>,
    /// Display name for the seeded development session (default: "dev")
    pub dev_user: String,
    /// Session lifetime in hours (default: 24)
    pub session_ttl_hours: i64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `SQLITE_PATH` - SQLite database path (default: "eventline.db")
    /// - `EVENTLINE_DEV_TOKEN` - bearer token seeded at startup (default: unset)
    /// - `EVENTLINE_DEV_USER` - display name for the seeded session (default: "dev")
    /// - `SESSION_TTL_HOURS` - session lifetime in hours (default: 24)
    pub fn from_env() -> Self {
        Self {
            sqlite_path: env::var("SQLITE_PATH").unwrap_or_else(|_| "eventline.db".to_string()),
            dev_token: env::var("EVENTLINE_DEV_TOKEN").ok(),
            dev_user: env::var("EVENTLINE_DEV_USER").unwrap_or_else(|_| "dev".to_string()),
            session_ttl_hours: env::var("SESSION_TTL_HOURS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(24),
        }
    }

    /// Get the session lifetime as a Duration.
    pub fn session_ttl(&self) -> Duration {
        Duration::hours(self.session_ttl_hours)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
