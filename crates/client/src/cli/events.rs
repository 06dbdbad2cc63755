//! Event CLI commands.

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use uuid::Uuid;

use eventline_core::event::{Recurrence, RecurrenceRate as CoreRate, Weekday as CoreWeekday};

/// Event management commands.
#[derive(Debug, Parser)]
pub struct EventsCommand {
    #[command(subcommand)]
    pub action: EventsAction,
}

/// CLI recurrence rate (with clap ValueEnum).
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum RecurrenceRate {
    None,
    Daily,
    Weekly,
    Monthly,
}

impl From<RecurrenceRate> for CoreRate {
    fn from(rate: RecurrenceRate) -> Self {
        match rate {
            RecurrenceRate::None => CoreRate::None,
            RecurrenceRate::Daily => CoreRate::Daily,
            RecurrenceRate::Weekly => CoreRate::Weekly,
            RecurrenceRate::Monthly => CoreRate::Monthly,
        }
    }
}

/// CLI weekday (with clap ValueEnum).
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl From<Weekday> for CoreWeekday {
    fn from(day: Weekday) -> Self {
        match day {
            Weekday::Monday => CoreWeekday::Monday,
            Weekday::Tuesday => CoreWeekday::Tuesday,
            Weekday::Wednesday => CoreWeekday::Wednesday,
            Weekday::Thursday => CoreWeekday::Thursday,
            Weekday::Friday => CoreWeekday::Friday,
            Weekday::Saturday => CoreWeekday::Saturday,
            Weekday::Sunday => CoreWeekday::Sunday,
        }
    }
}

/// Build a core recurrence descriptor from the CLI flags.
pub fn recurrence_from_flags(rate: Option<RecurrenceRate>, days: Vec<Weekday>) -> Recurrence {
    Recurrence {
        rate: rate.map(Into::into).unwrap_or_default(),
        days: days.into_iter().map(Into::into).collect(),
    }
}

/// Available event actions.
#[derive(Debug, Subcommand)]
pub enum EventsAction {
    /// List all events.
    List,
    /// Create a new event.
    Create {
        /// Event title.
        #[arg(long)]
        title: String,
        /// Event description.
        #[arg(long)]
        description: String,
        /// Event location.
        #[arg(long)]
        location: String,
        /// Start timestamp (RFC 3339, e.g. 2026-03-01T09:00:00Z).
        #[arg(long)]
        start: DateTime<Utc>,
        /// End timestamp (RFC 3339).
        #[arg(long)]
        end: DateTime<Utc>,
        /// Recurrence group ID.
        #[arg(long)]
        group_id: Option<Uuid>,
        /// Recurrence rate.
        #[arg(long, value_enum)]
        rate: Option<RecurrenceRate>,
        /// Recurrence weekday (repeatable).
        #[arg(long = "day", value_enum)]
        days: Vec<Weekday>,
    },
    /// Get event by ID.
    Get {
        /// Event ID.
        id: Uuid,
    },
    /// Partially update an event.
    Update {
        /// Event ID.
        id: Uuid,
        /// New title.
        #[arg(long)]
        title: Option<String>,
        /// New description.
        #[arg(long)]
        description: Option<String>,
        /// New location.
        #[arg(long)]
        location: Option<String>,
        /// New start timestamp (RFC 3339).
        #[arg(long)]
        start: Option<DateTime<Utc>>,
        /// New end timestamp (RFC 3339).
        #[arg(long)]
        end: Option<DateTime<Utc>>,
    },
    /// Delete event by ID.
    Delete {
        /// Event ID.
        id: Uuid,
    },
    /// Delete every event in a recurrence group.
    DeleteGroup {
        /// Group ID.
        group_id: Uuid,
    },
}
