//! CLI command definitions.

pub mod events;
pub mod health;

use clap::{Parser, Subcommand, ValueEnum};

/// CLI client for the eventline API.
#[derive(Debug, Parser)]
#[command(name = "eventline-client")]
#[command(about = "CLI client for the eventline API", long_about = None)]
pub struct Cli {
    /// Server base URL.
    #[arg(long, env = "EVENTLINE_URL", default_value = "http://localhost:3000")]
    pub base_url: String,

    /// Bearer token for authenticated endpoints.
    #[arg(long, env = "EVENTLINE_TOKEN")]
    pub token: Option<String>,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Event management.
    Events(events::EventsCommand),
    /// Server health check.
    Health(health::HealthCommand),
}
