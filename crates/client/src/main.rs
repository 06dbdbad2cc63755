//! eventline-client CLI entry point.

use clap::Parser;

use eventline_client::cli::{Cli, Commands, OutputFormat};
use eventline_client::client::EventlineClient;
use eventline_client::output::{format_output, pretty};
use eventline_core::event::{CreateEventRequest, UpdateEventRequest};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut client = EventlineClient::new(&cli.base_url);
    if let Some(token) = &cli.token {
        client = client.with_token(token);
    }

    match cli.command {
        Commands::Events(events_cmd) => {
            use eventline_client::cli::events::{recurrence_from_flags, EventsAction};
            match events_cmd.action {
                EventsAction::List => {
                    let events = client.list_events().await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&events, cli.format)),
                        OutputFormat::Pretty => println!("{}", pretty::format_events(&events)),
                    }
                }
                EventsAction::Create {
                    title,
                    description,
                    location,
                    start,
                    end,
                    group_id,
                    rate,
                    days,
                } => {
                    let mut req = CreateEventRequest::new(title, description, location, start, end)
                        .with_recurrence(recurrence_from_flags(rate, days));
                    if let Some(group_id) = group_id {
                        req = req.with_group_id(group_id);
                    }
                    let event = client.create_event(req).await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&event, cli.format)),
                        OutputFormat::Pretty => {
                            println!("Created:\n{}", pretty::format_event(&event))
                        }
                    }
                }
                EventsAction::Get { id } => {
                    let event = client.get_event(id).await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&event, cli.format)),
                        OutputFormat::Pretty => println!("{}", pretty::format_event(&event)),
                    }
                }
                EventsAction::Update {
                    id,
                    title,
                    description,
                    location,
                    start,
                    end,
                } => {
                    let mut req = UpdateEventRequest::new();
                    if let Some(title) = title {
                        req = req.with_title(title);
                    }
                    if let Some(description) = description {
                        req = req.with_description(description);
                    }
                    if let Some(location) = location {
                        req = req.with_location(location);
                    }
                    if let Some(start) = start {
                        req = req.with_start_at(start);
                    }
                    if let Some(end) = end {
                        req = req.with_end_at(end);
                    }
                    let event = client.update_event(id, req).await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&event, cli.format)),
                        OutputFormat::Pretty => {
                            println!("Updated:\n{}", pretty::format_event(&event))
                        }
                    }
                }
                EventsAction::Delete { id } => {
                    client.delete_event(id).await?;
                    if !cli.quiet {
                        println!("Deleted event {}", id);
                    }
                }
                EventsAction::DeleteGroup { group_id } => {
                    let deleted = client.delete_events_by_group(group_id).await?;
                    if !cli.quiet {
                        println!("Deleted {} events from group {}", deleted, group_id);
                    }
                }
            }
        }
        Commands::Health(health_cmd) => {
            use eventline_client::cli::health::HealthAction;
            match health_cmd.action {
                HealthAction::Check => {
                    let status = client.health().await?;
                    println!("Server status: {}", status);
                }
            }
        }
    }

    Ok(())
}
