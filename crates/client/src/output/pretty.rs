//! Pretty output formatting.

use eventline_core::event::Event;

/// Format an event for display.
pub fn format_event(event: &Event) -> String {
    let mut output = format!(
        "{}\n  ID: {}\n  When: {} .. {}\n  Location: {}\n  Owner: {}",
        event.title, event.id, event.start_at, event.end_at, event.location, event.owner
    );
    if !event.description.is_empty() {
        output.push_str(&format!("\n  Description: {}", event.description));
    }
    if let Some(group_id) = event.group_id {
        output.push_str(&format!("\n  Group: {}", group_id));
    }
    if !event.recurrence.is_none() {
        output.push_str(&format!(
            "\n  Recurrence: {:?} on {:?}",
            event.recurrence.rate, event.recurrence.days
        ));
    }
    output
}

/// Format events for display.
pub fn format_events(events: &[Event]) -> String {
    if events.is_empty() {
        return "No events found.".to_string();
    }
    let mut output = format!("EVENTS ({})\n", events.len());
    output.push_str(&"-".repeat(40));
    for event in events {
        output.push_str(&format!("\n{}", format_event(event)));
        output.push('\n');
    }
    output
}
