//! Pure operations on a locally held event list.
//!
//! The client keeps the event list in memory and patches it in place after
//! each successful mutation, rather than re-fetching from the server.

use uuid::Uuid;

use super::types::Event;

/// Replaces the entry matching `updated.id` with `updated`.
///
/// Returns true if a matching entry was found. The list never gains a
/// duplicate: every entry with the ID is replaced, none appended.
pub fn patch_event(events: &mut [Event], updated: &Event) -> bool {
    let mut patched = false;
    for event in events.iter_mut() {
        if event.id == updated.id {
            *event = updated.clone();
            patched = true;
        }
    }
    patched
}

/// Removes the event with the given ID. Returns true if one was removed.
pub fn remove_event(events: &mut Vec<Event>, id: Uuid) -> bool {
    let before = events.len();
    events.retain(|e| e.id != id);
    events.len() < before
}

/// Removes every event belonging to the given group. Returns the number
/// removed.
pub fn remove_group(events: &mut Vec<Event>, group_id: Uuid) -> usize {
    let before = events.len();
    events.retain(|e| e.group_id != Some(group_id));
    before - events.len()
}

/// Sorts events by start time, breaking ties by title.
pub fn sort_events_chronologically(events: &mut [Event]) {
    events.sort_by(|a, b| {
        a.start_at
            .cmp(&b.start_at)
            .then_with(|| a.title.cmp(&b.title))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};

    fn ts(h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2030, 1, 1, h, 0, 0).unwrap()
    }

    fn event(title: &str, start_hour: u32) -> Event {
        Event::new(title, "Fun", "Park", ts(start_hour), ts(start_hour + 1), "ada")
    }

    #[test]
    fn test_patch_event_replaces_exactly_one() {
        let mut events = vec![event("A", 9), event("B", 10), event("C", 11)];
        let mut updated = events[1].clone();
        updated.title = "B2".to_string();

        assert!(patch_event(&mut events, &updated));
        assert_eq!(events.len(), 3);
        assert_eq!(events[1].title, "B2");
        assert_eq!(events.iter().filter(|e| e.id == updated.id).count(), 1);
    }

    #[test]
    fn test_patch_event_unknown_id_is_noop() {
        let mut events = vec![event("A", 9)];
        let other = event("X", 12);

        assert!(!patch_event(&mut events, &other));
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].title, "A");
    }

    #[test]
    fn test_remove_event() {
        let mut events = vec![event("A", 9), event("B", 10)];
        let id = events[0].id;

        assert!(remove_event(&mut events, id));
        assert_eq!(events.len(), 1);
        assert!(!remove_event(&mut events, id));
    }

    #[test]
    fn test_remove_group() {
        let group = Uuid::new_v4();
        let mut events = vec![
            event("A", 9).with_group_id(group),
            event("B", 10),
            event("C", 11).with_group_id(group),
        ];

        assert_eq!(remove_group(&mut events, group), 2);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].title, "B");
    }

    #[test]
    fn test_sort_events_chronologically() {
        let mut events = vec![event("B", 11), event("A", 9), event("C", 9)];
        sort_events_chronologically(&mut events);

        let titles: Vec<&str> = events.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "C", "B"]);
    }
}
