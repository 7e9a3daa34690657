//! Calendar event service entry point.
//! Owns the in-memory event list; mutations live in `crud`, cell lookups in `queries`.

use crate::models::event::CalendarEvent;

pub mod crud;
pub mod queries;

pub use crud::{delete_event, save_event};
pub use queries::{events_in_range, events_on_day, events_on_day_at_hour, overlapping};

/// Service for managing calendar events held in memory.
///
/// The list is the sole store; insertion order is display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventService {
    pub(crate) events: Vec<CalendarEvent>,
}

impl EventService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_events(events: Vec<CalendarEvent>) -> Self {
        Self { events }
    }

    pub fn list_all(&self) -> &[CalendarEvent] {
        &self.events
    }

    pub fn into_events(self) -> Vec<CalendarEvent> {
        self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::event::EventDraft;
    use chrono::{Duration, Local, TimeZone};

    fn sample_draft(title: &str) -> EventDraft {
        let start = Local.with_ymd_and_hms(2024, 3, 15, 9, 0, 0).unwrap();
        EventDraft::builder()
            .title(title)
            .start(start)
            .end(start + Duration::hours(1))
            .build()
            .unwrap()
    }

    #[test]
    fn test_new_service_is_empty() {
        let service = EventService::new();
        assert!(service.is_empty());
        assert_eq!(service.len(), 0);
    }

    #[test]
    fn test_list_all_preserves_insertion_order() {
        let mut service = EventService::new();
        service.create(sample_draft("First"));
        service.create(sample_draft("Second"));
        service.create(sample_draft("Third"));

        let titles: Vec<&str> = service.list_all().iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_from_events_round_trip() {
        let mut service = EventService::new();
        service.create(sample_draft("Only"));
        let events = service.clone().into_events();

        assert_eq!(EventService::from_events(events), service);
    }
}
