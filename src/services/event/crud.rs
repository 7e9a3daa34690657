use super::EventService;
use crate::models::event::{CalendarEvent, EventDraft};
use uuid::Uuid;

impl EventService {
    /// Append a new event under a freshly generated identifier.
    pub fn create(&mut self, draft: EventDraft) -> &CalendarEvent {
        let id = self.fresh_id();
        log::info!("Creating event {} ({})", id, draft.title);

        self.events.push(CalendarEvent::from_draft(id, draft));
        &self.events[self.events.len() - 1]
    }

    /// Retrieve an event by ID.
    pub fn get(&self, id: &str) -> Option<&CalendarEvent> {
        self.events.iter().find(|event| event.id == id)
    }

    /// Replace the fields of an existing event in place, keeping its ID and position.
    ///
    /// Returns `None` when no event has the given ID.
    pub fn update(&mut self, id: &str, draft: EventDraft) -> Option<&CalendarEvent> {
        let event = self.events.iter_mut().find(|event| event.id == id)?;
        log::info!("Updating event {} ({})", id, draft.title);

        event.apply(draft);
        Some(&*event)
    }

    /// Update the event matching `editing_id`, or create a new one when it is
    /// absent or unknown. Returns the identifier of the saved event.
    pub fn save(&mut self, draft: EventDraft, editing_id: Option<&str>) -> String {
        if let Some(id) = editing_id {
            if self.get(id).is_some() {
                self.update(id, draft);
                return id.to_string();
            }
            log::warn!("Event {} not found, saving as a new event", id);
        }

        self.create(draft).id.clone()
    }

    /// Delete an event by ID, returning it. Unknown IDs are a no-op.
    pub fn delete(&mut self, id: &str) -> Option<CalendarEvent> {
        let index = self.events.iter().position(|event| event.id == id);
        match index {
            Some(index) => {
                log::info!("Deleting event {}", id);
                Some(self.events.remove(index))
            }
            None => {
                log::debug!("Delete ignored, no event {}", id);
                None
            }
        }
    }

    fn fresh_id(&self) -> String {
        loop {
            let id = Uuid::new_v4().to_string();
            if self.get(&id).is_none() {
                return id;
            }
        }
    }
}

/// Save a draft into `existing`, returning the new list.
///
/// With a matching `editing_id` the record is replaced in place; otherwise
/// the draft is appended under a new identifier.
pub fn save_event(
    existing: Vec<CalendarEvent>,
    draft: EventDraft,
    editing_id: Option<&str>,
) -> Vec<CalendarEvent> {
    let mut service = EventService::from_events(existing);
    service.save(draft, editing_id);
    service.into_events()
}

/// Remove the event with `event_id`; the list is returned unchanged when nothing matches.
pub fn delete_event(existing: Vec<CalendarEvent>, event_id: &str) -> Vec<CalendarEvent> {
    let mut service = EventService::from_events(existing);
    service.delete(event_id);
    service.into_events()
}
