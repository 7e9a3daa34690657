// Event module
// Calendar event record and the draft it is built from

use chrono::{DateTime, Local, NaiveDate, Timelike};
use serde::{Deserialize, Serialize};

use crate::utils::date::falls_on;

/// Color used when the form is opened without an explicit choice.
pub const DEFAULT_EVENT_COLOR: &str = "#3b82f6";

/// Swatches offered by the event form. Any other color string is accepted too.
pub const EVENT_PALETTE: [&str; 5] = ["#3b82f6", "#ef4444", "#10b981", "#f59e0b", "#8b5cf6"];

/// A timed calendar event held in memory.
///
/// `end >= start` is expected but not enforced; the event form reports a
/// reversed range as a warning rather than refusing to save it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,
    pub description: String,
    pub start: DateTime<Local>,
    pub end: DateTime<Local>,
    pub color: String,
}

impl CalendarEvent {
    /// Create a stored event from a draft under the given identifier.
    pub fn from_draft(id: impl Into<String>, draft: EventDraft) -> Self {
        Self {
            id: id.into(),
            title: draft.title,
            description: draft.description,
            start: draft.start,
            end: draft.end,
            color: draft.color,
        }
    }

    /// Replace every field with the draft's, keeping the identifier.
    pub fn apply(&mut self, draft: EventDraft) {
        self.title = draft.title;
        self.description = draft.description;
        self.start = draft.start;
        self.end = draft.end;
        self.color = draft.color;
    }

    /// The editable part of this event.
    pub fn to_draft(&self) -> EventDraft {
        EventDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            start: self.start,
            end: self.end,
            color: self.color.clone(),
        }
    }

    pub fn starts_on(&self, day: NaiveDate) -> bool {
        falls_on(&self.start, day)
    }

    pub fn start_hour(&self) -> u32 {
        self.start.hour()
    }

    /// Get the duration of the event (negative when end precedes start)
    pub fn duration(&self) -> chrono::Duration {
        self.end - self.start
    }

    /// Time-range overlap; touching ranges do not overlap.
    pub fn overlaps(&self, start: DateTime<Local>, end: DateTime<Local>) -> bool {
        self.start < end && self.end > start
    }
}

/// Event fields as submitted by the form, before an identifier is assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDraft {
    pub title: String,
    pub description: String,
    pub start: DateTime<Local>,
    pub end: DateTime<Local>,
    pub color: String,
}

impl EventDraft {
    /// Create a builder for constructing drafts with optional fields
    pub fn builder() -> EventDraftBuilder {
        EventDraftBuilder::new()
    }
}

/// Builder for drafts; description and color have defaults.
#[derive(Debug, Default)]
pub struct EventDraftBuilder {
    title: Option<String>,
    description: Option<String>,
    start: Option<DateTime<Local>>,
    end: Option<DateTime<Local>>,
    color: Option<String>,
}

impl EventDraftBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn start(mut self, start: DateTime<Local>) -> Self {
        self.start = Some(start);
        self
    }

    pub fn end(mut self, end: DateTime<Local>) -> Self {
        self.end = Some(end);
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Build the draft
    ///
    /// Only presence of title, start and end is checked; the title must
    /// not be blank.
    pub fn build(self) -> Result<EventDraft, String> {
        let title = self.title.ok_or("Event title is required")?;
        let start = self.start.ok_or("Event start time is required")?;
        let end = self.end.ok_or("Event end time is required")?;

        if title.trim().is_empty() {
            return Err("Event title cannot be empty".to_string());
        }

        Ok(EventDraft {
            title,
            description: self.description.unwrap_or_default(),
            start,
            end,
            color: self
                .color
                .unwrap_or_else(|| DEFAULT_EVENT_COLOR.to_string()),
        })
    }
}
