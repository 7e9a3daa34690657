use super::EventService;
use crate::models::event::CalendarEvent;
use chrono::{DateTime, Local, NaiveDate};

/// Events starting on `day` (local calendar date), in list order.
pub fn events_on_day(events: &[CalendarEvent], day: NaiveDate) -> Vec<&CalendarEvent> {
    events.iter().filter(|event| event.starts_on(day)).collect()
}

/// Events starting on `day` whose start hour equals `hour`. Feeds the week hour grid.
pub fn events_on_day_at_hour(
    events: &[CalendarEvent],
    day: NaiveDate,
    hour: u32,
) -> Vec<&CalendarEvent> {
    events
        .iter()
        .filter(|event| event.starts_on(day) && event.start_hour() == hour)
        .collect()
}

/// Events whose start date lies in `first..=last`, in list order.
pub fn events_in_range(
    events: &[CalendarEvent],
    first: NaiveDate,
    last: NaiveDate,
) -> Vec<&CalendarEvent> {
    events
        .iter()
        .filter(|event| {
            let day = event.start.date_naive();
            first <= day && day <= last
        })
        .collect()
}

/// Events whose time range overlaps `start..end`, skipping `exclude_id`.
pub fn overlapping<'a>(
    events: &'a [CalendarEvent],
    start: DateTime<Local>,
    end: DateTime<Local>,
    exclude_id: Option<&str>,
) -> Vec<&'a CalendarEvent> {
    events
        .iter()
        .filter(|event| exclude_id != Some(event.id.as_str()))
        .filter(|event| event.overlaps(start, end))
        .collect()
}

impl EventService {
    pub fn on_day(&self, day: NaiveDate) -> Vec<&CalendarEvent> {
        events_on_day(&self.events, day)
    }

    pub fn on_day_at_hour(&self, day: NaiveDate, hour: u32) -> Vec<&CalendarEvent> {
        events_on_day_at_hour(&self.events, day, hour)
    }

    pub fn find_by_date_range(&self, first: NaiveDate, last: NaiveDate) -> Vec<&CalendarEvent> {
        events_in_range(&self.events, first, last)
    }

    pub fn overlapping(
        &self,
        start: DateTime<Local>,
        end: DateTime<Local>,
        exclude_id: Option<&str>,
    ) -> Vec<&CalendarEvent> {
        overlapping(&self.events, start, end, exclude_id)
    }

    /// Case-insensitive search over title and description.
    pub fn search(&self, query: &str) -> Vec<&CalendarEvent> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return vec![];
        }

        self.events
            .iter()
            .filter(|event| {
                event.title.to_lowercase().contains(&query)
                    || event.description.to_lowercase().contains(&query)
            })
            .collect()
    }
}
