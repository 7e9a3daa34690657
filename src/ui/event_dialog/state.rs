use std::fmt;

use chrono::{DateTime, Duration, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use thiserror::Error;

use crate::models::event::{CalendarEvent, EventDraft};
use crate::models::settings::Settings;
use crate::services::event::overlapping;
use crate::utils::date::{combine_in, format_hour_minute, parse_hour_minute};

/// Which time field of the form a validation error refers to
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TimeField {
    Start,
    End,
}

impl fmt::Display for TimeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeField::Start => f.write_str("Start"),
            TimeField::End => f.write_str("End"),
        }
    }
}

/// Reasons a form cannot be turned into a draft
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("Event title is required")]
    MissingTitle,
    #[error("{0} time is required")]
    MissingTime(TimeField),
    #[error("{field} time \"{value}\" is not a valid HH:MM time")]
    InvalidTime { field: TimeField, value: String },
    #[error("{time} does not exist on {date} in local time")]
    NonexistentLocalTime { date: NaiveDate, time: NaiveTime },
}

/// State for the event editing form
///
/// Times are kept as the raw `HH:MM` text the user typed; they are only
/// parsed when the form is validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDialogState {
    /// Event being edited (None for a new event)
    pub event_id: Option<String>,
    pub title: String,
    pub description: String,
    /// Day both start and end are placed on
    pub date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    pub color: String,
}

impl EventDialogState {
    pub fn new_event(date: NaiveDate, settings: &Settings) -> Self {
        Self::new_event_with_time(date, None, settings)
    }

    /// Form opened from an hour cell of the week grid.
    pub fn new_event_at_hour(date: NaiveDate, hour: u32, settings: &Settings) -> Option<Self> {
        let start_time = NaiveTime::from_hms_opt(hour, 0, 0)?;
        Some(Self::new_event_with_time(date, Some(start_time), settings))
    }

    pub fn new_event_with_time(
        date: NaiveDate,
        start_time_opt: Option<NaiveTime>,
        settings: &Settings,
    ) -> Self {
        let start_time = start_time_opt.unwrap_or_else(|| {
            parse_hour_minute(&settings.default_event_start_time)
                .or_else(|| NaiveTime::from_hms_opt(9, 0, 0))
                .unwrap_or(NaiveTime::MIN)
        });

        // Events stay on one day, so a default that runs past midnight stops at 23:59
        let end_time = NaiveDateTime::new(date, start_time)
            .checked_add_signed(Duration::minutes(i64::from(settings.default_event_duration)))
            .filter(|end| end.date() == date)
            .map(|end| end.time())
            .or_else(|| NaiveTime::from_hms_opt(23, 59, 0))
            .unwrap_or(start_time);

        Self {
            event_id: None,
            title: String::new(),
            description: String::new(),
            date,
            start_time: format_hour_minute(start_time),
            end_time: format_hour_minute(end_time),
            color: settings.default_color.clone(),
        }
    }

    pub fn from_event(event: &CalendarEvent) -> Self {
        Self {
            event_id: Some(event.id.clone()),
            title: event.title.clone(),
            description: event.description.clone(),
            date: event.start.date_naive(),
            start_time: format_hour_minute(event.start.time()),
            end_time: format_hour_minute(event.end.time()),
            color: event.color.clone(),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.event_id.is_some()
    }

    /// Pick one of the palette swatches by position. Returns false when out of range.
    pub fn select_palette_color(&mut self, index: usize, settings: &Settings) -> bool {
        match settings.palette.get(index) {
            Some(color) => {
                self.color = color.clone();
                true
            }
            None => false,
        }
    }

    pub fn is_palette_color(&self, settings: &Settings) -> bool {
        settings
            .palette
            .iter()
            .any(|color| color.eq_ignore_ascii_case(&self.color))
    }

    fn parse_time(field: TimeField, value: &str) -> Result<NaiveTime, DraftError> {
        if value.trim().is_empty() {
            return Err(DraftError::MissingTime(field));
        }

        parse_hour_minute(value).ok_or_else(|| DraftError::InvalidTime {
            field,
            value: value.to_string(),
        })
    }

    fn start_end_datetimes(&self) -> Result<(DateTime<Local>, DateTime<Local>), DraftError> {
        self.start_end_in(&Local)
    }

    fn start_end_in<Tz: TimeZone>(&self, tz: &Tz) -> Result<(DateTime<Tz>, DateTime<Tz>), DraftError> {
        let start_time = Self::parse_time(TimeField::Start, &self.start_time)?;
        let end_time = Self::parse_time(TimeField::End, &self.end_time)?;

        // The end reuses the start's date: an event cannot run past midnight.
        let start = combine_in(tz, self.date, start_time).ok_or(DraftError::NonexistentLocalTime {
            date: self.date,
            time: start_time,
        })?;
        let end = combine_in(tz, self.date, end_time).ok_or(DraftError::NonexistentLocalTime {
            date: self.date,
            time: end_time,
        })?;

        Ok((start, end))
    }

    pub fn validate(&self) -> Result<(), DraftError> {
        if self.title.trim().is_empty() {
            return Err(DraftError::MissingTitle);
        }

        self.start_end_datetimes().map(|_| ())
    }

    pub fn to_draft(&self) -> Result<EventDraft, DraftError> {
        self.validate()?;
        let (start, end) = self.start_end_datetimes()?;

        Ok(EventDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            start,
            end,
            color: self.color.clone(),
        })
    }

    /// Non-blocking warnings shown next to the form; saving is still allowed.
    pub fn check_warnings(&self, events: &[CalendarEvent]) -> Vec<String> {
        let mut warnings = Vec::new();

        let Ok((start, end)) = self.start_end_datetimes() else {
            return warnings;
        };

        if end < start {
            warnings.push("Event ends before it starts (events cannot run past midnight)".to_string());
        } else if end == start {
            warnings.push("Event starts and ends at the same time".to_string());
        }

        let others = overlapping(events, start, end, self.event_id.as_deref());
        match others.len() {
            0 => {}
            1 => warnings.push(format!("Overlaps with \"{}\"", others[0].title)),
            n => warnings.push(format!("Overlaps with {} other events", n)),
        }

        warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Offset, TimeZone};
    use chrono_tz::America::New_York;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn filled(title: &str, start: &str, end: &str) -> EventDialogState {
        let mut state = EventDialogState::new_event(date(2024, 3, 15), &Settings::default());
        state.title = title.to_string();
        state.start_time = start.to_string();
        state.end_time = end.to_string();
        state
    }

    fn stored(id: &str, title: &str, start: (u32, u32), end: (u32, u32)) -> CalendarEvent {
        CalendarEvent {
            id: id.to_string(),
            title: title.to_string(),
            description: String::new(),
            start: Local.with_ymd_and_hms(2024, 3, 15, start.0, start.1, 0).unwrap(),
            end: Local.with_ymd_and_hms(2024, 3, 15, end.0, end.1, 0).unwrap(),
            color: "#3b82f6".to_string(),
        }
    }

    #[test]
    fn test_start_in_dst_gap_is_rejected() {
        let mut state = filled("Early flight", "02:30", "04:00");
        state.date = date(2024, 3, 10);

        let err = state.start_end_in(&New_York).unwrap_err();
        assert_eq!(
            err,
            DraftError::NonexistentLocalTime {
                date: date(2024, 3, 10),
                time: NaiveTime::from_hms_opt(2, 30, 0).unwrap(),
            }
        );
    }

    #[test]
    fn test_end_in_dst_gap_is_rejected() {
        let mut state = filled("Late night", "01:00", "02:15");
        state.date = date(2024, 3, 10);

        assert!(matches!(
            state.start_end_in(&New_York),
            Err(DraftError::NonexistentLocalTime { .. })
        ));
    }

    #[test]
    fn test_ambiguous_time_resolves_to_earlier() {
        let mut state = filled("Fall back", "01:30", "01:45");
        state.date = date(2024, 11, 3);

        let (start, end) = state.start_end_in(&New_York).unwrap();
        // First pass through 01:30 is still daylight time (UTC-4)
        assert_eq!(start.offset().fix().local_minus_utc(), -4 * 3600);
        assert_eq!(end - start, Duration::minutes(15));
    }

    #[test]
    fn test_new_event_defaults() {
        let state = EventDialogState::new_event(date(2024, 3, 15), &Settings::default());
        assert_eq!(state.event_id, None);
        assert_eq!(state.start_time, "09:00");
        assert_eq!(state.end_time, "10:00");
        assert_eq!(state.color, "#3b82f6");
        assert!(!state.is_editing());
    }

    #[test]
    fn test_new_event_at_hour() {
        let state =
            EventDialogState::new_event_at_hour(date(2024, 3, 15), 14, &Settings::default()).unwrap();
        assert_eq!(state.start_time, "14:00");
        assert_eq!(state.end_time, "15:00");
        assert!(EventDialogState::new_event_at_hour(date(2024, 3, 15), 24, &Settings::default()).is_none());
    }

    #[test]
    fn test_default_end_clamped_before_midnight() {
        let state =
            EventDialogState::new_event_at_hour(date(2024, 3, 15), 23, &Settings::default()).unwrap();
        assert_eq!(state.start_time, "23:00");
        assert_eq!(state.end_time, "23:59");
    }

    #[test]
    fn test_custom_defaults_from_settings() {
        let settings = Settings {
            default_event_start_time: "08:30".to_string(),
            default_event_duration: 45,
            default_color: "#10b981".to_string(),
            ..Settings::default()
        };
        let state = EventDialogState::new_event(date(2024, 3, 15), &settings);
        assert_eq!(state.start_time, "08:30");
        assert_eq!(state.end_time, "09:15");
        assert_eq!(state.color, "#10b981");
    }

    #[test]
    fn test_standup_draft() {
        let draft = filled("Standup", "09:00", "09:30").to_draft().unwrap();
        assert_eq!(draft.start, Local.with_ymd_and_hms(2024, 3, 15, 9, 0, 0).unwrap());
        assert_eq!(draft.end, Local.with_ymd_and_hms(2024, 3, 15, 9, 30, 0).unwrap());
        assert_eq!(draft.title, "Standup");
    }

    #[test]
    fn test_end_uses_start_date() {
        // 23:00 to 01:00 stays on the same day rather than rolling over
        let draft = filled("Late shift", "23:00", "01:00").to_draft().unwrap();
        assert_eq!(draft.end.date_naive(), date(2024, 3, 15));
        assert!(draft.end < draft.start);
    }

    #[test]
    fn test_missing_title() {
        let err = filled("  ", "09:00", "10:00").validate().unwrap_err();
        assert_eq!(err, DraftError::MissingTitle);
        assert_eq!(err.to_string(), "Event title is required");
    }

    #[test]
    fn test_missing_times() {
        assert_eq!(
            filled("Standup", "", "10:00").validate().unwrap_err(),
            DraftError::MissingTime(TimeField::Start)
        );
        assert_eq!(
            filled("Standup", "09:00", " ").validate().unwrap_err(),
            DraftError::MissingTime(TimeField::End)
        );
    }

    #[test]
    fn test_invalid_time() {
        let err = filled("Standup", "9am", "10:00").validate().unwrap_err();
        assert_eq!(
            err,
            DraftError::InvalidTime {
                field: TimeField::Start,
                value: "9am".to_string()
            }
        );
        assert_eq!(err.to_string(), "Start time \"9am\" is not a valid HH:MM time");
    }

    #[test]
    fn test_from_event_round_trip() {
        let event = stored("abc", "Standup", (9, 0), (9, 30));
        let state = EventDialogState::from_event(&event);

        assert_eq!(state.event_id.as_deref(), Some("abc"));
        assert_eq!(state.date, date(2024, 3, 15));
        assert_eq!(state.start_time, "09:00");
        assert_eq!(state.end_time, "09:30");
        assert_eq!(state.to_draft().unwrap(), event.to_draft());
    }

    #[test]
    fn test_palette_selection() {
        let settings = Settings::default();
        let mut state = EventDialogState::new_event(date(2024, 3, 15), &settings);

        assert!(state.select_palette_color(1, &settings));
        assert_eq!(state.color, "#ef4444");
        assert!(state.is_palette_color(&settings));

        assert!(!state.select_palette_color(5, &settings));
        assert_eq!(state.color, "#ef4444");

        state.title = "Party".to_string();
        state.color = "rebeccapurple".to_string();
        assert!(!state.is_palette_color(&settings));
        assert_eq!(state.to_draft().unwrap().color, "rebeccapurple");
    }

    #[test]
    fn test_warning_for_reversed_range() {
        let warnings = filled("Backwards", "10:00", "09:00").check_warnings(&[]);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("ends before it starts"));
    }

    #[test]
    fn test_warning_for_single_overlap() {
        let events = vec![stored("a", "Standup", (9, 0), (9, 30))];
        let warnings = filled("Pairing", "09:15", "10:00").check_warnings(&events);
        assert_eq!(warnings, vec!["Overlaps with \"Standup\"".to_string()]);
    }

    #[test]
    fn test_warning_for_many_overlaps() {
        let events = vec![
            stored("a", "Standup", (9, 0), (9, 30)),
            stored("b", "Coffee", (9, 20), (9, 40)),
        ];
        let warnings = filled("Pairing", "09:00", "10:00").check_warnings(&events);
        assert_eq!(warnings, vec!["Overlaps with 2 other events".to_string()]);
    }

    #[test]
    fn test_editing_does_not_overlap_itself() {
        let events = vec![stored("a", "Standup", (9, 0), (9, 30))];
        let state = EventDialogState::from_event(&events[0]);
        assert!(state.check_warnings(&events).is_empty());
    }

    #[test]
    fn test_no_warnings_for_invalid_form() {
        assert!(filled("Standup", "nope", "10:00").check_warnings(&[]).is_empty());
    }
}
