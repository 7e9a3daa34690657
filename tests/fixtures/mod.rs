// Test fixtures - reusable test data
// Provides consistent test data across all test files

#![allow(dead_code)]

use calendar_widget::models::event::{CalendarEvent, EventDraft};
use chrono::{DateTime, Local, NaiveDate, TimeZone};

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Friday, March 15, 2024
    pub fn mar_15_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    /// Feb 29, 2024 (leap year)
    pub fn leap_day_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
    }

    /// Dec 31, 2025 (New Year's Eve)
    pub fn new_years_eve_2025() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 12, 31).unwrap()
    }

    /// Local instant on `date` at `hour:minute`
    pub fn at(date: NaiveDate, hour: u32, minute: u32) -> DateTime<Local> {
        let naive = date.and_hms_opt(hour, minute, 0).unwrap();
        Local.from_local_datetime(&naive).earliest().unwrap()
    }
}

/// Sample events for testing
pub mod events {
    use super::*;

    pub fn draft(title: &str, date: NaiveDate, start_hour: u32, end_hour: u32) -> EventDraft {
        EventDraft::builder()
            .title(title)
            .start(dates::at(date, start_hour, 0))
            .end(dates::at(date, end_hour, 0))
            .build()
            .unwrap()
    }

    /// 09:00-09:30 standup on March 15, 2024
    pub fn standup() -> CalendarEvent {
        CalendarEvent {
            id: "evt-standup".to_string(),
            title: "Standup".to_string(),
            description: "Daily sync".to_string(),
            start: dates::at(dates::mar_15_2024(), 9, 0),
            end: dates::at(dates::mar_15_2024(), 9, 30),
            color: "#3b82f6".to_string(),
        }
    }

    /// 14:00-15:00 review on March 15, 2024
    pub fn review() -> CalendarEvent {
        CalendarEvent {
            id: "evt-review".to_string(),
            title: "Design review".to_string(),
            description: String::new(),
            start: dates::at(dates::mar_15_2024(), 14, 0),
            end: dates::at(dates::mar_15_2024(), 15, 0),
            color: "#ef4444".to_string(),
        }
    }

    /// Leap day lunch, outside the March 2024 period but inside its grid
    pub fn leap_day_lunch() -> CalendarEvent {
        CalendarEvent {
            id: "evt-lunch".to_string(),
            title: "Leap day lunch".to_string(),
            description: String::new(),
            start: dates::at(dates::leap_day_2024(), 12, 0),
            end: dates::at(dates::leap_day_2024(), 13, 0),
            color: "#10b981".to_string(),
        }
    }

    pub fn sample_set() -> Vec<CalendarEvent> {
        vec![standup(), review(), leap_day_lunch()]
    }
}

