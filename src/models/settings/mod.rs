// Settings module
// User preferences for grid layout and event form defaults

use serde::{Deserialize, Serialize};

use crate::models::event::{DEFAULT_EVENT_COLOR, EVENT_PALETTE};
use crate::models::ui::ViewType;
use crate::utils::date::parse_hour_minute;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// 0 = Sunday, 1 = Monday, ... 6 = Saturday
    pub first_day_of_week: u8,
    /// "12h" or "24h"
    pub time_format: String,
    pub date_format: String,
    /// Start time prefilled in the event form, `HH:MM`
    pub default_event_start_time: String,
    /// Minutes between the prefilled start and end times
    pub default_event_duration: u32,
    pub default_color: String,
    pub palette: Vec<String>,
    pub default_view: ViewType,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            first_day_of_week: 0, // Sunday
            time_format: "12h".to_string(),
            date_format: "MM/DD/YYYY".to_string(),
            default_event_start_time: "09:00".to_string(),
            default_event_duration: 60,
            default_color: DEFAULT_EVENT_COLOR.to_string(),
            palette: EVENT_PALETTE.iter().map(|c| c.to_string()).collect(),
            default_view: ViewType::Month,
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), String> {
        if self.first_day_of_week > 6 {
            return Err(format!(
                "first_day_of_week must be between 0 (Sunday) and 6 (Saturday), got {}",
                self.first_day_of_week
            ));
        }

        if self.time_format != "12h" && self.time_format != "24h" {
            return Err(format!(
                "time_format must be \"12h\" or \"24h\", got \"{}\"",
                self.time_format
            ));
        }

        if parse_hour_minute(&self.default_event_start_time).is_none() {
            return Err(format!(
                "default_event_start_time must be HH:MM, got \"{}\"",
                self.default_event_start_time
            ));
        }

        if self.default_event_duration == 0 || self.default_event_duration > 24 * 60 {
            return Err("default_event_duration must be between 1 and 1440 minutes".to_string());
        }

        if self.palette.is_empty() {
            return Err("palette must contain at least one color".to_string());
        }

        Ok(())
    }

    pub fn uses_24h_clock(&self) -> bool {
        self.time_format == "24h"
    }
}
