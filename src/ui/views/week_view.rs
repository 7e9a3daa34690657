use chrono::NaiveDate;

use super::utils::{format_hour_label, format_short_date, get_day_names, truncate};
use crate::models::event::CalendarEvent;
use crate::services::event::events_on_day_at_hour;
use crate::ui::app::CalendarApp;

const LABEL_WIDTH: usize = 7;
const COLUMN_WIDTH: usize = 12;
const HOURS_PER_DAY: u32 = 24;

pub struct WeekView;

impl WeekView {
    /// Week as a text hour grid: one row per hour, one column per day,
    /// listing the titles of events that start in each cell.
    pub fn render(app: &CalendarApp) -> String {
        let grid = app.grid();
        let settings = app.settings();
        let events = app.events().list_all();
        let today = app.today();

        let mut lines = vec![app.title()];

        let mut header = " ".repeat(LABEL_WIDTH);
        for (name, date) in get_day_names(settings.first_day_of_week)
            .into_iter()
            .zip(grid.days())
        {
            let label = format!("{} {}", name, format_short_date(*date, &settings.date_format));
            let label = if *date == today { format!("*{}", label) } else { label };
            header.push_str(&format!("{:<width$}", label, width = COLUMN_WIDTH));
        }
        lines.push(header.trim_end().to_string());

        for hour in 0..HOURS_PER_DAY {
            let mut row = format!(
                "{:>width$} ",
                format_hour_label(hour, settings.uses_24h_clock()),
                width = LABEL_WIDTH - 1
            );
            for date in grid.days() {
                row.push_str(&format!(
                    "{:<width$}",
                    Self::hour_cell(events, *date, hour),
                    width = COLUMN_WIDTH
                ));
            }
            lines.push(row.trim_end().to_string());
        }

        lines.join("\n")
    }

    fn hour_cell(events: &[CalendarEvent], date: NaiveDate, hour: u32) -> String {
        let titles: Vec<&str> = events_on_day_at_hour(events, date, hour)
            .into_iter()
            .map(|event| event.title.as_str())
            .collect();

        if titles.is_empty() {
            "·".to_string()
        } else {
            truncate(&titles.join(", "), COLUMN_WIDTH - 1)
        }
    }
}
