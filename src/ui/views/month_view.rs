use chrono::{Datelike, NaiveDate};

use super::utils::{format_event_line, get_day_names};
use crate::services::event::events_on_day;
use crate::ui::app::CalendarApp;

const CELL_WIDTH: usize = 8;

pub struct MonthView;

impl MonthView {
    /// Month grid as text, followed by an agenda of the month's events.
    ///
    /// Days from neighbouring months appear in parentheses, today in
    /// brackets, and `*N` marks a day with N events.
    pub fn render(app: &CalendarApp) -> String {
        let grid = app.grid();
        let today = app.today();
        let events = app.events().list_all();
        let settings = app.settings();

        let mut lines = vec![app.title()];

        let header: String = get_day_names(settings.first_day_of_week)
            .into_iter()
            .map(|name| format!("{:<width$}", name, width = CELL_WIDTH))
            .collect();
        lines.push(header.trim_end().to_string());

        for week in grid.rows() {
            let row: String = week
                .iter()
                .map(|date| {
                    let count = events_on_day(events, *date).len();
                    let cell = Self::day_cell(*date, grid.is_in_period(*date), *date == today, count);
                    format!("{:<width$}", cell, width = CELL_WIDTH)
                })
                .collect();
            lines.push(row.trim_end().to_string());
        }

        let agenda: Vec<String> = grid
            .days()
            .iter()
            .filter(|date| grid.is_in_period(**date))
            .flat_map(|date| {
                events_on_day(events, *date).into_iter().map(move |event| {
                    format!(
                        "{}  {}",
                        date.format("%a %e"),
                        format_event_line(event, settings.uses_24h_clock())
                    )
                })
            })
            .collect();

        if !agenda.is_empty() {
            lines.push(String::new());
            lines.extend(agenda);
        }

        lines.join("\n")
    }

    fn day_cell(date: NaiveDate, in_period: bool, is_today: bool, event_count: usize) -> String {
        let day = date.day();
        let label = if is_today {
            format!("[{}]", day)
        } else if in_period {
            day.to_string()
        } else {
            format!("({})", day)
        };

        if event_count > 0 {
            format!("{}*{}", label, event_count)
        } else {
            label
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::settings::Settings;
    use crate::ui::messages::Message;

    fn fixed_today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    #[test]
    fn test_day_cell_markers() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 25).unwrap();
        assert_eq!(MonthView::day_cell(date, false, false, 0), "(25)");
        assert_eq!(MonthView::day_cell(date, true, false, 0), "25");
        assert_eq!(MonthView::day_cell(date, true, true, 2), "[25]*2");
    }

    #[test]
    fn test_render_march_2024() {
        let mut app = CalendarApp::with_clock(Settings::default(), fixed_today);
        app.update(Message::OpenDay(fixed_today())).unwrap();
        app.update(Message::UpdateTitle("Standup".to_string())).unwrap();
        app.update(Message::UpdateStartTime("09:00".to_string())).unwrap();
        app.update(Message::UpdateEndTime("09:30".to_string())).unwrap();
        app.update(Message::SaveEvent).unwrap();

        let text = MonthView::render(&app);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "March 2024");
        assert!(lines[1].starts_with("Sun     Mon"));
        // Six week rows: Feb 25 through Apr 6
        assert!(lines[2].starts_with("(25)"));
        assert!(lines[7].starts_with("31"));
        assert!(lines[7].ends_with("(6)"));
        assert!(text.contains("[15]*1"));
        assert!(text.contains("Fri 15  9:00 AM-9:30 AM  Standup"));
    }
}
