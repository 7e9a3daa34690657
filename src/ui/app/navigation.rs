use super::CalendarApp;
use crate::models::ui::ViewType;
use crate::utils::date::shift_months;
use chrono::{Days, NaiveDate};

impl CalendarApp {
    pub(super) fn navigate_previous(&mut self) {
        self.current_date = step(self.current_date, self.current_view, -1);
    }

    pub(super) fn navigate_next(&mut self) {
        self.current_date = step(self.current_date, self.current_view, 1);
    }

    pub(super) fn jump_to_today(&mut self) {
        self.current_date = self.today();
    }
}

/// One navigation step: a calendar month in month view, seven days in week view.
fn step(current: NaiveDate, view: ViewType, direction: i32) -> NaiveDate {
    match view {
        ViewType::Month => shift_months(current, direction),
        ViewType::Week => {
            let week = Days::new(7);
            let shifted = if direction >= 0 {
                current.checked_add_days(week)
            } else {
                current.checked_sub_days(week)
            };
            shifted.unwrap_or(current)
        }
    }
}
