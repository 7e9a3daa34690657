//! Calendar grid generation.
//!
//! A grid is the ordered run of days a view displays. Month grids are
//! widened to whole weeks on both ends, so leading and trailing days from
//! the neighbouring months are included; week grids are exactly one week.

use chrono::{Datelike, Days, NaiveDate};

use crate::models::ui::ViewType;
use crate::utils::date::{first_of_month, last_of_month};

pub const DAYS_PER_WEEK: usize = 7;

/// Calculate the start of the week containing the given date.
///
/// # Arguments
/// * `date` - The date to find the week start for
/// * `first_day_of_week` - 0 = Sunday, 1 = Monday, etc.
pub fn get_week_start(date: NaiveDate, first_day_of_week: u8) -> NaiveDate {
    let weekday = date.weekday().num_days_from_sunday() as u64;
    let offset = (weekday + 7 - u64::from(first_day_of_week % 7)) % 7;
    date.checked_sub_days(Days::new(offset))
        .unwrap_or(NaiveDate::MIN)
}

/// Last day of the week containing the given date.
pub fn get_week_end(date: NaiveDate, first_day_of_week: u8) -> NaiveDate {
    get_week_start(date, first_day_of_week)
        .checked_add_days(Days::new(DAYS_PER_WEEK as u64 - 1))
        .unwrap_or(NaiveDate::MAX)
}

/// Days to display for `reference` in `view`, with Sunday-start weeks.
pub fn compute_grid(reference: NaiveDate, view: ViewType) -> Vec<NaiveDate> {
    compute_grid_with_week_start(reference, view, 0)
}

pub fn compute_grid_with_week_start(
    reference: NaiveDate,
    view: ViewType,
    first_day_of_week: u8,
) -> Vec<NaiveDate> {
    CalendarGrid::new(reference, view, first_day_of_week).into_days()
}

/// Inclusive week-aligned day range for a reference date and view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarGrid {
    reference: NaiveDate,
    view: ViewType,
    first_day_of_week: u8,
    start: NaiveDate,
    end: NaiveDate,
    days: Vec<NaiveDate>,
}

impl CalendarGrid {
    pub fn new(reference: NaiveDate, view: ViewType, first_day_of_week: u8) -> Self {
        let (start, end) = Self::bounds(reference, view, first_day_of_week);
        let days: Vec<NaiveDate> = start.iter_days().take_while(|d| *d <= end).collect();

        log::debug!(
            "Computed {} grid for {}: {} to {} ({} days)",
            view,
            reference,
            start,
            end,
            days.len()
        );

        Self {
            reference,
            view,
            first_day_of_week,
            start,
            end,
            days,
        }
    }

    fn bounds(reference: NaiveDate, view: ViewType, first_day_of_week: u8) -> (NaiveDate, NaiveDate) {
        match view {
            ViewType::Month => (
                get_week_start(first_of_month(reference), first_day_of_week),
                get_week_end(last_of_month(reference), first_day_of_week),
            ),
            ViewType::Week => (
                get_week_start(reference, first_day_of_week),
                get_week_end(reference, first_day_of_week),
            ),
        }
    }

    pub fn reference(&self) -> NaiveDate {
        self.reference
    }

    pub fn view(&self) -> ViewType {
        self.view
    }

    pub fn first_day_of_week(&self) -> u8 {
        self.first_day_of_week
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn days(&self) -> &[NaiveDate] {
        &self.days
    }

    pub fn into_days(self) -> Vec<NaiveDate> {
        self.days
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Week rows in display order.
    pub fn rows(&self) -> impl Iterator<Item = &[NaiveDate]> {
        self.days.chunks(DAYS_PER_WEEK)
    }

    pub fn row_count(&self) -> usize {
        self.days.len().div_ceil(DAYS_PER_WEEK)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Whether `date` belongs to the viewed period rather than padding.
    ///
    /// Month grids pad with neighbouring-month days, which renderers show
    /// de-emphasized. Every day of a week grid is in period.
    pub fn is_in_period(&self, date: NaiveDate) -> bool {
        match self.view {
            ViewType::Month => {
                date.year() == self.reference.year() && date.month() == self.reference.month()
            }
            ViewType::Week => self.contains(date),
        }
    }
}
