// Date utility functions
// Day comparison, month boundaries and local-time composition

use chrono::{DateTime, Datelike, Local, LocalResult, Months, NaiveDate, NaiveTime, TimeZone};

/// True when `instant` falls on the calendar day `day` in local time.
pub fn falls_on(instant: &DateTime<Local>, day: NaiveDate) -> bool {
    instant.date_naive() == day
}

/// Combine a calendar date and a wall-clock time into an instant in `tz`.
///
/// Ambiguous times (DST fall-back) resolve to the earlier instant. Returns
/// `None` when the wall-clock time does not exist on that day (DST gap).
pub fn combine_in<Tz: TimeZone>(tz: &Tz, date: NaiveDate, time: NaiveTime) -> Option<DateTime<Tz>> {
    match tz.from_local_datetime(&date.and_time(time)) {
        LocalResult::Single(dt) => Some(dt),
        LocalResult::Ambiguous(earliest, _) => Some(earliest),
        LocalResult::None => None,
    }
}

pub fn combine_local(date: NaiveDate, time: NaiveTime) -> Option<DateTime<Local>> {
    combine_in(&Local, date, time)
}

/// Parse an `hour:minute` form value such as `"09:30"`.
///
/// Each side is one or two ASCII digits; hours run 0-23 and minutes 0-59.
/// Signs, inner whitespace and seconds are rejected.
pub fn parse_hour_minute(value: &str) -> Option<NaiveTime> {
    let (hour, minute) = value.trim().split_once(':')?;
    let hour = parse_clock_digits(hour)?;
    let minute = parse_clock_digits(minute)?;

    NaiveTime::from_hms_opt(hour, minute, 0)
}

fn parse_clock_digits(part: &str) -> Option<u32> {
    if part.is_empty() || part.len() > 2 || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

pub fn format_hour_minute(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

pub fn last_of_month(date: NaiveDate) -> NaiveDate {
    first_of_month(date)
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(NaiveDate::MAX)
}

/// Move `date` by whole calendar months, clamping the day to the target
/// month's length (Jan 31 + 1 month = Feb 28/29).
pub fn shift_months(date: NaiveDate, delta: i32) -> NaiveDate {
    let months = Months::new(delta.unsigned_abs());
    let shifted = if delta >= 0 {
        date.checked_add_months(months)
    } else {
        date.checked_sub_months(months)
    };

    shifted.unwrap_or(date)
}
