//! Common utility functions for calendar views.
//!
//! This module contains pure helper functions used across different view types.

use chrono::NaiveDate;

use crate::models::event::CalendarEvent;

const DAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Weekday header labels starting at `first_day_of_week` (0 = Sunday).
pub fn get_day_names(first_day_of_week: u8) -> Vec<&'static str> {
    let start = first_day_of_week as usize % 7;
    (0..7).map(|offset| DAY_NAMES[(start + offset) % 7]).collect()
}

/// Format a date in short form based on the date format setting.
///
/// # Arguments
/// * `date` - The date to format
/// * `date_format` - The format preference (e.g., "DD/MM/YYYY", "MM/DD/YYYY", "YYYY/MM/DD")
pub fn format_short_date(date: NaiveDate, date_format: &str) -> String {
    if date_format.starts_with("DD/MM") || date_format.starts_with("dd/mm") {
        date.format("%d/%m").to_string()
    } else if date_format.starts_with("YYYY") || date_format.starts_with("yyyy") {
        date.format("%Y/%m/%d").to_string()
    } else {
        date.format("%m/%d").to_string()
    }
}

/// Row label for an hour of the day: "9 AM" or "09:00".
pub fn format_hour_label(hour: u32, use_24h: bool) -> String {
    if use_24h {
        return format!("{:02}:00", hour);
    }

    let suffix = if hour < 12 { "AM" } else { "PM" };
    let display = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{} {}", display, suffix)
}

/// Parse a hex color string to RGB.
///
/// # Arguments
/// * `hex` - A hex color string, optionally prefixed with '#' (e.g., "#FF5500" or "FF5500")
///
/// # Returns
/// * `Some((r, g, b))` if parsing succeeds
/// * `None` if the input is empty or not a six-digit hex color
pub fn parse_color(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

    Some((r, g, b))
}

/// One agenda line: time range, title, color and identifier.
pub fn format_event_line(event: &CalendarEvent, use_24h: bool) -> String {
    let fmt = if use_24h { "%H:%M" } else { "%-I:%M %p" };
    format!(
        "{}-{}  {}  {}  [{}]",
        event.start.format(fmt),
        event.end.format(fmt),
        event.title,
        event.color,
        event.id
    )
}

/// Cut `text` to at most `width` characters, marking the cut with '~'.
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut cut: String = text.chars().take(width - 1).collect();
    cut.push('~');
    cut
}
