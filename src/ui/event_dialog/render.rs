use crate::models::event::CalendarEvent;
use crate::models::settings::Settings;
use crate::ui::views::utils::parse_color;

use super::state::EventDialogState;

/// Text panel for an open event form, including validation state and warnings.
pub fn render_event_dialog(
    state: &EventDialogState,
    events: &[CalendarEvent],
    settings: &Settings,
) -> String {
    let mut lines = Vec::new();

    lines.push(if state.is_editing() {
        "== Edit Event ==".to_string()
    } else {
        "== Create Event ==".to_string()
    });
    lines.push(format!("Date:        {}", state.date.format("%A, %B %-d, %Y")));
    lines.push(format!("Title:       {}", state.title));
    if !state.description.is_empty() {
        lines.push(format!("Description: {}", state.description));
    }
    lines.push(format!("Start:       {}", state.start_time));
    lines.push(format!("End:         {}", state.end_time));
    lines.push(match parse_color(&state.color) {
        Some((r, g, b)) => format!("Color:       {} (rgb {}, {}, {})", state.color, r, g, b),
        None => format!("Color:       {}", state.color),
    });
    lines.push(format!("Palette:     {}", palette_line(state, settings)));

    if let Err(err) = state.validate() {
        lines.push(format!("! {}", err));
    }

    for warning in state.check_warnings(events) {
        lines.push(format!("~ {}", warning));
    }

    lines.push(if state.is_editing() {
        "save | delete | cancel".to_string()
    } else {
        "save | cancel".to_string()
    });

    lines.join("\n")
}

fn palette_line(state: &EventDialogState, settings: &Settings) -> String {
    settings
        .palette
        .iter()
        .enumerate()
        .map(|(idx, color)| {
            if color.eq_ignore_ascii_case(&state.color) {
                format!("[{}:{}]", idx + 1, color)
            } else {
                format!("{}:{}", idx + 1, color)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
