// UI Messages
// Every state change of the calendar goes through one of these

use chrono::NaiveDate;

use crate::models::ui::ViewType;

/// Messages handled by [`CalendarApp::update`](crate::ui::app::CalendarApp::update)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Jump to the current date
    Today,
    /// Step back one month or one week, depending on the view
    Previous,
    /// Step forward one month or one week, depending on the view
    Next,
    /// Switch to a different view (reference date unchanged)
    SwitchView(ViewType),
    /// Jump to a specific date
    GoTo(NaiveDate),
    /// Open the create form for a day cell
    OpenDay(NaiveDate),
    /// Open the create form for an hour cell of the week grid
    OpenTimeSlot(NaiveDate, u32),
    /// Open the edit form for an existing event
    OpenEvent(String),
    UpdateTitle(String),
    UpdateDescription(String),
    UpdateStartTime(String),
    UpdateEndTime(String),
    UpdateColor(String),
    /// Pick a palette swatch by zero-based index
    SelectPaletteColor(usize),
    /// Validate the form and create or update the event
    SaveEvent,
    /// Delete the event being edited
    DeleteEvent,
    /// Close the form without saving
    CloseDialog,
}
