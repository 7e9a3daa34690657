// Text renderings of the calendar views

pub mod month_view;
pub mod utils;
pub mod week_view;

pub use month_view::MonthView;
pub use week_view::WeekView;

use crate::models::ui::ViewType;
use crate::ui::app::CalendarApp;
use crate::ui::event_dialog::render_event_dialog;

/// The active view, with the event form below it when one is open.
pub fn render_current(app: &CalendarApp) -> String {
    let mut text = match app.current_view() {
        ViewType::Month => MonthView::render(app),
        ViewType::Week => WeekView::render(app),
    };

    if let Some(dialog) = app.dialog() {
        text.push_str("\n\n");
        text.push_str(&render_event_dialog(
            dialog,
            app.events().list_all(),
            app.settings(),
        ));
    }

    text
}
