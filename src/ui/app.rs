mod navigation;

use chrono::{Local, NaiveDate};
use thiserror::Error;

use crate::models::event::CalendarEvent;
use crate::models::settings::Settings;
use crate::models::ui::ViewType;
use crate::services::event::EventService;
use crate::services::grid::CalendarGrid;
use crate::ui::event_dialog::{DraftError, EventDialogState};
use crate::ui::messages::Message;

/// Errors returned when a message cannot be applied
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    #[error(transparent)]
    Draft(#[from] DraftError),
    #[error("No event form is open")]
    NoDialogOpen,
    #[error("Event {0} not found")]
    EventNotFound(String),
    #[error("Only existing events can be deleted")]
    NothingToDelete,
    #[error("Palette has no color number {0}")]
    UnknownPaletteColor(usize),
    #[error("Hour {0} is outside 0-23")]
    InvalidHour(u32),
}

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Single owner of the calendar's state.
///
/// Callers send [`Message`]s through [`update`](Self::update) and then read
/// the grid, events and form back through the query methods to render.
pub struct CalendarApp {
    settings: Settings,
    current_view: ViewType,
    current_date: NaiveDate,
    events: EventService,
    /// Open create/edit form, if any
    dialog: Option<EventDialogState>,
    clock: fn() -> NaiveDate,
}

impl CalendarApp {
    pub fn new(settings: Settings) -> Self {
        Self::with_clock(settings, local_today)
    }

    /// Use `clock` instead of the system date for "today".
    pub fn with_clock(settings: Settings, clock: fn() -> NaiveDate) -> Self {
        let current_view = settings.default_view;
        Self {
            settings,
            current_view,
            current_date: clock(),
            events: EventService::new(),
            dialog: None,
            clock,
        }
    }

    pub fn with_events(mut self, events: Vec<CalendarEvent>) -> Self {
        self.events = EventService::from_events(events);
        self
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn current_view(&self) -> ViewType {
        self.current_view
    }

    pub fn current_date(&self) -> NaiveDate {
        self.current_date
    }

    pub fn today(&self) -> NaiveDate {
        (self.clock)()
    }

    pub fn events(&self) -> &EventService {
        &self.events
    }

    pub fn dialog(&self) -> Option<&EventDialogState> {
        self.dialog.as_ref()
    }

    pub fn update(&mut self, message: Message) -> Result<(), AppError> {
        log::debug!("Handling {:?}", message);

        match message {
            Message::Today => self.jump_to_today(),
            Message::Previous => self.navigate_previous(),
            Message::Next => self.navigate_next(),
            Message::SwitchView(view) => self.current_view = view,
            Message::GoTo(date) => self.current_date = date,
            Message::OpenDay(date) => {
                self.dialog = Some(EventDialogState::new_event(date, &self.settings));
            }
            Message::OpenTimeSlot(date, hour) => {
                let state = EventDialogState::new_event_at_hour(date, hour, &self.settings)
                    .ok_or(AppError::InvalidHour(hour))?;
                self.dialog = Some(state);
            }
            Message::OpenEvent(id) => {
                let event = self
                    .events
                    .get(&id)
                    .ok_or_else(|| AppError::EventNotFound(id.clone()))?;
                self.dialog = Some(EventDialogState::from_event(event));
            }
            Message::UpdateTitle(title) => self.dialog_mut()?.title = title,
            Message::UpdateDescription(description) => self.dialog_mut()?.description = description,
            Message::UpdateStartTime(time) => self.dialog_mut()?.start_time = time,
            Message::UpdateEndTime(time) => self.dialog_mut()?.end_time = time,
            Message::UpdateColor(color) => self.dialog_mut()?.color = color,
            Message::SelectPaletteColor(index) => {
                let dialog = self.dialog.as_mut().ok_or(AppError::NoDialogOpen)?;
                if !dialog.select_palette_color(index, &self.settings) {
                    return Err(AppError::UnknownPaletteColor(index.saturating_add(1)));
                }
            }
            Message::SaveEvent => self.save_dialog()?,
            Message::DeleteEvent => self.delete_dialog_event()?,
            Message::CloseDialog => self.dialog = None,
        }

        Ok(())
    }

    fn dialog_mut(&mut self) -> Result<&mut EventDialogState, AppError> {
        self.dialog.as_mut().ok_or(AppError::NoDialogOpen)
    }

    /// A failed validation leaves the form open so it can be corrected.
    fn save_dialog(&mut self) -> Result<(), AppError> {
        let dialog = self.dialog.as_ref().ok_or(AppError::NoDialogOpen)?;
        let draft = dialog.to_draft().map_err(|err| {
            log::warn!("Event form rejected: {}", err);
            err
        })?;

        for warning in dialog.check_warnings(self.events.list_all()) {
            log::warn!("Saving with warning: {}", warning);
        }

        self.events.save(draft, dialog.event_id.as_deref());
        self.dialog = None;
        Ok(())
    }

    fn delete_dialog_event(&mut self) -> Result<(), AppError> {
        let dialog = self.dialog.as_ref().ok_or(AppError::NoDialogOpen)?;
        let id = dialog.event_id.clone().ok_or(AppError::NothingToDelete)?;

        self.events.delete(&id);
        self.dialog = None;
        Ok(())
    }

    pub fn grid(&self) -> CalendarGrid {
        CalendarGrid::new(
            self.current_date,
            self.current_view,
            self.settings.first_day_of_week,
        )
    }

    pub fn events_on(&self, day: NaiveDate) -> Vec<&CalendarEvent> {
        self.events.on_day(day)
    }

    pub fn events_at(&self, day: NaiveDate, hour: u32) -> Vec<&CalendarEvent> {
        self.events.on_day_at_hour(day, hour)
    }

    /// Heading for the current view: "March 2024" or "25 Feb - 2 Mar 2024".
    pub fn title(&self) -> String {
        match self.current_view {
            ViewType::Month => self.current_date.format("%B %Y").to_string(),
            ViewType::Week => {
                let grid = self.grid();
                format!(
                    "{} - {}",
                    grid.start().format("%-d %b"),
                    grid.end().format("%-d %b %Y")
                )
            }
        }
    }
}
