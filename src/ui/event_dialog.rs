//! Event form: raw field state, validation and conversion to drafts.

mod render;
mod state;

pub use render::render_event_dialog;
pub use state::{DraftError, EventDialogState, TimeField};
