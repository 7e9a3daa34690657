// Controller and text front end for the calendar widget

pub mod app;
pub mod commands;
pub mod event_dialog;
pub mod messages;
pub mod views;
