// Service module exports

pub mod event;
pub mod grid;
pub mod settings;
