// Calendar Widget Library
// Grid generation, event bucketing and in-memory event management

pub mod models;
pub mod services;
pub mod ui;
pub mod utils;
