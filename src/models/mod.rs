// Module exports for models

pub mod activity;
pub mod category;
pub mod location;
pub mod recurrence;
pub mod settings;
