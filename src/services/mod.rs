// Service module exports

pub mod activity;
pub mod api;
pub mod calendar;
pub mod month_grid;
pub mod settings;
