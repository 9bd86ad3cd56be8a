// Small cross-target helpers
pub mod app_time;
