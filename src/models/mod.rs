// Module exports for models

pub mod calendar_day;
pub mod layout;
pub mod settings;
