// Test fixtures - reusable calendar configurations
// Provides consistent test data across all test files

#![allow(dead_code)]

use rust_week_calendar::{CalendarConfig, CalendarDay, CalendarInterval, CalendarPrecision};

/// Sample configurations for testing
pub mod configs {
    use super::*;

    /// Full day, hourly headers, 5 minute rows, Monday first
    pub fn hourly_week() -> CalendarConfig {
        CalendarConfig {
            day_count: 7,
            start_minutes: 0,
            end_minutes: 24 * 60 - 1,
            displayed_interval: CalendarInterval::LARGE,
            minute_precision: CalendarPrecision::NORMAL,
            week_start: CalendarDay::Monday,
            ..CalendarConfig::default()
        }
    }

    /// Office hours 08:00-18:00 across a Sunday-first work week
    pub fn office_hours() -> CalendarConfig {
        CalendarConfig {
            day_count: 5,
            start_minutes: 8 * 60,
            end_minutes: 18 * 60,
            displayed_interval: CalendarInterval::MEDIUM,
            minute_precision: CalendarPrecision::COURSE,
            week_start: CalendarDay::Sunday,
            ..CalendarConfig::default()
        }
    }
}

/// Sample options files
pub mod files {
    pub const OFFICE_HOURS_TOML: &str = r#"
id = "office"
class_name = "work compact"
day_count = 5
start_minutes = 480
end_minutes = 1080
displayed_interval = 30
minute_precision = 15
week_start = "sunday"
"#;

    pub const WITH_TYPOS_TOML: &str = r#"
day_count = 3
dayCount = 4
weekstart = "friday"
"#;
}
