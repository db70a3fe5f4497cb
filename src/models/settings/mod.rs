// Settings module
// Calendar grid configuration and the interval/precision presets

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::calendar_day::CalendarDay;

/// Spacing presets for time headers, in minutes.
pub struct CalendarInterval;

impl CalendarInterval {
    pub const XXSMALL: u32 = 1;
    pub const XSMALL: u32 = 5;
    pub const SMALL: u32 = 15;
    pub const MEDIUM: u32 = 30;
    pub const LARGE: u32 = 60;
    pub const XLARGE: u32 = 120;
    pub const XXLARGE: u32 = 240;
}

/// Grid resolution presets, in minutes per grid row.
pub struct CalendarPrecision;

impl CalendarPrecision {
    pub const FINE: u32 = 1;
    pub const NORMAL: u32 = 5;
    pub const COURSE: u32 = 15;
    pub const HOURLY: u32 = 60;
}

pub const MIN_DAY_COUNT: u8 = 1;
pub const MAX_DAY_COUNT: u8 = 8;

/// Last minute of the day, the default end of the grid.
pub const END_OF_DAY_MINUTES: i64 = 24 * 60 - 1;

/// A config value outside the range a rendering layer accepts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct InvalidConfig(pub String);

/// Resolved calendar grid configuration.
///
/// Equality and hashing cover every field, so a config can key a layout cache.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    /// Id passed through to the rendered root element
    pub id: String,
    /// Extra class name for the rendered root element
    pub class_name: Option<String>,
    /// Number of day columns (1-8)
    pub day_count: u8,
    /// First minute covered by the grid
    pub start_minutes: i64,
    /// Last minute covered by the grid
    pub end_minutes: i64,
    /// Minutes between time headers
    pub displayed_interval: u32,
    /// Minutes per grid row
    pub minute_precision: u32,
    /// Day shown in the leftmost column
    pub week_start: CalendarDay,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            id: String::new(),
            class_name: None,
            day_count: 7,
            start_minutes: 0,
            end_minutes: END_OF_DAY_MINUTES,
            displayed_interval: CalendarInterval::MEDIUM,
            minute_precision: CalendarPrecision::NORMAL,
            week_start: CalendarDay::Monday,
        }
    }
}

impl CalendarConfig {
    /// Check the value ranges a rendering layer expects.
    ///
    /// Layout computation itself does not call this; loaders do.
    pub fn validate(&self) -> Result<(), InvalidConfig> {
        if !(MIN_DAY_COUNT..=MAX_DAY_COUNT).contains(&self.day_count) {
            return Err(InvalidConfig(format!(
                "day_count must be between {} and {}, got {}",
                MIN_DAY_COUNT, MAX_DAY_COUNT, self.day_count
            )));
        }

        if self.start_minutes < 0 {
            return Err(InvalidConfig(format!(
                "start_minutes cannot be negative, got {}",
                self.start_minutes
            )));
        }

        if self.end_minutes < self.start_minutes {
            return Err(InvalidConfig(format!(
                "end_minutes ({}) must not be before start_minutes ({})",
                self.end_minutes, self.start_minutes
            )));
        }

        if self.displayed_interval == 0 {
            return Err(InvalidConfig(
                "displayed_interval must be positive".to_string(),
            ));
        }

        if self.minute_precision == 0 {
            return Err(InvalidConfig(
                "minute_precision must be positive".to_string(),
            ));
        }

        Ok(())
    }

    /// Whether every displayed interval lands exactly on a grid row boundary.
    pub fn precision_divides_interval(&self) -> bool {
        self.minute_precision != 0 && self.displayed_interval % self.minute_precision == 0
    }
}
