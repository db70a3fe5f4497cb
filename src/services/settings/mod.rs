// Settings service module
// Partial configurations, layering and unknown-option tracking

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::calendar_day::CalendarDay;
use crate::models::settings::{CalendarConfig, InvalidConfig};

pub mod mapper;
pub mod service;

pub use mapper::{parse_options, table_to_options};
pub use service::SettingsService;

/// Option names understood by the calendar; anything else is reported as unknown.
pub const KNOWN_OPTIONS: [&str; 8] = [
    "id",
    "class_name",
    "day_count",
    "start_minutes",
    "end_minutes",
    "displayed_interval",
    "minute_precision",
    "week_start",
];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse calendar options: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to write calendar options: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("calendar options io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid calendar options: {0}")]
    Invalid(#[from] InvalidConfig),
}

/// Calendar options where every field may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartialConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day_count: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_minutes: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_minutes: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub displayed_interval: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minute_precision: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub week_start: Option<CalendarDay>,
}

impl PartialConfig {
    /// Keep the fields set here and take the rest from `other`.
    pub fn or(self, other: &PartialConfig) -> PartialConfig {
        PartialConfig {
            id: self.id.or_else(|| other.id.clone()),
            class_name: self.class_name.or_else(|| other.class_name.clone()),
            day_count: self.day_count.or(other.day_count),
            start_minutes: self.start_minutes.or(other.start_minutes),
            end_minutes: self.end_minutes.or(other.end_minutes),
            displayed_interval: self.displayed_interval.or(other.displayed_interval),
            minute_precision: self.minute_precision.or(other.minute_precision),
            week_start: self.week_start.or(other.week_start),
        }
    }

    /// Fill the remaining gaps from [`CalendarConfig::default`].
    pub fn resolve(self) -> CalendarConfig {
        let defaults = CalendarConfig::default();
        CalendarConfig {
            id: self.id.unwrap_or(defaults.id),
            class_name: self.class_name.or(defaults.class_name),
            day_count: self.day_count.unwrap_or(defaults.day_count),
            start_minutes: self.start_minutes.unwrap_or(defaults.start_minutes),
            end_minutes: self.end_minutes.unwrap_or(defaults.end_minutes),
            displayed_interval: self.displayed_interval.unwrap_or(defaults.displayed_interval),
            minute_precision: self.minute_precision.unwrap_or(defaults.minute_precision),
            week_start: self.week_start.unwrap_or(defaults.week_start),
        }
    }
}

impl From<CalendarConfig> for PartialConfig {
    fn from(config: CalendarConfig) -> Self {
        PartialConfig {
            id: Some(config.id),
            class_name: config.class_name,
            day_count: Some(config.day_count),
            start_minutes: Some(config.start_minutes),
            end_minutes: Some(config.end_minutes),
            displayed_interval: Some(config.displayed_interval),
            minute_precision: Some(config.minute_precision),
            week_start: Some(config.week_start),
        }
    }
}

/// Merge `sources` into `base`, left to right.
///
/// A field is only taken from a source when neither `base` nor an earlier
/// source set it.
pub fn merge_shallow<'a, I>(base: PartialConfig, sources: I) -> PartialConfig
where
    I: IntoIterator<Item = &'a PartialConfig>,
{
    sources
        .into_iter()
        .fold(base, |merged, source| merged.or(source))
}

/// Options as read from a file: known fields plus anything unrecognized.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PartialOptions {
    pub config: PartialConfig,
    pub unknown: BTreeMap<String, toml::Value>,
}

impl PartialOptions {
    pub fn resolve(self) -> CalendarOptions {
        CalendarOptions {
            config: self.config.resolve(),
            unknown: self.unknown,
        }
    }
}

/// A resolved config together with the unrecognized options that came with it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CalendarOptions {
    pub config: CalendarConfig,
    pub unknown: BTreeMap<String, toml::Value>,
}

impl From<CalendarConfig> for CalendarOptions {
    fn from(config: CalendarConfig) -> Self {
        Self {
            config,
            unknown: BTreeMap::new(),
        }
    }
}
