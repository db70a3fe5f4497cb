// Calendar day module
// Weekday enumerator with the fixed Monday-first order used for rotation

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A day of the week as configured for a calendar grid.
///
/// Serialized in lowercase (`"monday"`), matching the configuration file keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarDay {
    #[default]
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

/// Canonical day order. Rotation math indexes into this.
pub const CALENDAR_DAY_ORDER: [CalendarDay; 7] = [
    CalendarDay::Monday,
    CalendarDay::Tuesday,
    CalendarDay::Wednesday,
    CalendarDay::Thursday,
    CalendarDay::Friday,
    CalendarDay::Saturday,
    CalendarDay::Sunday,
];

impl CalendarDay {
    /// Position of this day in [`CALENDAR_DAY_ORDER`].
    pub fn offset(self) -> usize {
        match self {
            CalendarDay::Monday => 0,
            CalendarDay::Tuesday => 1,
            CalendarDay::Wednesday => 2,
            CalendarDay::Thursday => 3,
            CalendarDay::Friday => 4,
            CalendarDay::Saturday => 5,
            CalendarDay::Sunday => 6,
        }
    }

    /// The day found `days` positions after this one, wrapping around the week.
    ///
    /// # Examples
    /// ```
    /// use rust_week_calendar::models::calendar_day::CalendarDay;
    ///
    /// assert_eq!(CalendarDay::Saturday.rotate(2), CalendarDay::Monday);
    /// ```
    pub fn rotate(self, days: usize) -> CalendarDay {
        CALENDAR_DAY_ORDER[(self.offset() + days) % CALENDAR_DAY_ORDER.len()]
    }

    /// Lowercase configuration key, e.g. `"monday"`.
    pub fn key(self) -> &'static str {
        match self {
            CalendarDay::Monday => "monday",
            CalendarDay::Tuesday => "tuesday",
            CalendarDay::Wednesday => "wednesday",
            CalendarDay::Thursday => "thursday",
            CalendarDay::Friday => "friday",
            CalendarDay::Saturday => "saturday",
            CalendarDay::Sunday => "sunday",
        }
    }

    /// English display name, e.g. `"Monday"`.
    pub fn name(self) -> &'static str {
        match self {
            CalendarDay::Monday => "Monday",
            CalendarDay::Tuesday => "Tuesday",
            CalendarDay::Wednesday => "Wednesday",
            CalendarDay::Thursday => "Thursday",
            CalendarDay::Friday => "Friday",
            CalendarDay::Saturday => "Saturday",
            CalendarDay::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for CalendarDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for CalendarDay {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        CALENDAR_DAY_ORDER
            .iter()
            .copied()
            .find(|day| day.key() == lower)
            .ok_or_else(|| format!("Unknown calendar day: {}", s))
    }
}

impl From<chrono::Weekday> for CalendarDay {
    fn from(weekday: chrono::Weekday) -> Self {
        CALENDAR_DAY_ORDER[weekday.num_days_from_monday() as usize]
    }
}

impl From<CalendarDay> for chrono::Weekday {
    fn from(day: CalendarDay) -> Self {
        match day {
            CalendarDay::Monday => chrono::Weekday::Mon,
            CalendarDay::Tuesday => chrono::Weekday::Tue,
            CalendarDay::Wednesday => chrono::Weekday::Wed,
            CalendarDay::Thursday => chrono::Weekday::Thu,
            CalendarDay::Friday => chrono::Weekday::Fri,
            CalendarDay::Saturday => chrono::Weekday::Sat,
            CalendarDay::Sunday => chrono::Weekday::Sun,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_order_matches_offsets() {
        for (index, day) in CALENDAR_DAY_ORDER.iter().enumerate() {
            assert_eq!(day.offset(), index);
        }
    }

    #[test_case(CalendarDay::Monday, 0, CalendarDay::Monday)]
    #[test_case(CalendarDay::Monday, 6, CalendarDay::Sunday)]
    #[test_case(CalendarDay::Sunday, 1, CalendarDay::Monday)]
    #[test_case(CalendarDay::Wednesday, 7, CalendarDay::Wednesday)]
    #[test_case(CalendarDay::Friday, 10, CalendarDay::Monday)]
    fn test_rotate(start: CalendarDay, days: usize, expected: CalendarDay) {
        assert_eq!(start.rotate(days), expected);
    }

    #[test_case("monday", CalendarDay::Monday)]
    #[test_case("Sunday", CalendarDay::Sunday)]
    #[test_case(" THURSDAY ", CalendarDay::Thursday)]
    fn test_from_str(input: &str, expected: CalendarDay) {
        assert_eq!(input.parse::<CalendarDay>(), Ok(expected));
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        assert!("funday".parse::<CalendarDay>().is_err());
        assert!("".parse::<CalendarDay>().is_err());
    }

    #[test]
    fn test_chrono_roundtrip() {
        for day in CALENDAR_DAY_ORDER {
            let weekday: chrono::Weekday = day.into();
            assert_eq!(CalendarDay::from(weekday), day);
        }
        assert_eq!(CalendarDay::from(chrono::Weekday::Sun), CalendarDay::Sunday);
    }

    #[test]
    fn test_serde_uses_lowercase_keys() {
        let json = serde_json::to_string(&CalendarDay::Saturday).unwrap();
        assert_eq!(json, "\"saturday\"");

        let day: CalendarDay = serde_json::from_str("\"tuesday\"").unwrap();
        assert_eq!(day, CalendarDay::Tuesday);
    }
}
