// Display formatting for header labels
// Translators never fail: bad input falls back to a fixed label

use crate::models::calendar_day::{CalendarDay, CALENDAR_DAY_ORDER};

pub const UNKNOWN_DAY: &str = "Unknown";
pub const FALLBACK_TIMESTAMP: &str = "00:00am";

/// Display name for a day, or `"Unknown"` when there is none.
pub fn calendar_day_to_string(day: Option<CalendarDay>) -> &'static str {
    day.map(CalendarDay::name).unwrap_or(UNKNOWN_DAY)
}

/// Display name for a lowercase day key such as `"friday"`.
///
/// Only the exact configuration keys are recognized; anything else is `"Unknown"`.
pub fn calendar_day_key_to_string(key: &str) -> &'static str {
    calendar_day_to_string(CALENDAR_DAY_ORDER.iter().copied().find(|day| day.key() == key))
}

/// Format an absolute minute of the day as a 12-hour clock label.
///
/// The hour is reduced by 12 from 13:00 onwards while the suffix switches to
/// `pm` at 12:00, so noon reads `12:00pm`. Negative or non-finite input gives
/// `00:00am`; fractional minutes are floored.
///
/// # Examples
/// ```
/// use rust_week_calendar::utils::format::minutes_to_timestamp_string;
///
/// assert_eq!(minutes_to_timestamp_string(0.0), "00:00am");
/// assert_eq!(minutes_to_timestamp_string(720.0), "12:00pm");
/// assert_eq!(minutes_to_timestamp_string(1439.0), "11:59pm");
/// ```
pub fn minutes_to_timestamp_string(minutes: f64) -> String {
    if !minutes.is_finite() || minutes < 0.0 {
        return FALLBACK_TIMESTAMP.to_string();
    }

    let minutes = minutes.floor();
    let hours = minutes / 60.0;
    let whole_hours = hours.floor() as i64;
    let display_hour = if hours < 13.0 {
        whole_hours
    } else {
        whole_hours - 12
    };
    let suffix = if hours < 12.0 { "am" } else { "pm" };

    format!(
        "{:02}:{:02}{}",
        display_hour,
        (minutes as i64) % 60,
        suffix
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_day_names() {
        let names: Vec<&str> = CALENDAR_DAY_ORDER
            .iter()
            .map(|day| calendar_day_to_string(Some(*day)))
            .collect();
        assert_eq!(
            names,
            vec!["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday"]
        );
    }

    #[test]
    fn test_missing_day_is_unknown() {
        assert_eq!(calendar_day_to_string(None), "Unknown");
    }

    #[test_case("wednesday", "Wednesday")]
    #[test_case("sunday", "Sunday")]
    #[test_case("Sunday", "Unknown")]
    #[test_case("someday", "Unknown")]
    #[test_case("", "Unknown")]
    fn test_day_keys(key: &str, expected: &str) {
        assert_eq!(calendar_day_key_to_string(key), expected);
    }

    #[test_case(0.0, "00:00am")]
    #[test_case(5.0, "00:05am")]
    #[test_case(90.0, "01:30am")]
    #[test_case(719.0, "11:59am")]
    #[test_case(720.0, "12:00pm")]
    #[test_case(779.0, "12:59pm")]
    #[test_case(780.0, "01:00pm")]
    #[test_case(1439.0, "11:59pm")]
    #[test_case(90.75, "01:30am")]
    fn test_timestamps(minutes: f64, expected: &str) {
        assert_eq!(minutes_to_timestamp_string(minutes), expected);
    }

    #[test]
    fn test_invalid_minutes_fall_back() {
        assert_eq!(minutes_to_timestamp_string(f64::NAN), "00:00am");
        assert_eq!(minutes_to_timestamp_string(f64::INFINITY), "00:00am");
        assert_eq!(minutes_to_timestamp_string(f64::NEG_INFINITY), "00:00am");
        assert_eq!(minutes_to_timestamp_string(-30.0), "00:00am");
    }
}
