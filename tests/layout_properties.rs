// Property-based tests for ranges, grid rows and header lists
// Checks layout invariants over random configurations

use std::num::NonZeroU32;

use proptest::prelude::*;
use rust_week_calendar::services::layout::{build_headers, to_grid_row, DefaultRenderers};
use rust_week_calendar::utils::format::calendar_day_key_to_string;
use rust_week_calendar::{range, CalendarConfig, CalendarDay, RangeError, CALENDAR_DAY_ORDER};

fn any_day() -> impl Strategy<Value = CalendarDay> {
    (0..7usize).prop_map(|index| CALENDAR_DAY_ORDER[index])
}

fn any_config() -> impl Strategy<Value = CalendarConfig> {
    (1..=8u8, 0..1440i64, 0..1440i64, 1..=240u32, 1..=60u32, any_day()).prop_map(
        |(day_count, start, span, displayed_interval, minute_precision, week_start)| {
            CalendarConfig {
                day_count,
                start_minutes: start,
                end_minutes: start + span,
                displayed_interval,
                minute_precision,
                week_start,
                ..CalendarConfig::default()
            }
        },
    )
}

proptest! {
    /// Property: ascending ranges start at start, stay below end and step evenly
    #[test]
    fn prop_ascending_range(start in -1000..1000i64, len in 0..500i64, step in 1..50i64) {
        let end = start + len;
        let values: Vec<i64> = range(start, end, step).unwrap().collect();

        if len > 0 {
            prop_assert_eq!(values[0], start);
        } else {
            prop_assert!(values.is_empty());
        }
        prop_assert!(values.iter().all(|v| *v < end));
        prop_assert!(values.windows(2).all(|w| w[1] - w[0] == step));
        prop_assert_eq!(values.len() as i64, (len + step - 1) / step);
    }

    /// Property: descending ranges mirror ascending ones
    #[test]
    fn prop_descending_range(start in -1000..1000i64, len in 1..500i64, step in 1..50i64) {
        let end = start - len;
        let values: Vec<i64> = range(start, end, -step).unwrap().collect();

        prop_assert_eq!(values[0], start);
        prop_assert!(values.iter().all(|v| *v > end));
        prop_assert!(values.windows(2).all(|w| w[0] - w[1] == step));
    }

    /// Property: a step pointing away from end is always rejected
    #[test]
    fn prop_wrong_direction_is_rejected(start in -1000..1000i64, len in 1..500i64, step in 0..50i64) {
        prop_assert!(range(start, start + len, -step).is_err());
        prop_assert!(range(start, start - len, step).is_err());
        prop_assert_eq!(range(start, start + len, 0).unwrap_err(), RangeError::ZeroStep);
    }

    /// Property: grid rows never decrease as minutes increase
    #[test]
    fn prop_grid_row_monotonic(a in 0..5000i64, b in 0..5000i64, precision in 1..=120u32) {
        let precision = NonZeroU32::new(precision).unwrap();
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(to_grid_row(low, precision) <= to_grid_row(high, precision));
    }

    /// Property: one day header per column, rotated from the week start
    #[test]
    fn prop_day_headers_follow_week_start(config in any_config()) {
        let layout = build_headers(&config, &DefaultRenderers::default()).unwrap();

        prop_assert_eq!(layout.day_headers.len(), config.day_count as usize);
        for (index, header) in layout.day_headers.iter().enumerate() {
            prop_assert_eq!(header.weekday, config.week_start.rotate(index));
            prop_assert_eq!(header.header.area.column_start, index as i64 + 2);
        }
    }

    /// Property: moving the week start by one day rotates every header by one day
    #[test]
    fn prop_week_start_rotation(config in any_config()) {
        let next = CalendarConfig { week_start: config.week_start.rotate(1), ..config.clone() };
        let renderers = DefaultRenderers::default();
        let base = build_headers(&config, &renderers).unwrap();
        let rotated = build_headers(&next, &renderers).unwrap();

        for (a, b) in base.day_headers.iter().zip(&rotated.day_headers) {
            prop_assert_eq!(a.weekday.rotate(1), b.weekday);
        }
    }

    /// Property: time header rows tile the grid without gaps or overlaps
    #[test]
    fn prop_time_headers_tile_rows(config in any_config()) {
        let layout = build_headers(&config, &DefaultRenderers::default()).unwrap();
        let headers = &layout.time_headers;

        if let Some(first) = headers.first() {
            prop_assert_eq!(first.minute_mark, config.start_minutes);
            prop_assert_eq!(first.header.area.row_start, 2);
        }
        for pair in headers.windows(2) {
            prop_assert_eq!(
                pair[1].minute_mark - pair[0].minute_mark,
                config.displayed_interval as i64
            );
            prop_assert_eq!(pair[0].header.area.row_end, pair[1].header.area.row_start);
        }
        prop_assert!(headers.iter().all(|h| h.minute_mark < config.end_minutes));
        if let Some(last) = headers.last() {
            prop_assert!(last.header.area.row_end <= layout.last_grid_row);
        }
    }

    /// Property: day key translation is total
    #[test]
    fn prop_day_key_translation_is_total(key in ".*") {
        let label = calendar_day_key_to_string(&key);
        let known = CALENDAR_DAY_ORDER.iter().any(|day| day.key() == key);
        prop_assert_eq!(label == "Unknown", !known);
    }
}
