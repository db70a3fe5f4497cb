//! Day and time header lists.
//!
//! Day headers run left to right from the configured week start; time headers
//! run top to bottom from `start_minutes`. Both are rebuilt on every call.

use super::grid::{last_grid_row, minute_precision, time_rows, FIRST_CONTENT_LINE};
use super::renderer::{HeaderRenderers, Renderer};
use super::LayoutError;
use crate::models::calendar_day::CalendarDay;
use crate::models::layout::{CalendarLayout, DayHeader, GridArea, GridCell, TimeHeader};
use crate::models::settings::CalendarConfig;
use crate::services::settings::CalendarOptions;
use crate::utils::range::{range, range_to};

pub const ROOT_CLASS: &str = "ek-rwc-root";
pub const DAY_CONTAINER_CLASS: &str = "ek-rwc-header-day-container";
pub const TIME_CONTAINER_CLASS: &str = "ek-rwc-header-time-container";

/// Build the complete header layout for `config`.
///
/// Fails when the time range cannot be generated or the precision is zero; no
/// partial layout is returned in that case.
pub fn build_headers<D, T>(
    config: &CalendarConfig,
    renderers: &HeaderRenderers<'_, D, T>,
) -> Result<CalendarLayout<D::Output, T::Output>, LayoutError>
where
    D: Renderer<CalendarDay>,
    T: Renderer<i64>,
{
    let last_row = last_grid_row(config)?;
    let day_columns = i64::from(config.day_count);

    if !config.precision_divides_interval() {
        log::warn!(
            "Minute precision {} does not divide displayed interval {}; time headers will not align with grid rows",
            config.minute_precision,
            config.displayed_interval
        );
    }

    let time_headers = build_time_headers(config, renderers)?;
    let day_headers = build_day_headers(config, last_row, renderers)?;

    log::debug!(
        "Built calendar layout: {} day headers, {} time headers, last grid row {}",
        day_headers.len(),
        time_headers.len(),
        last_row
    );

    Ok(CalendarLayout {
        id: config.id.clone(),
        class_name: crate::class_names![ROOT_CLASS, config.class_name.as_deref()],
        last_grid_row: last_row,
        day_header_container: GridCell {
            class_name: DAY_CONTAINER_CLASS.to_string(),
            area: GridArea::new(1, day_columns + FIRST_CONTENT_LINE, 1, FIRST_CONTENT_LINE),
        },
        time_header_container: GridCell {
            class_name: TIME_CONTAINER_CLASS.to_string(),
            area: GridArea::new(1, FIRST_CONTENT_LINE, 1, last_row),
        },
        day_headers,
        time_headers,
    })
}

/// Report unknown options through `on_unknown_option`, then build the layout.
pub fn build_headers_with_options<D, T, F>(
    options: &CalendarOptions,
    renderers: &HeaderRenderers<'_, D, T>,
    mut on_unknown_option: F,
) -> Result<CalendarLayout<D::Output, T::Output>, LayoutError>
where
    D: Renderer<CalendarDay>,
    T: Renderer<i64>,
    F: FnMut(&str, &toml::Value),
{
    for (name, value) in &options.unknown {
        on_unknown_option(name, value);
    }
    build_headers(&options.config, renderers)
}

/// Column headers, one per displayed day.
pub fn build_day_headers<D, T>(
    config: &CalendarConfig,
    last_row: i64,
    renderers: &HeaderRenderers<'_, D, T>,
) -> Result<Vec<DayHeader<D::Output>>, LayoutError>
where
    D: Renderer<CalendarDay>,
    T: Renderer<i64>,
{
    let headers = range_to(usize::from(config.day_count))?
        .map(|day_index| {
            let is_first = day_index == 0;
            let weekday = config.week_start.rotate(day_index);
            let column = day_index as i64 + FIRST_CONTENT_LINE;

            DayHeader {
                key: format!("{}-{}", config.week_start, day_index),
                day_index,
                weekday,
                is_first,
                header: GridCell {
                    class_name: crate::class_names![
                        "ek-rwc-header ek-rwc-header-day",
                        ("first", is_first)
                    ],
                    area: GridArea::new(column, column + 1, 1, FIRST_CONTENT_LINE),
                },
                divider: GridCell {
                    class_name: crate::class_names!["ek-rwc-grid-line-y", ("first", is_first)],
                    area: GridArea::new(column, column + 1, FIRST_CONTENT_LINE, last_row),
                },
                content: renderers.render_day(weekday),
            }
        })
        .collect();

    Ok(headers)
}

/// Row headers, one per displayed interval in `[start_minutes, end_minutes)`.
pub fn build_time_headers<D, T>(
    config: &CalendarConfig,
    renderers: &HeaderRenderers<'_, D, T>,
) -> Result<Vec<TimeHeader<T::Output>>, LayoutError>
where
    D: Renderer<CalendarDay>,
    T: Renderer<i64>,
{
    let precision = minute_precision(config)?;
    let last_column = i64::from(config.day_count) + FIRST_CONTENT_LINE;
    let marks = range(
        config.start_minutes,
        config.end_minutes,
        i64::from(config.displayed_interval),
    )?;

    marks
        .map(|minutes| {
            let is_first = minutes == config.start_minutes;
            let (row_start, row_end) = time_rows(config, minutes, precision)?;

            Ok(TimeHeader {
                key: minutes.to_string(),
                minute_mark: minutes,
                is_first,
                header: GridCell {
                    class_name: crate::class_names![
                        "ek-rwc-header ek-rwc-header-time",
                        ("first", is_first)
                    ],
                    area: GridArea::new(1, FIRST_CONTENT_LINE, row_start, row_end),
                },
                divider: GridCell {
                    class_name: crate::class_names!["ek-rwc-grid-line-x", ("first", is_first)],
                    area: GridArea::new(FIRST_CONTENT_LINE, last_column, row_start, row_end),
                },
                content: renderers.render_time(minutes),
            })
        })
        .collect()
}

/// Default hook for unknown options: log a warning naming the option.
pub fn warn_unknown_option(name: &str, value: &toml::Value) {
    log::warn!(
        "Unknown option received, this may indicate a typo or some other error: {} = {}",
        name,
        value
    );
}
