//! Grid-position arithmetic.
//!
//! Minutes map onto grid rows by floor division with the configured
//! precision. Rows are 1-based and row 1 is the day-header band, so content
//! starts at [`FIRST_CONTENT_LINE`].

use std::num::NonZeroU32;

use super::LayoutError;
use crate::models::settings::CalendarConfig;

/// Grid line where content rows and columns begin.
pub const FIRST_CONTENT_LINE: i64 = 2;

/// Row offset of `minutes` at the given precision, `floor(minutes / precision)`.
pub fn to_grid_row(minutes: i64, minute_precision: NonZeroU32) -> i64 {
    minutes.div_euclid(i64::from(minute_precision.get()))
}

/// The precision as a non-zero value, or an error for a zero precision.
pub fn minute_precision(config: &CalendarConfig) -> Result<NonZeroU32, LayoutError> {
    NonZeroU32::new(config.minute_precision).ok_or(LayoutError::ZeroPrecision)
}

/// Exclusive end line of the last content row.
///
/// The covered span is rounded up to a whole number of displayed intervals
/// before conversion, so the last time header always fits.
pub fn last_grid_row(config: &CalendarConfig) -> Result<i64, LayoutError> {
    let precision = minute_precision(config)?;
    if config.displayed_interval == 0 {
        return Err(LayoutError::ZeroInterval);
    }

    let interval = i64::from(config.displayed_interval);
    let span = config
        .end_minutes
        .checked_sub(config.start_minutes)
        .ok_or(LayoutError::Overflow)?;
    let intervals = span.div_euclid(interval) + i64::from(span.rem_euclid(interval) != 0);
    let covered = intervals
        .checked_mul(interval)
        .ok_or(LayoutError::Overflow)?;

    to_grid_row(covered, precision)
        .checked_add(FIRST_CONTENT_LINE)
        .ok_or(LayoutError::Overflow)
}

/// First and exclusive-last grid row of the interval starting at `minutes`.
pub fn time_rows(
    config: &CalendarConfig,
    minutes: i64,
    precision: NonZeroU32,
) -> Result<(i64, i64), LayoutError> {
    let offset = minutes
        .checked_sub(config.start_minutes)
        .ok_or(LayoutError::Overflow)?;
    let offset_end = offset
        .checked_add(i64::from(config.displayed_interval))
        .ok_or(LayoutError::Overflow)?;
    let start = to_grid_row(offset, precision)
        .checked_add(FIRST_CONTENT_LINE)
        .ok_or(LayoutError::Overflow)?;
    let end = to_grid_row(offset_end, precision)
        .checked_add(FIRST_CONTENT_LINE)
        .ok_or(LayoutError::Overflow)?;
    Ok((start, end))
}
