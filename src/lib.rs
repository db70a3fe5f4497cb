// Rust Week Calendar Library
// Grid layout for week/month calendar frames: day columns, time rows and headers

pub mod models;
pub mod services;
pub mod utils;

pub use models::calendar_day::{CalendarDay, CALENDAR_DAY_ORDER};
pub use models::layout::{CalendarLayout, DayHeader, GridArea, GridCell, GridCoordinate, TimeHeader};
pub use models::settings::{CalendarConfig, CalendarInterval, CalendarPrecision, InvalidConfig};
pub use services::layout::{build_headers, LayoutError};
pub use utils::format::{calendar_day_to_string, minutes_to_timestamp_string};
pub use utils::range::{range, RangeError};
