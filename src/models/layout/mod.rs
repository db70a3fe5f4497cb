// Layout module
// Grid placement descriptors handed to a rendering layer

use serde::Serialize;

use crate::models::calendar_day::CalendarDay;

/// A 1-based (row, column) position in the calendar grid.
///
/// Row 1 holds the day headers and column 1 the time headers, so content
/// cells start at (2, 2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GridCoordinate {
    pub row: i64,
    pub column: i64,
}

impl GridCoordinate {
    pub const FIRST_CONTENT: GridCoordinate = GridCoordinate { row: 2, column: 2 };

    pub fn new(row: i64, column: i64) -> Self {
        Self { row, column }
    }

    /// True for cells in the header row or header column.
    pub fn is_header(&self) -> bool {
        self.row == 1 || self.column == 1
    }
}

/// Grid area with end-exclusive lines, like CSS `grid-column`/`grid-row`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GridArea {
    pub column_start: i64,
    pub column_end: i64,
    pub row_start: i64,
    pub row_end: i64,
}

impl GridArea {
    pub fn new(column_start: i64, column_end: i64, row_start: i64, row_end: i64) -> Self {
        Self {
            column_start,
            column_end,
            row_start,
            row_end,
        }
    }

    /// Top-left coordinate of the area.
    pub fn origin(&self) -> GridCoordinate {
        GridCoordinate::new(self.row_start, self.column_start)
    }

    pub fn row_span(&self) -> i64 {
        self.row_end - self.row_start
    }

    pub fn column_span(&self) -> i64 {
        self.column_end - self.column_start
    }
}

/// A placed, styled grid element with no content of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridCell {
    pub class_name: String,
    pub area: GridArea,
}

/// Column header for one day, plus the vertical divider below it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayHeader<C> {
    /// Stable identity, `"<week_start>-<day_index>"`
    pub key: String,
    pub day_index: usize,
    pub weekday: CalendarDay,
    pub is_first: bool,
    /// Labelled cell in the header row
    pub header: GridCell,
    /// Full-height divider spanning the content rows
    pub divider: GridCell,
    /// Renderer output for the header cell
    pub content: C,
}

/// Row header for one time mark, plus the horizontal divider beside it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeHeader<C> {
    /// Stable identity, the minute mark as a string
    pub key: String,
    pub minute_mark: i64,
    pub is_first: bool,
    pub header: GridCell,
    /// Full-width divider spanning every day column
    pub divider: GridCell,
    pub content: C,
}

/// Everything a rendering layer needs to draw the calendar frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalendarLayout<D, T> {
    pub id: String,
    pub class_name: String,
    /// Exclusive end line of the last content row
    pub last_grid_row: i64,
    pub day_header_container: GridCell,
    pub time_header_container: GridCell,
    pub day_headers: Vec<DayHeader<D>>,
    pub time_headers: Vec<TimeHeader<T>>,
}
