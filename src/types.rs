//! Layout configuration and constants for calendar rendering.

use chrono::Weekday;

use crate::error::CalendarError;

/// Column display mode for the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnsMode {
    /// Fixed number of months per row.
    Fixed(usize),
    /// Fit as many months as the terminal width allows.
    Auto,
}

/// How month blocks are laid out on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Months per row.
    pub columns: usize,
    /// Characters per day cell, including the separating space.
    pub cell_width: usize,
    /// Blank lines after each row of months.
    pub row_gap: usize,
    /// Spaces between adjacent month blocks.
    pub column_gap: usize,
}

impl Default for Layout {
    fn default() -> Self {
        Layout {
            columns: DEFAULT_COLUMNS,
            cell_width: DEFAULT_CELL_WIDTH,
            row_gap: DEFAULT_ROW_GAP,
            column_gap: DEFAULT_COLUMN_GAP,
        }
    }
}

impl Layout {
    /// Layout with `columns` months per row and default spacing.
    pub fn new(columns: usize) -> Result<Self, CalendarError> {
        Layout {
            columns,
            ..Layout::default()
        }
        .validate()
    }

    /// Check the layout can render without malformed output.
    pub fn validate(self) -> Result<Self, CalendarError> {
        if self.columns == 0 {
            return Err(CalendarError::InvalidColumns);
        }
        if !(MIN_CELL_WIDTH..=MAX_CELL_WIDTH).contains(&self.cell_width) {
            return Err(CalendarError::InvalidCellWidth {
                cell_width: self.cell_width,
            });
        }
        if self.column_gap > MAX_GAP {
            return Err(CalendarError::InvalidGap {
                name: "column gap",
                value: self.column_gap,
            });
        }
        if self.row_gap > MAX_GAP {
            return Err(CalendarError::InvalidGap {
                name: "row gap",
                value: self.row_gap,
            });
        }
        Ok(self)
    }

    /// Width of every line in a month block.
    ///
    /// Saturates instead of overflowing on a layout that has not been validated.
    pub fn block_width(&self) -> usize {
        self.cell_width.saturating_mul(WEEK_DAYS.len())
    }
}

/// Week order used for headers and cell placement.
pub const WEEK_DAYS: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

// Block geometry
pub const WEEK_LINES_PER_MONTH: usize = 6;
pub const HEADER_LINES_PER_MONTH: usize = 3;
pub const LINES_PER_MONTH: usize = HEADER_LINES_PER_MONTH + WEEK_LINES_PER_MONTH;

// Layout defaults
pub const DEFAULT_COLUMNS: usize = 3;
pub const DEFAULT_CELL_WIDTH: usize = 3;
pub const DEFAULT_ROW_GAP: usize = 1;
pub const DEFAULT_COLUMN_GAP: usize = 1;
pub const MIN_CELL_WIDTH: usize = 2;
pub const MAX_CELL_WIDTH: usize = 32;
pub const MAX_GAP: usize = 64;

// Bounds for auto-detected columns
pub const MAX_AUTO_COLUMNS: usize = 12;

// Years accepted on the command line
pub const MIN_YEAR: i32 = 1;
pub const MAX_YEAR: i32 = 9999;
