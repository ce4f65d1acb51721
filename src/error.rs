//! Error types for calendar configuration and rendering.

/// Error type for all fallible operations in the gridcal crate.
///
/// Rendering itself is total over valid dates, so every variant here is a
/// configuration problem caught before the first line is produced.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a layout asks for zero months per row.
    #[error("columns must be positive")]
    InvalidColumns,

    /// Returned when a day cell cannot hold a two-digit day, or is wider
    /// than any sane terminal line allows.
    #[error("invalid cell width: {cell_width} (must be 2-32)")]
    InvalidCellWidth {
        /// The cell width that was provided.
        cell_width: usize,
    },

    /// Returned when a row or column gap exceeds 64.
    #[error("invalid {name}: {value} (must be at most 64)")]
    InvalidGap {
        /// Which gap was rejected.
        name: &'static str,
        /// The gap that was provided.
        value: usize,
    },

    /// Returned when the exclusive end year does not follow the start year.
    #[error("empty year range: {start}..{end} (end year is exclusive)")]
    EmptyYearRange { start: i32, end: i32 },

    /// Returned when January 1st of a year cannot be represented.
    #[error("year out of range: {year}")]
    YearOutOfRange { year: i32 },

    /// Returned when a year argument does not parse or is outside `1..=max`.
    #[error("invalid year value: {value} (must be 1-{max})")]
    InvalidYear { value: String, max: i32 },

    /// Returned when `--columns` is neither a positive number nor `auto`.
    #[error("invalid columns value: {value}")]
    InvalidColumnsValue { value: String },

    /// Returned when `--locale` names no locale chrono knows.
    #[error("unknown locale: {value}")]
    InvalidLocale { value: String },
}
