//! Calendar rendering pipeline: dates → years → months → blocks → rows → lines.

use chrono::{Datelike, NaiveDate};
use tracing::{debug, trace};

use crate::dates::{DateRange, first_day_of_year, same_month, same_year};
use crate::error::CalendarError;
use crate::group::{StreamingGroups, take_run};
use crate::locale::{LocaleNames, NameSource};
use crate::month::format_month_block;
use crate::row::format_row;
use crate::types::{ColumnsMode, DEFAULT_COLUMNS, Layout, MAX_AUTO_COLUMNS};

type DateKey = fn(&NaiveDate, &NaiveDate) -> bool;

/// A span of whole years to render, `year_start` inclusive, `year_end` exclusive.
#[derive(Debug, Clone)]
pub struct Calendar<N = LocaleNames> {
    year_start: i32,
    year_end: i32,
    names: N,
}

impl<N: NameSource> Calendar<N> {
    pub fn new(year_start: i32, year_end: i32, names: N) -> Result<Self, CalendarError> {
        if year_start >= year_end {
            return Err(CalendarError::EmptyYearRange {
                start: year_start,
                end: year_end,
            });
        }
        first_day_of_year(year_start)?;
        first_day_of_year(year_end)?;
        Ok(Calendar {
            year_start,
            year_end,
            names,
        })
    }

    /// Lazily render the calendar as text lines.
    ///
    /// The layout is validated up front; after that the iterator cannot fail.
    pub fn render(&self, layout: &Layout) -> Result<RenderLines<&N>, CalendarError> {
        RenderLines::new(self.year_start, self.year_end, *layout, &self.names)
    }
}

/// Render `year_start..year_end` with chrono's names for `locale`.
pub fn render(
    year_start: i32,
    year_end: i32,
    layout: &Layout,
    locale: chrono::Locale,
) -> Result<RenderLines<LocaleNames>, CalendarError> {
    let calendar = Calendar::new(year_start, year_end, LocaleNames::new(locale))?;
    RenderLines::new(
        calendar.year_start,
        calendar.year_end,
        *layout,
        calendar.names,
    )
}

/// Output lines of a calendar, pulled one row of months at a time.
pub struct RenderLines<N> {
    years: StreamingGroups<DateRange, DateKey>,
    layout: Layout,
    names: N,
    row: std::vec::IntoIter<String>,
    year_opened: bool,
}

impl<N: NameSource> RenderLines<N> {
    fn new(
        year_start: i32,
        year_end: i32,
        layout: Layout,
        names: N,
    ) -> Result<Self, CalendarError> {
        let layout = layout.validate()?;
        let dates = DateRange::new(year_start, year_end)?;
        Ok(RenderLines {
            years: StreamingGroups::new(dates, same_year as DateKey),
            layout,
            names,
            row: Vec::new().into_iter(),
            year_opened: false,
        })
    }

    /// Dates of the next month, crossing into the next year group when the
    /// current one runs out.
    fn next_month(&mut self) -> Option<Vec<NaiveDate>> {
        loop {
            if let Some(mut year) = self.years.current_group()
                && let Some(month) = take_run(&mut year, same_month)
            {
                if std::mem::take(&mut self.year_opened) {
                    debug!(year = month[0].year(), "rendering year");
                }
                return Some(month);
            }
            self.years.next_group()?;
            self.year_opened = true;
        }
    }

    fn next_row(&mut self) -> Option<Vec<String>> {
        let mut blocks = Vec::with_capacity(self.layout.columns.min(MAX_AUTO_COLUMNS));
        while blocks.len() < self.layout.columns {
            let Some(month) = self.next_month() else {
                break;
            };
            blocks.push(format_month_block(&month, &self.layout, &self.names));
        }
        if blocks.is_empty() {
            return None;
        }
        trace!(months = blocks.len(), "composing row");
        Some(format_row(&blocks, &self.layout))
    }
}

impl<N: NameSource> Iterator for RenderLines<N> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            if let Some(line) = self.row.next() {
                return Some(line);
            }
            self.row = self.next_row()?.into_iter();
        }
    }
}

impl ColumnsMode {
    /// Months per row, measuring the terminal in [`ColumnsMode::Auto`].
    pub fn months_per_row(self, layout: &Layout) -> usize {
        match self {
            ColumnsMode::Fixed(n) => n,
            ColumnsMode::Auto => {
                let month_width = layout.block_width().saturating_add(layout.column_gap);
                if let Some(term_width) = get_terminal_width() {
                    (term_width.saturating_add(layout.column_gap) / month_width)
                        .clamp(1, MAX_AUTO_COLUMNS)
                } else {
                    DEFAULT_COLUMNS
                }
            }
        }
    }
}

/// Get terminal width using terminal_size crate.
fn get_terminal_width() -> Option<usize> {
    terminal_size::terminal_size().map(|(w, _)| w.0 as usize)
}
