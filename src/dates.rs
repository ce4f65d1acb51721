//! Date range generation and the grouping keys used over it.

use std::iter::FusedIterator;

use chrono::{Datelike, NaiveDate};

use crate::error::CalendarError;

/// Every calendar day from January 1st of `start` up to, but excluding,
/// January 1st of `end`.
#[derive(Debug, Clone)]
pub struct DateRange {
    next: Option<NaiveDate>,
    end: NaiveDate,
}

impl DateRange {
    /// Build the range `[start-01-01, end-01-01)`.
    ///
    /// An empty range (`start >= end`) is not an error and yields no dates.
    pub fn new(start: i32, end: i32) -> Result<Self, CalendarError> {
        let first = first_day_of_year(start)?;
        let end = first_day_of_year(end)?;
        Ok(DateRange {
            next: (first < end).then_some(first),
            end,
        })
    }
}

impl Iterator for DateRange {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        let current = self.next?;
        self.next = current.succ_opt().filter(|d| *d < self.end);
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self
            .next
            .map(|d| self.end.signed_duration_since(d).num_days() as usize)
            .unwrap_or(0);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for DateRange {}

impl FusedIterator for DateRange {}

/// January 1st of `year`.
pub fn first_day_of_year(year: i32) -> Result<NaiveDate, CalendarError> {
    NaiveDate::from_ymd_opt(year, 1, 1).ok_or(CalendarError::YearOutOfRange { year })
}

/// 0-based index of the Sunday-start week containing `date` within its month.
pub fn week_of_month(date: NaiveDate) -> u32 {
    let first_offset = date
        .with_day(1)
        .map(|d| d.weekday().num_days_from_sunday())
        .unwrap_or(0);
    (date.day() - 1 + first_offset) / 7
}

pub fn same_year(a: &NaiveDate, b: &NaiveDate) -> bool {
    a.year() == b.year()
}

pub fn same_month(a: &NaiveDate, b: &NaiveDate) -> bool {
    same_year(a, b) && a.month() == b.month()
}

pub fn same_week(a: &NaiveDate, b: &NaiveDate) -> bool {
    same_month(a, b) && week_of_month(*a) == week_of_month(*b)
}
