//! Rendering one month into a fixed-height block of text lines.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::dates::same_week;
use crate::group::group_consecutive;
use crate::locale::NameSource;
use crate::text::{center, fit, left};
use crate::types::{LINES_PER_MONTH, Layout, WEEK_DAYS, WEEK_LINES_PER_MONTH};

/// Render the dates of one month as exactly [`LINES_PER_MONTH`] lines, each
/// [`Layout::block_width`] columns wide:
///
/// 1. the year, only on January blocks (blank otherwise)
/// 2. the month name, centered
/// 3. the weekday header
/// 4. six week lines, blank-padded when the month spans fewer weeks
///
/// `dates` must be non-empty and belong to a single month.
pub fn format_month_block(
    dates: &[NaiveDate],
    layout: &Layout,
    names: &impl NameSource,
) -> Vec<String> {
    let width = layout.block_width();
    let mut lines = Vec::with_capacity(LINES_PER_MONTH);

    let Some(first) = dates.first() else {
        lines.resize(LINES_PER_MONTH, " ".repeat(width));
        return lines;
    };

    let year_label = if first.month() == 1 {
        first.year().to_string()
    } else {
        String::new()
    };
    lines.push(left(&year_label, width));
    lines.push(center(&names.month_full(first.month()), width));
    lines.push(format_weekday_header(layout, names));

    lines.extend(
        group_consecutive(dates.iter().copied(), same_week)
            .take(WEEK_LINES_PER_MONTH)
            .map(|week| format_week(&week, layout)),
    );
    lines.resize(LINES_PER_MONTH, " ".repeat(width));

    lines
}

/// Short weekday names, Sunday first, each right-aligned under its day column.
pub fn format_weekday_header(layout: &Layout, names: &impl NameSource) -> String {
    let labels: Vec<String> = WEEK_DAYS
        .iter()
        .map(|&weekday| fit(&names.weekday_short(weekday), layout.cell_width - 1))
        .collect();
    format!(" {}", labels.join(" "))
}

/// One week line: blank cells before the first day and after the last day,
/// so every day sits under its weekday.
pub fn format_week(week: &[NaiveDate], layout: &Layout) -> String {
    let cell = layout.cell_width;
    let (Some(first), Some(last)) = (week.first(), week.last()) else {
        return " ".repeat(layout.block_width());
    };

    let leading = column_of(first.weekday());
    let trailing = WEEK_DAYS.len() - 1 - column_of(last.weekday());

    let mut line = String::with_capacity(layout.block_width());
    line.push_str(&" ".repeat(leading * cell));
    for date in week {
        line.push_str(&fit(&date.day().to_string(), cell));
    }
    line.push_str(&" ".repeat(trailing * cell));
    line
}

fn column_of(weekday: Weekday) -> usize {
    weekday.num_days_from_sunday() as usize
}
