//! Command-line argument parsing using clap.
//!
//! Arguments: `[start_year [end_year]]`, end year exclusive.

use chrono::{Datelike, Locale};
use clap::{ArgAction, Parser, ValueHint};

use crate::error::CalendarError;
use crate::locale::{parse_locale, system_locale};
use crate::types::{
    ColumnsMode, DEFAULT_CELL_WIDTH, DEFAULT_COLUMN_GAP, DEFAULT_ROW_GAP, Layout, MAX_YEAR,
    MIN_YEAR,
};

#[derive(Parser, Debug)]
#[command(name = "gridcal")]
#[command(about = "Displays a multi-year calendar as a grid of months", long_about = None)]
#[command(version)]
#[command(after_help = HELP_MESSAGE)]
pub struct Args {
    /// First year to display (1-9999, default: current year).
    #[arg(index = 1, value_name = "start", value_hint = ValueHint::Other)]
    pub start_year: Option<String>,

    /// Year to stop before (2-10000, default: start + 1).
    #[arg(index = 2, value_name = "end", value_hint = ValueHint::Other)]
    pub end_year: Option<String>,

    /// Months per row (or "auto" for terminal width).
    #[arg(
        short = 'c',
        long = "columns",
        default_value = "3",
        help_heading = "Layout options",
        value_name = "num"
    )]
    pub columns: String,

    /// Characters per day cell, including the separating space (2-32).
    #[arg(long, default_value_t = DEFAULT_CELL_WIDTH, help_heading = "Layout options", value_name = "width")]
    pub cell_width: usize,

    /// Blank lines between rows of months (at most 64).
    #[arg(long, default_value_t = DEFAULT_ROW_GAP, help_heading = "Layout options", value_name = "lines")]
    pub row_gap: usize,

    /// Spaces between adjacent months (at most 64).
    #[arg(long, default_value_t = DEFAULT_COLUMN_GAP, help_heading = "Layout options", value_name = "spaces")]
    pub column_gap: usize,

    /// Locale for weekday and month names (default: from LC_ALL, LC_TIME or LANG).
    #[arg(short = 'L', long, help_heading = "Output options", value_name = "locale")]
    pub locale: Option<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short = 'v', long, action = ArgAction::Count, help_heading = "Output options")]
    pub verbose: u8,
}

/// Help message displayed with --help.
const HELP_MESSAGE: &str = "Examples:
  gridcal                   Display the current year
  gridcal 2022              Display 2022
  gridcal 2022 2025         Display 2022 through 2024
  gridcal -c 4 2022         Four months per row
  gridcal -c auto 2022      Fit months to the terminal width
  gridcal -L de_DE 2022     German month and weekday names";

impl Args {
    pub fn parse() -> Self {
        Parser::parse()
    }
}

/// Everything needed for one render, resolved from the command line.
#[derive(Debug, Clone, Copy)]
pub struct CalConfig {
    pub year_start: i32,
    pub year_end: i32,
    pub layout: Layout,
    pub locale: Locale,
}

impl CalConfig {
    pub fn new(args: &Args) -> Result<Self, CalendarError> {
        let year_start = match args.start_year.as_deref() {
            Some(s) => parse_year(s)?,
            None => get_today_date().year(),
        };
        let year_end = match args.end_year.as_deref() {
            Some(s) => parse_end_year(s)?,
            None => year_start + 1,
        };

        let columns = match args.columns.as_str() {
            "auto" => ColumnsMode::Auto,
            s => {
                let n = s
                    .parse::<usize>()
                    .map_err(|_| CalendarError::InvalidColumnsValue {
                        value: s.to_string(),
                    })?;
                ColumnsMode::Fixed(n)
            }
        };

        let mut layout = Layout {
            columns: 1,
            cell_width: args.cell_width,
            row_gap: args.row_gap,
            column_gap: args.column_gap,
        }
        .validate()?;
        layout.columns = columns.months_per_row(&layout);
        let layout = layout.validate()?;

        let locale = match args.locale.as_deref() {
            Some(name) => parse_locale(name).ok_or_else(|| CalendarError::InvalidLocale {
                value: name.to_string(),
            })?,
            None => system_locale(),
        };

        Ok(CalConfig {
            year_start,
            year_end,
            layout,
            locale,
        })
    }
}

/// Parse a year argument in 1..=9999.
pub fn parse_year(s: &str) -> Result<i32, CalendarError> {
    parse_year_up_to(s, MAX_YEAR)
}

/// Parse the exclusive end year; 10000 is allowed so 9999 can be rendered.
pub fn parse_end_year(s: &str) -> Result<i32, CalendarError> {
    parse_year_up_to(s, MAX_YEAR + 1)
}

fn parse_year_up_to(s: &str, max: i32) -> Result<i32, CalendarError> {
    s.parse::<i32>()
        .ok()
        .filter(|year| (MIN_YEAR..=max).contains(year))
        .ok_or_else(|| CalendarError::InvalidYear {
            value: s.to_string(),
            max,
        })
}

/// Get today's date, respecting GRIDCAL_TEST_TIME environment variable for testing.
pub fn get_today_date() -> chrono::NaiveDate {
    if let Ok(test_time) = std::env::var("GRIDCAL_TEST_TIME")
        && let Ok(date) = chrono::NaiveDate::parse_from_str(&test_time, "%Y-%m-%d")
    {
        return date;
    }
    chrono::Local::now().date_naive()
}
