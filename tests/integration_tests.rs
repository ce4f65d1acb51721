//! Integration tests for the full rendering pipeline.

use chrono::{Locale, Weekday};
use unicode_width::UnicodeWidthStr;

use gridcal::locale::{LocaleNames, NameSource};
use gridcal::{Calendar, CalendarError, Layout, render};

const CALENDAR_2022: &str = include_str!("fixtures/2022_three_columns.txt");

fn render_2022(columns: usize) -> Vec<String> {
    render(2022, 2023, &Layout::new(columns).unwrap(), Locale::en_US)
        .unwrap()
        .collect()
}

mod reference_layout {
    use super::*;

    #[test]
    fn year_2022_in_three_columns() {
        let lines = render_2022(3);
        let expected: Vec<&str> = CALENDAR_2022.lines().collect();
        assert_eq!(lines, expected);
    }

    #[test]
    fn year_2022_trimmed_head() {
        let lines = render_2022(3);
        let trimmed: Vec<&str> = lines.iter().map(|l| l.trim_end()).collect();
        assert_eq!(
            &trimmed[..4],
            &[
                "2022",
                "       January              February                March",
                " Su Mo Tu We Th Fr Sa  Su Mo Tu We Th Fr Sa  Su Mo Tu We Th Fr Sa",
                "                    1         1  2  3  4  5         1  2  3  4  5",
            ]
        );
    }

    #[test]
    fn four_rows_each_followed_by_gap() {
        let lines = render_2022(3);
        assert_eq!(lines.len(), 36);
        let gaps: Vec<usize> = lines
            .iter()
            .enumerate()
            .filter(|(_, l)| l.is_empty())
            .map(|(i, _)| i)
            .collect();
        // Jan-Mar has a sixth week and the year label; Apr-Jun has five weeks
        assert_eq!(gaps, vec![9, 17, 26, 35]);
    }

    #[test]
    fn text_lines_span_all_columns() {
        for line in render_2022(3).iter().filter(|l| !l.is_empty()) {
            assert_eq!(line.width(), 3 * 21 + 2, "{line:?}");
        }
    }
}

mod layout_options {
    use super::*;

    #[test]
    fn single_column() {
        let lines = render_2022(1);
        assert_eq!(lines[0].trim_end(), "2022");
        assert_eq!(lines[1], "       January       ");
        assert_eq!(lines[2], " Su Mo Tu We Th Fr Sa");
        assert!(lines.iter().all(|l| l.is_empty() || l.width() == 21));
    }

    #[test]
    fn incomplete_last_row() {
        // 12 months in rows of 5: the last row holds only November and December
        let lines = render_2022(5);
        let last_titles = lines
            .iter()
            .rev()
            .find(|l| l.contains("November"))
            .unwrap();
        assert!(last_titles.contains("December"));
        assert_eq!(last_titles.width(), 2 * 21 + 1);
    }

    #[test]
    fn rows_cross_year_boundaries() {
        let layout = Layout::new(5).unwrap();
        let lines: Vec<String> = render(2022, 2024, &layout, Locale::en_US)
            .unwrap()
            .collect();

        let titles = lines
            .iter()
            .find(|l| l.contains("November"))
            .unwrap();
        assert!(titles.contains("December"));
        assert!(titles.contains("January"));

        // 2023's label sits above the third block of the row holding Nov-Mar
        let label = lines
            .iter()
            .find(|l| l.contains("2023"))
            .unwrap();
        assert_eq!(&label[2 * 22..2 * 22 + 4], "2023");
        assert!(label[..2 * 22].trim().is_empty());
    }

    #[test]
    fn custom_gaps() {
        let layout = Layout {
            columns: 2,
            cell_width: 3,
            row_gap: 2,
            column_gap: 4,
        };
        let lines: Vec<String> = render(2022, 2023, &layout, Locale::en_US)
            .unwrap()
            .collect();
        assert_eq!(
            lines[1],
            format!("{}{}{}", "       January       ", " ".repeat(4), "      February       ")
        );
        assert!(lines.ends_with(&[String::new(), String::new()]));
        assert_eq!(lines.iter().filter(|l| l.is_empty()).count(), 6 * 2);
    }

    #[test]
    fn single_column_drops_blank_block_lines() {
        let layout = Layout {
            columns: 1,
            row_gap: 0,
            ..Layout::default()
        };
        let lines: Vec<String> = render(2022, 2023, &layout, Locale::en_US)
            .unwrap()
            .collect();
        // 12 months, 9 lines each, minus blank year labels (11) and padded weeks
        let padded_weeks = [0, 1, 1, 1, 1, 1, 0, 1, 1, 0, 1, 1];
        let expected = 12 * 9 - 11 - padded_weeks.iter().sum::<usize>();
        assert_eq!(lines.len(), expected);
    }
}

mod pipeline_behaviour {
    use super::*;

    #[test]
    fn render_is_repeatable() {
        let calendar = Calendar::new(2023, 2026, LocaleNames::new(Locale::en_US)).unwrap();
        let layout = Layout::new(4).unwrap();
        let first: Vec<String> = calendar.render(&layout).unwrap().collect();
        let second: Vec<String> = calendar.render(&layout).unwrap().collect();
        assert_eq!(first, second);
        assert!(!first.is_empty());
    }

    #[test]
    fn stops_early_on_huge_range() {
        let lines: Vec<String> = render(1, 9000, &Layout::default(), Locale::en_US)
            .unwrap()
            .take(3)
            .collect();
        assert_eq!(lines[0].trim_end(), "1");
        assert!(lines[1].contains("January"));
    }

    #[test]
    fn injected_names() {
        struct Shouting;
        impl NameSource for Shouting {
            fn weekday_short(&self, weekday: Weekday) -> String {
                format!("{weekday:?}").to_uppercase()
            }
            fn month_full(&self, month: u32) -> String {
                format!("MONTH {month}")
            }
        }

        let calendar = Calendar::new(2022, 2023, Shouting).unwrap();
        let lines: Vec<String> = calendar.render(&Layout::new(1).unwrap()).unwrap().collect();
        assert_eq!(lines[1], "       MONTH 1       ");
        assert_eq!(lines[2], " SU MO TU WE TH FR SA");
    }

    #[test]
    fn localized_render() {
        let lines: Vec<String> = render(2022, 2023, &Layout::new(3).unwrap(), Locale::ru_RU)
            .unwrap()
            .collect();
        assert!(lines[1].contains("Январь"));
        assert!(lines[1].contains("Март"));
    }
}

mod configuration_errors {
    use super::*;

    #[test]
    fn empty_year_range() {
        let err = Calendar::new(2023, 2022, LocaleNames::default()).unwrap_err();
        assert_eq!(err, CalendarError::EmptyYearRange { start: 2023, end: 2022 });
        assert!(Calendar::new(2022, 2022, LocaleNames::default()).is_err());
    }

    #[test]
    fn year_out_of_range() {
        let err = Calendar::new(2022, i32::MAX, LocaleNames::default()).unwrap_err();
        assert_eq!(err, CalendarError::YearOutOfRange { year: i32::MAX });
    }

    #[test]
    fn invalid_layout_fails_before_rendering() {
        let calendar = Calendar::new(2022, 2023, LocaleNames::default()).unwrap();
        let zero_columns = Layout {
            columns: 0,
            ..Layout::default()
        };
        assert!(matches!(
            calendar.render(&zero_columns),
            Err(CalendarError::InvalidColumns)
        ));

        let narrow = Layout {
            cell_width: 1,
            ..Layout::default()
        };
        assert!(matches!(
            render(2022, 2023, &narrow, Locale::en_US),
            Err(CalendarError::InvalidCellWidth { cell_width: 1 })
        ));
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            CalendarError::InvalidCellWidth { cell_width: 1 }.to_string(),
            "invalid cell width: 1 (must be 2-32)"
        );
        assert_eq!(
            CalendarError::EmptyYearRange { start: 5, end: 5 }.to_string(),
            "empty year range: 5..5 (end year is exclusive)"
        );
        assert_eq!(
            CalendarError::InvalidGap {
                name: "column gap",
                value: 65
            }
            .to_string(),
            "invalid column gap: 65 (must be at most 64)"
        );
    }
}
