//! Localized weekday and month names.

use chrono::{Days, Locale, NaiveDate, Weekday};

/// Supplies display names for headers and titles.
pub trait NameSource {
    /// Abbreviated weekday name, e.g. "Sun".
    fn weekday_short(&self, weekday: Weekday) -> String;

    /// Full month name in nominative case, `month` in 1..=12.
    fn month_full(&self, month: u32) -> String;
}

impl<N: NameSource + ?Sized> NameSource for &N {
    fn weekday_short(&self, weekday: Weekday) -> String {
        (**self).weekday_short(weekday)
    }

    fn month_full(&self, month: u32) -> String {
        (**self).month_full(month)
    }
}

/// Names taken from chrono's locale tables.
#[derive(Debug, Clone, Copy)]
pub struct LocaleNames {
    locale: Locale,
}

impl LocaleNames {
    pub fn new(locale: Locale) -> Self {
        LocaleNames { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }
}

impl Default for LocaleNames {
    fn default() -> Self {
        LocaleNames::new(Locale::en_US)
    }
}

impl NameSource for LocaleNames {
    fn weekday_short(&self, weekday: Weekday) -> String {
        // 2000-01-03 is a Monday
        let offset = Days::new(weekday.num_days_from_monday() as u64);
        NaiveDate::from_ymd_opt(2000, 1, 3)
            .and_then(|d| d.checked_add_days(offset))
            .map(|d| d.format_localized("%a", self.locale).to_string())
            .unwrap_or_default()
    }

    fn month_full(&self, month: u32) -> String {
        let index = month.clamp(1, 12) as usize - 1;
        match self.locale {
            Locale::ru_RU => RU_MONTHS[index].to_string(),
            Locale::uk_UA => UK_MONTHS[index].to_string(),
            Locale::be_BY => BE_MONTHS[index].to_string(),
            _ => NaiveDate::from_ymd_opt(2000, index as u32 + 1, 1)
                .map(|d| d.format_localized("%B", self.locale).to_string())
                .unwrap_or_default(),
        }
    }
}

// chrono's %B is genitive for these locales
const RU_MONTHS: [&str; 12] = [
    "Январь",
    "Февраль",
    "Март",
    "Апрель",
    "Май",
    "Июнь",
    "Июль",
    "Август",
    "Сентябрь",
    "Октябрь",
    "Ноябрь",
    "Декабрь",
];

const UK_MONTHS: [&str; 12] = [
    "Січень",
    "Лютий",
    "Березень",
    "Квітень",
    "Травень",
    "Червень",
    "Липень",
    "Серпень",
    "Вересень",
    "Жовтень",
    "Листопад",
    "Грудень",
];

const BE_MONTHS: [&str; 12] = [
    "Студзень",
    "Люты",
    "Сакавік",
    "Красавік",
    "Май",
    "Чэрвень",
    "Ліпень",
    "Жнівень",
    "Верасень",
    "Кастрычнік",
    "Лістапад",
    "Снежань",
];

/// Parse a locale name such as `de_DE`, `de_DE.UTF-8` or `sr_RS@latin`.
pub fn parse_locale(name: &str) -> Option<Locale> {
    let name = name.split('.').next()?.split('@').next()?;
    name.parse().ok()
}

/// Get system locale from environment (LC_ALL > LC_TIME > LANG > en_US).
pub fn system_locale() -> Locale {
    ["LC_ALL", "LC_TIME", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find(|value| !value.is_empty())
        .and_then(|value| parse_locale(&value))
        .unwrap_or(Locale::en_US)
}
