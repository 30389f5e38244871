//! Display date selection.
//!
//! The widget shows today's menu until the kitchen closes at 14:00, then
//! switches to the next day. Weekends and Friday afternoons jump straight to
//! the following Monday.

use chrono::{Datelike, Days, Local, NaiveDate, NaiveDateTime, Timelike, Weekday};

/// Hour at which the widget moves on to the next menu
pub const CUTOFF_HOUR: u32 = 14;

/// German weekday names, Sunday first
const WEEKDAY_NAMES: [&str; 7] = [
    "Sonntag",
    "Montag",
    "Dienstag",
    "Mittwoch",
    "Donnerstag",
    "Freitag",
    "Samstag",
];

/// Where the display date comes from for one run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateTarget {
    #[default]
    Now,                 // Host local clock
    At(NaiveDateTime),   // Pretend it is this local time
    Fixed(NaiveDate),    // Skip selection, show this day
}

impl DateTarget {
    pub fn resolve(&self) -> NaiveDate {
        match self {
            DateTarget::Now => select_display_date(Local::now().naive_local()),
            DateTarget::At(now) => select_display_date(*now),
            DateTarget::Fixed(date) => *date,
        }
    }
}

/// Pick the calendar day whose menu should be shown at `now` (local time)
pub fn select_display_date(now: NaiveDateTime) -> NaiveDate {
    let today = now.date();
    let after_cutoff = now.hour() >= CUTOFF_HOUR;

    match today.weekday() {
        Weekday::Sat | Weekday::Sun => upcoming_monday(today),
        Weekday::Fri if after_cutoff => upcoming_monday(today),
        _ if after_cutoff => add_days(today, 1),
        _ => today,
    }
}

/// `date + ((1 + 7 - weekday) mod 7)` with Sunday = 0
fn upcoming_monday(date: NaiveDate) -> NaiveDate {
    let weekday = date.weekday().num_days_from_sunday();
    add_days(date, u64::from((1 + 7 - weekday) % 7))
}

fn add_days(date: NaiveDate, days: u64) -> NaiveDate {
    // Only fails past year 262143
    date.checked_add_days(Days::new(days)).unwrap_or(date)
}

/// Date segment of the OpenMensa URL, month and day unpadded (`2026-3-9`)
pub fn api_date(date: NaiveDate) -> String {
    format!("{}-{}-{}", date.year(), date.month(), date.day())
}

pub fn weekday_name(date: NaiveDate) -> &'static str {
    WEEKDAY_NAMES[date.weekday().num_days_from_sunday() as usize]
}

/// Widget heading, e.g. `Speiseplan: Montag, 19.10.2026`
pub fn widget_title(date: NaiveDate) -> String {
    format!(
        "Speiseplan: {}, {}.{}.{}",
        weekday_name(date),
        date.day(),
        date.month(),
        date.year()
    )
}
