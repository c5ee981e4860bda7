//! Menu date handling and business-week composition
//!
//! Menu rows are keyed by `YYYYMMDD` text. Clients may pass hyphenated
//! dates; hyphens are stripped before lookup. The cafeteria only serves
//! Monday through Friday, so the weekly view realigns weekend anchors to
//! the next Monday and skips weekends while walking forward.

use time::{Date, Duration, Month, Weekday};

/// Parse a `YYYYMMDD` or `YYYY-MM-DD` menu date. Returns `None` for
/// anything that is not exactly eight digits after stripping hyphens,
/// or that is not a real calendar date.
pub fn parse_menu_date(raw: &str) -> Option<Date> {
    let digits: String = raw.chars().filter(|c| *c != '-').collect();
    if digits.len() != 8 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let year: i32 = digits[0..4].parse().ok()?;
    let month: u8 = digits[4..6].parse().ok()?;
    let day: u8 = digits[6..8].parse().ok()?;

    Date::from_calendar_date(year, Month::try_from(month).ok()?, day).ok()
}

/// Format a date as the store key (`YYYYMMDD`).
pub fn format_menu_date(date: Date) -> String {
    format!(
        "{:04}{:02}{:02}",
        date.year(),
        date.month() as u8,
        date.day()
    )
}

fn is_weekend(date: Date) -> bool {
    matches!(date.weekday(), Weekday::Saturday | Weekday::Sunday)
}

fn next_day(date: Date) -> Date {
    date.saturating_add(Duration::DAY)
}

/// The five business days starting at `anchor`.
///
/// A weekend anchor advances to the following Monday first; weekends are
/// skipped while walking forward, so the result never contains a
/// Saturday or Sunday.
pub fn business_week(anchor: Date) -> [Date; 5] {
    let mut day = anchor;
    while is_weekend(day) {
        day = next_day(day);
    }

    let mut days = [day; 5];
    for slot in days.iter_mut().skip(1) {
        day = next_day(day);
        while is_weekend(day) {
            day = next_day(day);
        }
        *slot = day;
    }

    days
}
