// Date utility functions
// Calendar arithmetic for the month grid, delegated to chrono

use chrono::format::{Item, StrftimeItems};
use chrono::{Datelike, Months, NaiveDate};

/// First day of a month given a zero-based month index.
///
/// Returns `None` when `month0` is not in `0..12` or the year is outside
/// chrono's representable range.
pub fn first_of_month(year: i32, month0: u32) -> Option<NaiveDate> {
    if month0 > 11 {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month0 + 1, 1)
}

/// Number of days in a month (zero-based month index).
pub fn days_in_month(year: i32, month0: u32) -> Option<u32> {
    let first = first_of_month(year, month0)?;
    let next = first.checked_add_months(Months::new(1))?;
    Some(next.signed_duration_since(first).num_days() as u32)
}

/// Column index of `date` in a week starting on `first_day_of_week`
/// (0 = Sunday, 1 = Monday, ...).
pub fn weekday_index(date: NaiveDate, first_day_of_week: u8) -> u32 {
    let weekday = date.weekday().num_days_from_sunday();
    (weekday + 7 - u32::from(first_day_of_week % 7)) % 7
}

/// Shift a (year, zero-based month) pair by `delta` months.
pub fn shift_month(year: i32, month0: u32, delta: i32) -> (i32, u32) {
    let total = year as i64 * 12 + month0 as i64 + delta as i64;
    (total.div_euclid(12) as i32, total.rem_euclid(12) as u32)
}

/// Iterate every date from `start` to `end` inclusive. Empty when `end < start`.
pub fn days_inclusive(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    start
        .iter_days()
        .take_while(move |day| *day <= end)
}

/// Whether `date` falls inside the given (year, zero-based month).
pub fn is_in_month(date: NaiveDate, year: i32, month0: u32) -> bool {
    date.year() == year && date.month0() == month0
}

/// Parse a `YYYY-MM` string into (year, zero-based month).
pub fn parse_year_month(value: &str) -> Option<(i32, u32)> {
    let (year, month) = value.trim().split_once('-')?;
    let year = year.parse::<i32>().ok()?;
    let month = month.parse::<u32>().ok()?;
    if !(1..=12).contains(&month) {
        return None;
    }
    Some((year, month - 1))
}

/// Whether `format` is a usable chrono date format string.
pub fn is_valid_date_format(format: &str) -> bool {
    !format.trim().is_empty()
        && !StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
}
