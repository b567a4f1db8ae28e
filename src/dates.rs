/// Calendar-day utilities
///
/// All date handling in the engine goes through `NaiveDate`: a plain
/// year/month/day value with no time-of-day and no timezone. Keeping the
/// arithmetic here in whole calendar days avoids the off-by-one errors
/// that timezone-aware date types invite.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::domain::DomainError;

/// ISO date format used everywhere entries and configs store dates
const DAY_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` string into a calendar day
///
/// Malformed input is an error, never coerced to a default date.
pub fn parse_day(s: &str) -> Result<NaiveDate, DomainError> {
    NaiveDate::parse_from_str(s.trim(), DAY_FORMAT)
        .map_err(|_| DomainError::InvalidDate(s.to_string()))
}

/// Format a calendar day as an ISO `YYYY-MM-DD` string
pub fn format_day(day: NaiveDate) -> String {
    day.format(DAY_FORMAT).to_string()
}

/// Day of week as a number, 0 = Sunday through 6 = Saturday
///
/// This matches the weekday numbering habit frontmatter uses.
pub fn day_of_week(day: NaiveDate) -> u8 {
    day.weekday().num_days_from_sunday() as u8
}

/// Convert a frontmatter weekday number (0 = Sunday) to a `Weekday`
pub fn weekday_from_index(index: u8) -> Result<Weekday, DomainError> {
    match index {
        0 => Ok(Weekday::Sun),
        1 => Ok(Weekday::Mon),
        2 => Ok(Weekday::Tue),
        3 => Ok(Weekday::Wed),
        4 => Ok(Weekday::Thu),
        5 => Ok(Weekday::Fri),
        6 => Ok(Weekday::Sat),
        other => Err(DomainError::InvalidFrequency(format!(
            "weekday number must be 0-6, got {}",
            other
        ))),
    }
}

/// Signed number of whole days from `a` to `b` (`b - a`)
pub fn days_between(a: NaiveDate, b: NaiveDate) -> i64 {
    (b - a).num_days()
}

/// All calendar days from `start` through `end`, inclusive on both ends
///
/// Empty when `start > end`. The `reverse` flag flips iteration order
/// only; it never changes which dates are included.
pub fn day_range(start: NaiveDate, end: NaiveDate, reverse: bool) -> Vec<NaiveDate> {
    if start > end {
        return Vec::new();
    }

    let mut days: Vec<NaiveDate> = start.iter_days().take_while(|d| *d <= end).collect();
    if reverse {
        days.reverse();
    }
    days
}
