//! Strict `YYYY-MM-DD` text for calendar days.

use std::str::FromStr;

use crate::date::CalendarDay;
use crate::error::CalendarError;

/// Parses a strict `YYYY-MM-DD` date.
///
/// The text must be exactly four digits, a dash, two digits, a dash and two
/// digits. The parsed components are then built into a day leniently, and
/// the text is accepted only if that day's components round-trip to the
/// parsed ones. This rejects `2024-02-30`, `2024-13-01` and `2024-00-10`.
///
/// Years `0000` to `0099` are taken literally and accepted. Date
/// constructors that map two-digit years onto 1900-1999 would fail the
/// round-trip and reject them.
///
/// # Example
///
/// ```
/// use turtle_calendar::{CalendarDay, parse_iso};
///
/// assert_eq!(parse_iso("2026-02-17"), CalendarDay::new(2026, 2, 17).ok());
/// assert_eq!(parse_iso("2024-02-30"), None);
/// ```
pub fn parse_iso(text: &str) -> Option<CalendarDay> {
    let bytes = text.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }
    let year = digits(&bytes[0..4])?;
    let month = digits(&bytes[5..7])?;
    let day = digits(&bytes[8..10])?;

    let parsed = CalendarDay::from_ymd_lenient(year as i32, i64::from(month), i64::from(day))?;
    if parsed.year() != year as i32 || parsed.month() != month || parsed.day() != day {
        return None;
    }
    Some(parsed)
}

/// Formats a day as zero-padded `YYYY-MM-DD`.
pub fn format_iso(day: CalendarDay) -> String {
    day.to_string()
}

fn digits(bytes: &[u8]) -> Option<u32> {
    bytes.iter().try_fold(0u32, |acc, &b| {
        b.is_ascii_digit().then(|| acc * 10 + u32::from(b - b'0'))
    })
}

impl FromStr for CalendarDay {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_iso(s).ok_or_else(|| CalendarError::InvalidIsoDate {
            input: s.to_string(),
        })
    }
}
