//! Month/day anniversary markers.

use std::fmt;

use serde::Serialize;

use crate::date::CalendarDay;
use crate::error::CalendarError;

/// Longest length of each month in any year (index 0 unused, index 1 = January).
pub(crate) const MAX_DAYS_PER_MONTH: [u32; 13] = [0, 31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// A month/day pair that recurs every year, such as a cycle start marker.
///
/// February 29 is a valid marker. In common years it resolves to March 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct MonthDay {
    month: u32,
    day: u32,
}

impl MonthDay {
    /// Creates a new `MonthDay`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12.
    /// Returns [`CalendarError::InvalidDay`] if `day` cannot occur in `month`
    /// in any year.
    pub fn new(month: u32, day: u32) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth { month });
        }
        let max_day = MAX_DAYS_PER_MONTH[month as usize];
        if !(1..=max_day).contains(&day) {
            return Err(CalendarError::InvalidDay {
                day,
                month,
                max_day,
            });
        }
        Ok(Self { month, day })
    }

    /// Const constructor for static marker tables.
    ///
    /// Panics (at compile time when used in a `const`) on an invalid pair.
    pub const fn of(month: u32, day: u32) -> Self {
        assert!(month >= 1 && month <= 12, "month must be 1..=12");
        assert!(
            day >= 1 && day <= MAX_DAYS_PER_MONTH[month as usize],
            "day out of range for month"
        );
        Self { month, day }
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u32 {
        self.month
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u32 {
        self.day
    }

    /// Resolves the marker in `year`.
    ///
    /// A day past the end of the month carries into the next month, so
    /// February 29 becomes March 1 in common years.
    ///
    /// Resolves for any year within a few years of `MIN_YEAR..=MAX_YEAR`;
    /// chrono covers far more.
    pub fn in_year(self, year: i32) -> CalendarDay {
        CalendarDay::from_ymd_lenient(year, i64::from(self.month), i64::from(self.day))
            .expect("validated month/day resolves for every year next to a supported day")
    }
}

impl From<CalendarDay> for MonthDay {
    fn from(day: CalendarDay) -> Self {
        Self {
            month: day.month(),
            day: day.day(),
        }
    }
}

impl fmt::Display for MonthDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.month, self.day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_valid() {
        let md = MonthDay::new(2, 17).unwrap();
        assert_eq!(md.month(), 2);
        assert_eq!(md.day(), 17);
    }

    #[test]
    fn new_accepts_feb_29() {
        assert!(MonthDay::new(2, 29).is_ok());
    }

    #[test]
    fn new_invalid_month_zero() {
        assert_eq!(
            MonthDay::new(0, 1).unwrap_err(),
            CalendarError::InvalidMonth { month: 0 }
        );
    }

    #[test]
    fn new_invalid_day_32() {
        assert_eq!(
            MonthDay::new(1, 32).unwrap_err(),
            CalendarError::InvalidDay {
                day: 32,
                month: 1,
                max_day: 31,
            }
        );
    }

    #[test]
    fn new_invalid_feb_30() {
        assert_eq!(
            MonthDay::new(2, 30).unwrap_err(),
            CalendarError::InvalidDay {
                day: 30,
                month: 2,
                max_day: 29,
            }
        );
    }

    #[test]
    fn const_constructor_matches_new() {
        const MARKER: MonthDay = MonthDay::of(8, 1);
        assert_eq!(MARKER, MonthDay::new(8, 1).unwrap());
    }

    #[test]
    fn in_year_resolves_just_outside_supported_years() {
        let next = MonthDay::of(12, 31).in_year(crate::date::MAX_YEAR + 1);
        assert_eq!(next.to_string(), "10000-12-31");
        let prev = MonthDay::of(2, 29).in_year(crate::date::MIN_YEAR - 1);
        assert_eq!(prev.year(), -10_000);
    }

    #[test]
    fn in_year_plain() {
        let md = MonthDay::of(2, 17);
        assert_eq!(md.in_year(2026), CalendarDay::new(2026, 2, 17).unwrap());
    }

    #[test]
    fn in_year_feb_29_rolls_in_common_years() {
        let md = MonthDay::of(2, 29);
        assert_eq!(md.in_year(2024), CalendarDay::new(2024, 2, 29).unwrap());
        assert_eq!(md.in_year(2025), CalendarDay::new(2025, 3, 1).unwrap());
        assert_eq!(md.in_year(1900), CalendarDay::new(1900, 3, 1).unwrap());
        assert_eq!(md.in_year(2000), CalendarDay::new(2000, 2, 29).unwrap());
    }

    #[test]
    fn from_calendar_day() {
        let md = MonthDay::from(CalendarDay::new(2024, 3, 20).unwrap());
        assert_eq!(md, MonthDay::of(3, 20));
    }

    #[test]
    fn display() {
        assert_eq!(MonthDay::of(1, 15).to_string(), "1/15");
    }

    #[test]
    fn table_integrity_max_days() {
        let total: u32 = MAX_DAYS_PER_MONTH[1..=12].iter().sum();
        assert_eq!(total, 366);
    }
}
