//! Years that start on a fixed month/day instead of January 1.

use serde::Serialize;

use crate::date::{CalendarDay, day_count};
use crate::month_day::MonthDay;

/// The half-open span `[start, end)` of a year anchored on a marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnchoredYear {
    /// Gregorian year in which `start` falls.
    pub anchor_year: i32,
    /// First day of the year (inclusive).
    pub start: CalendarDay,
    /// First day of the following year (exclusive).
    pub end: CalendarDay,
}

impl AnchoredYear {
    /// Number of days in the year (365 or 366).
    pub fn len_days(&self) -> i64 {
        day_count(self.start, self.end)
    }

    /// Returns `true` if `day` lies in `[start, end)`.
    pub fn contains(&self, day: CalendarDay) -> bool {
        (self.start..self.end).contains(&day)
    }
}

/// Computes the anchored year that contains `day`.
///
/// The year starts at the most recent occurrence of `marker` on or before
/// `day` and ends at the next one.
///
/// # Examples
///
/// ```
/// use turtle_calendar::{CalendarDay, MonthDay, anchored_year};
///
/// let marker = MonthDay::of(2, 17);
/// let year = anchored_year(CalendarDay::new(2026, 1, 10).unwrap(), marker);
/// assert_eq!(year.start, CalendarDay::new(2025, 2, 17).unwrap());
/// assert_eq!(year.end, CalendarDay::new(2026, 2, 17).unwrap());
/// ```
pub fn anchored_year(day: CalendarDay, marker: MonthDay) -> AnchoredYear {
    let this_year = marker.in_year(day.year());
    let anchor_year = if day < this_year {
        day.year() - 1
    } else {
        day.year()
    };
    AnchoredYear {
        anchor_year,
        start: marker.in_year(anchor_year),
        end: marker.in_year(anchor_year + 1),
    }
}
