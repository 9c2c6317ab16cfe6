//! Local calendar day with no time-of-day component.

use std::fmt;

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone, Utc};
use serde::{Serialize, Serializer};

use crate::error::CalendarError;
use crate::month_day::MonthDay;

/// Milliseconds in one civil day.
pub const DAY_MS: i64 = 24 * 60 * 60 * 1000;

/// A civil calendar day: year, month and day only.
///
/// Two values are equal iff their year, month and day match. Values are
/// never mutated; every operation returns a new day.
///
/// Supported years are [`MIN_YEAR`]..=[`MAX_YEAR`]. Conversions from chrono
/// values saturate to that range, which leaves room for the year after any
/// supported day to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDay(NaiveDate);

/// Earliest supported year.
pub const MIN_YEAR: i32 = -9999;

/// Latest supported year.
pub const MAX_YEAR: i32 = 9999;

impl CalendarDay {
    /// Creates a `CalendarDay` from year, month and day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::YearOutOfRange`] outside
    /// [`MIN_YEAR`]..=[`MAX_YEAR`], [`CalendarError::InvalidMonth`] if `month`
    /// is not in 1..=12 and
    /// [`CalendarError::InvalidDay`] if `day` does not exist in that month of
    /// that year.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, CalendarError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(CalendarError::YearOutOfRange { year });
        }
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth { month });
        }
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or(CalendarError::InvalidDay {
                day,
                month,
                max_day: days_in_month(year, month),
            })
    }

    /// Builds a day the way a lenient civil-date constructor does: months
    /// outside 1..=12 carry into neighbouring years and days past the end of
    /// the month (or below 1) carry into neighbouring months.
    ///
    /// Returns `None` only if the result leaves chrono's supported range. The
    /// result is not limited to [`MIN_YEAR`]..=[`MAX_YEAR`], so the years
    /// next to a supported day always resolve.
    pub fn from_ymd_lenient(year: i32, month: i64, day: i64) -> Option<Self> {
        let months = i64::from(year) * 12 + (month - 1);
        let y = i32::try_from(months.div_euclid(12)).ok()?;
        let m = u32::try_from(months.rem_euclid(12) + 1).ok()?;
        NaiveDate::from_ymd_opt(y, m, 1)?
            .checked_add_signed(TimeDelta::try_days(day - 1)?)
            .map(Self)
    }

    /// First supported day, `-9999-01-01`.
    pub fn earliest() -> Self {
        let date = NaiveDate::from_ymd_opt(MIN_YEAR, 1, 1);
        Self(date.expect("MIN_YEAR is within chrono's range"))
    }

    /// Last supported day, `9999-12-31`.
    pub fn latest() -> Self {
        let date = NaiveDate::from_ymd_opt(MAX_YEAR, 12, 31);
        Self(date.expect("MAX_YEAR is within chrono's range"))
    }

    fn saturating(date: NaiveDate) -> Self {
        Self(date).clamp(Self::earliest(), Self::latest())
    }

    /// Returns today's date in the system's local time zone.
    pub fn today() -> Self {
        normalize(Local::now())
    }

    /// Returns the underlying chrono date.
    pub fn naive(self) -> NaiveDate {
        self.0
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.0.year()
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u32 {
        self.0.month()
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u32 {
        self.0.day()
    }

    /// Returns the `(month, day)` anniversary of this day.
    pub fn month_day(self) -> MonthDay {
        MonthDay::from(self)
    }

    /// Returns the day `days` days after this one (before, if negative).
    pub fn add_days(self, days: i64) -> Self {
        Self(self.0 + TimeDelta::days(days))
    }

    /// Returns the following day.
    pub fn succ(self) -> Self {
        self.add_days(1)
    }

    /// Returns the preceding day.
    pub fn pred(self) -> Self {
        self.add_days(-1)
    }

    /// Returns the instant at 00:00 of this day, taking the civil frame as UTC.
    pub fn midnight_utc(self) -> DateTime<Utc> {
        self.0.and_time(NaiveTime::MIN).and_utc()
    }

    /// Returns the instant at 12:00 of this day, taking the civil frame as UTC.
    pub fn noon_utc(self) -> DateTime<Utc> {
        self.midnight_utc() + TimeDelta::hours(12)
    }
}

impl From<NaiveDate> for CalendarDay {
    fn from(date: NaiveDate) -> Self {
        Self::saturating(date)
    }
}

impl fmt::Display for CalendarDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year(), self.month(), self.day())
    }
}

impl Serialize for CalendarDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Values that carry a civil calendar day.
///
/// Zoned date-times contribute the date as seen in their own zone.
pub trait IntoCalendarDay {
    /// Drops any time-of-day component, keeping year, month and day.
    fn into_calendar_day(self) -> CalendarDay;
}

impl IntoCalendarDay for CalendarDay {
    fn into_calendar_day(self) -> CalendarDay {
        self
    }
}

impl IntoCalendarDay for NaiveDate {
    fn into_calendar_day(self) -> CalendarDay {
        CalendarDay::saturating(self)
    }
}

impl IntoCalendarDay for NaiveDateTime {
    fn into_calendar_day(self) -> CalendarDay {
        CalendarDay::saturating(self.date())
    }
}

impl<Tz: TimeZone> IntoCalendarDay for DateTime<Tz> {
    fn into_calendar_day(self) -> CalendarDay {
        CalendarDay::saturating(self.date_naive())
    }
}

impl<Tz: TimeZone> IntoCalendarDay for &DateTime<Tz> {
    fn into_calendar_day(self) -> CalendarDay {
        CalendarDay::saturating(self.date_naive())
    }
}

/// Normalizes a date or date-time to its calendar day.
pub fn normalize(value: impl IntoCalendarDay) -> CalendarDay {
    value.into_calendar_day()
}

/// Signed number of calendar days from `start` to `end`.
///
/// Both days are taken at UTC midnight, so no daylight-saving shift can
/// produce an off-by-one.
pub fn day_count(start: CalendarDay, end: CalendarDay) -> i64 {
    let start_ms = start.midnight_utc().timestamp_millis();
    let end_ms = end.midnight_utc().timestamp_millis();
    (end_ms - start_ms).div_euclid(DAY_MS)
}

/// Returns `true` if both values fall on the same calendar day.
pub fn is_same_day(a: impl IntoCalendarDay, b: impl IntoCalendarDay) -> bool {
    normalize(a) == normalize(b)
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first| first.pred_opt())
        .map_or(31, |last| last.day())
}
