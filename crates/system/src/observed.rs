//! Observed lunar model: months follow approximate new moons.
//!
//! A year starts on the first mean new moon on or after the tradition's
//! lunar marker and ends where the next year starts. Each lunation start is
//! the previous start's midnight plus one mean synodic month, truncated to
//! its day, so every lunation but the last is 29 days long. The last one
//! absorbs the rest of the year.

use chrono::{DateTime, TimeDelta, Utc};
use serde::Serialize;
use tracing::{debug, trace};
use turtle_calendar::{CalendarDay, IntoCalendarDay, MonthDay, day_count, normalize};
use turtle_lunar::{DAY_MS, SYNODIC_MONTH_DAYS, days_until_new_moon};

use crate::model::CalendarModel;
use crate::result::TurtleSystemDate;
use crate::tradition::AnchorSelection;
use crate::{DAYS_PER_TURTLE_MONTH, TURTLE_MONTHS};

/// Upper bound on lunation starts collected for one year.
pub const MAX_LUNATIONS: usize = 13;

/// An approximate new moon: the mean instant and the civil day it falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NewMoonEstimate {
    /// Mean new-moon instant.
    pub instant: DateTime<Utc>,
    /// UTC civil day of `instant`.
    pub day: CalendarDay,
}

impl NewMoonEstimate {
    fn at(instant: DateTime<Utc>) -> Self {
        Self {
            instant,
            day: normalize(instant),
        }
    }
}

/// One lunation `[start, end)` inside an observed year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Lunation {
    /// 1-based month number.
    pub index: u32,
    pub start: CalendarDay,
    pub end: CalendarDay,
}

impl Lunation {
    /// Length in days.
    pub fn len_days(&self) -> i64 {
        day_count(self.start, self.end)
    }

    /// Returns `true` if `day` lies in `[start, end)`.
    pub fn contains(&self, day: CalendarDay) -> bool {
        (self.start..self.end).contains(&day)
    }
}

/// A resolved observed year with its lunations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ObservedYear {
    /// Gregorian year whose marker produced `start`.
    pub anchor_year: i32,
    pub start: CalendarDay,
    pub end: CalendarDay,
    pub lunations: Vec<Lunation>,
}

impl ObservedYear {
    /// Days in `[start, end)`.
    pub fn len_days(&self) -> i64 {
        day_count(self.start, self.end)
    }

    /// Lunation containing `day`.
    ///
    /// Falls back to the last lunation when no interval matches, which only
    /// happens for days outside the year.
    pub fn lunation_for(&self, day: CalendarDay) -> &Lunation {
        self.lunations
            .iter()
            .find(|l| l.contains(day))
            .or_else(|| self.lunations.last())
            .expect("an observed year has at least one lunation")
    }
}

fn days_to_delta(days: f64) -> TimeDelta {
    TimeDelta::milliseconds((days * DAY_MS) as i64)
}

/// First mean new moon on or after `day`, searched from the day's noon.
pub fn next_new_moon_on_or_after(day: CalendarDay) -> NewMoonEstimate {
    let noon = day.noon_utc();
    NewMoonEstimate::at(noon + days_to_delta(days_until_new_moon(noon)))
}

/// Start of the observed year whose marker falls in `year`.
pub fn lunar_year_start(year: i32, marker: MonthDay) -> NewMoonEstimate {
    next_new_moon_on_or_after(marker.in_year(year))
}

/// Enumerates lunation start days from `year_start` up to `year_end`.
///
/// Each start is the previous start's midnight plus one mean synodic month,
/// truncated to its day. A start that does not move past the previous day
/// is pushed forward by one day. Enumeration stops at [`MAX_LUNATIONS`]
/// starts or when a start would reach `year_end`.
pub fn lunation_starts(year_start: CalendarDay, year_end: CalendarDay) -> Vec<CalendarDay> {
    let mut starts = vec![year_start];
    let mut previous = year_start;
    let synodic_month = days_to_delta(SYNODIC_MONTH_DAYS);

    while starts.len() < MAX_LUNATIONS {
        let mut next = normalize(previous.midnight_utc() + synodic_month);
        if next <= previous {
            debug!(%previous, candidate = %next, "lunation start did not advance, forcing next day");
            next = previous.succ();
        }
        if next >= year_end {
            break;
        }
        starts.push(next);
        previous = next;
    }
    starts
}

/// Resolves the observed year containing `day`.
///
/// The candidate year walks backwards from `day`'s Gregorian year until its
/// start is on or before `day`; the year after the candidate supplies the end.
pub fn observed_year(day: CalendarDay, marker: MonthDay) -> ObservedYear {
    let mut anchor_year = day.year();
    let mut start = lunar_year_start(anchor_year, marker);
    while start.day > day {
        anchor_year -= 1;
        start = lunar_year_start(anchor_year, marker);
    }
    let end = lunar_year_start(anchor_year + 1, marker).day;
    trace!(%day, anchor_year, start = %start.day, %end, "observed year resolved");

    let starts = lunation_starts(start.day, end);
    let lunations = starts
        .iter()
        .enumerate()
        .map(|(i, &s)| Lunation {
            index: i as u32 + 1,
            start: s,
            end: starts.get(i + 1).copied().unwrap_or(end),
        })
        .collect();

    ObservedYear {
        anchor_year,
        start: start.day,
        end,
        lunations,
    }
}

/// Maps a day into the observed lunar year.
///
/// Months longer than 28 days run past the shell: those days have no
/// `shell_day_index` and are flagged as extra and out of shell.
///
/// # Example
///
/// ```
/// use turtle_calendar::CalendarDay;
/// use turtle_system::{AnchorSelection, Tradition, compute_observed};
///
/// let anchor = AnchorSelection::new(Tradition::Anishinaabe);
/// let pos = compute_observed(CalendarDay::new(2026, 3, 1).unwrap(), &anchor);
/// assert_eq!(pos.turtle_year_start, CalendarDay::new(2026, 2, 17).unwrap());
/// assert_eq!(pos.month_index, Some(1));
/// assert_eq!(pos.day_index, Some(13));
/// ```
#[tracing::instrument(level = "debug", skip_all, fields(tradition = %anchor.tradition()))]
pub fn compute_observed(date: impl IntoCalendarDay, anchor: &AnchorSelection) -> TurtleSystemDate {
    let day = normalize(date);
    let year = observed_year(day, anchor.lunar_marker());
    let lunation = year.lunation_for(day);

    let month_index = lunation.index;
    let day_index = day_count(lunation.start, day) as u32 + 1;
    let out_of_shell = i64::from(day_index) > DAYS_PER_TURTLE_MONTH;

    TurtleSystemDate {
        model: CalendarModel::Observed,
        tradition: anchor.tradition(),
        gregorian_date: day,
        turtle_year_start: year.start,
        turtle_year_end: year.end,
        turtle_year_length: year.len_days(),
        day_of_turtle_year: day_count(year.start, day) + 1,
        month_index: Some(month_index),
        day_index: Some(day_index),
        month_length: Some(lunation.len_days() as u32),
        shell_month_index: (i64::from(month_index) <= TURTLE_MONTHS).then_some(month_index),
        shell_day_index: (!out_of_shell).then_some(day_index),
        is_extra_day: out_of_shell,
        extra_day_index: out_of_shell
            .then(|| day_index - DAYS_PER_TURTLE_MONTH as u32),
        out_of_shell_day: out_of_shell,
    }
}
