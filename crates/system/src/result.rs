//! Result type shared by both calendar models.

use serde::Serialize;
use turtle_calendar::CalendarDay;

use crate::model::CalendarModel;
use crate::tradition::Tradition;

/// Position of one Gregorian day within a turtle year.
///
/// The year is the half-open span `[turtle_year_start, turtle_year_end)`.
/// `month_index`/`day_index` follow the model itself, while the `shell_*`
/// fields are clamped to the 13 plates and 28 segments of the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TurtleSystemDate {
    /// Model that produced this position.
    pub model: CalendarModel,
    /// Tradition whose markers anchored the year.
    pub tradition: Tradition,
    /// The normalized input day.
    pub gregorian_date: CalendarDay,
    /// First day of the turtle year (inclusive).
    pub turtle_year_start: CalendarDay,
    /// First day of the next turtle year (exclusive).
    pub turtle_year_end: CalendarDay,
    /// Days in `[turtle_year_start, turtle_year_end)`.
    pub turtle_year_length: i64,
    /// 1-based offset of `gregorian_date` within the year.
    pub day_of_turtle_year: i64,
    /// 1-based month, absent on teaching-model extra days.
    pub month_index: Option<u32>,
    /// 1-based day within the month, absent on teaching-model extra days.
    pub day_index: Option<u32>,
    /// Length of the current month in days.
    pub month_length: Option<u32>,
    /// `month_index` when it fits the 13 shell plates.
    pub shell_month_index: Option<u32>,
    /// `day_index` when it fits the 28 shell segments.
    pub shell_day_index: Option<u32>,
    /// Whether the day falls outside the 13 x 28 plate mapping.
    pub is_extra_day: bool,
    /// 1-based position within the run of extra days.
    pub extra_day_index: Option<u32>,
    /// Whether the day cannot be drawn on the shell.
    pub out_of_shell_day: bool,
}

impl TurtleSystemDate {
    /// Returns `true` if `day` lies inside this turtle year.
    pub fn contains(&self, day: CalendarDay) -> bool {
        (self.turtle_year_start..self.turtle_year_end).contains(&day)
    }

    /// Returns `true` if the day has a position on the shell.
    pub fn on_shell(&self) -> bool {
        self.shell_month_index.is_some() && self.shell_day_index.is_some()
    }
}
