//! Fixed teaching model: 13 moons of 28 days plus extra days.

use tracing::trace;
use turtle_calendar::{IntoCalendarDay, anchored_year, day_count, normalize};

use crate::model::CalendarModel;
use crate::result::TurtleSystemDate;
use crate::tradition::AnchorSelection;
use crate::{DAYS_PER_TURTLE_MONTH, IN_MONTH_DAYS};

/// Maps a day into the fixed teaching year.
///
/// The year runs from one occurrence of the teaching marker to the next, so
/// it is 365 or 366 days long. The first 364 days fill 13 months of 28; the
/// remaining one or two are extra days outside month 13.
///
/// # Example
///
/// ```
/// use turtle_calendar::CalendarDay;
/// use turtle_system::{AnchorSelection, Tradition, compute_teaching};
///
/// let anchor = AnchorSelection::new(Tradition::Anishinaabe);
/// let pos = compute_teaching(CalendarDay::new(2026, 3, 17).unwrap(), &anchor);
/// assert_eq!(pos.month_index, Some(2));
/// assert_eq!(pos.day_index, Some(1));
/// ```
#[tracing::instrument(level = "debug", skip_all, fields(tradition = %anchor.tradition()))]
pub fn compute_teaching(date: impl IntoCalendarDay, anchor: &AnchorSelection) -> TurtleSystemDate {
    let day = normalize(date);
    let year = anchored_year(day, anchor.teaching_marker());
    let day_offset = day_count(year.start, day);
    trace!(%day, start = %year.start, day_offset, "teaching year resolved");

    let mut result = TurtleSystemDate {
        model: CalendarModel::Teaching,
        tradition: anchor.tradition(),
        gregorian_date: day,
        turtle_year_start: year.start,
        turtle_year_end: year.end,
        turtle_year_length: year.len_days(),
        day_of_turtle_year: day_offset + 1,
        month_index: None,
        day_index: None,
        month_length: None,
        shell_month_index: None,
        shell_day_index: None,
        is_extra_day: false,
        extra_day_index: None,
        out_of_shell_day: false,
    };

    if day_offset < IN_MONTH_DAYS {
        let month = (day_offset / DAYS_PER_TURTLE_MONTH) as u32 + 1;
        let day_of_month = (day_offset % DAYS_PER_TURTLE_MONTH) as u32 + 1;
        result.month_index = Some(month);
        result.day_index = Some(day_of_month);
        result.month_length = Some(DAYS_PER_TURTLE_MONTH as u32);
        result.shell_month_index = Some(month);
        result.shell_day_index = Some(day_of_month);
    } else {
        result.is_extra_day = true;
        result.extra_day_index = Some((day_offset - IN_MONTH_DAYS) as u32 + 1);
        result.out_of_shell_day = true;
    }
    result
}
