//! Consecutive calendar day generation for date-range scans.

use crate::date::{CalendarDay, day_count};

/// Generates a contiguous sequence of calendar days.
///
/// Starting from `start`, produces exactly `n_days` consecutive days by
/// repeatedly advancing to the next day. Month and year boundaries,
/// including February 29, are handled by the Gregorian calendar.
///
/// # Example
///
/// ```
/// use turtle_calendar::{CalendarDay, day_sequence};
///
/// let start = CalendarDay::new(2025, 12, 30).unwrap();
/// let days = day_sequence(start, 4);
/// assert_eq!(days.len(), 4);
/// assert_eq!(days[3].to_string(), "2026-01-02");
/// ```
pub fn day_sequence(start: CalendarDay, n_days: usize) -> Vec<CalendarDay> {
    let mut days = Vec::with_capacity(n_days);
    if n_days == 0 {
        return days;
    }
    days.push(start);
    let mut current = start;
    for _ in 1..n_days {
        current = current.succ();
        days.push(current);
    }
    days
}

/// Generates every day from `start` through `end`, both inclusive.
///
/// Returns an empty vector when `end` precedes `start`.
pub fn day_range(start: CalendarDay, end: CalendarDay) -> Vec<CalendarDay> {
    let n_days = usize::try_from(day_count(start, end) + 1).unwrap_or(0);
    day_sequence(start, n_days)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> CalendarDay {
        CalendarDay::new(y, m, d).unwrap()
    }

    #[test]
    fn empty() {
        assert!(day_sequence(day(2026, 1, 1), 0).is_empty());
    }

    #[test]
    fn single() {
        let start = day(2026, 6, 15);
        assert_eq!(day_sequence(start, 1), vec![start]);
    }

    #[test]
    fn leap_year_has_366_days() {
        let days = day_sequence(day(2024, 1, 1), 366);
        assert_eq!(days[59], day(2024, 2, 29));
        assert_eq!(*days.last().unwrap(), day(2024, 12, 31));
    }

    #[test]
    fn year_transition() {
        let days = day_sequence(day(2025, 12, 30), 4);
        assert_eq!(
            days,
            vec![
                day(2025, 12, 30),
                day(2025, 12, 31),
                day(2026, 1, 1),
                day(2026, 1, 2),
            ]
        );
    }

    #[test]
    fn range_inclusive() {
        let days = day_range(day(2026, 2, 27), day(2026, 3, 2));
        assert_eq!(days.len(), 4);
        assert_eq!(days[2], day(2026, 3, 1));
    }

    #[test]
    fn range_reversed_is_empty() {
        assert!(day_range(day(2026, 3, 2), day(2026, 2, 27)).is_empty());
    }

    #[test]
    fn range_single_day() {
        let d = day(2026, 2, 17);
        assert_eq!(day_range(d, d), vec![d]);
    }
}
