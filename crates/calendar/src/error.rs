//! Error types for the turtle-calendar crate.

/// Error type for all fallible operations in the turtle-calendar crate.
///
/// Day arithmetic itself never fails; only untrusted text and raw
/// month/day pairs coming from configuration are validated.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when text is not a strict `YYYY-MM-DD` date or names a day
    /// that does not exist (e.g. `2024-02-30`).
    #[error("invalid ISO date: {input:?} (expected an existing YYYY-MM-DD day)")]
    InvalidIsoDate {
        /// The text that was rejected.
        input: String,
    },

    /// Returned when a year is outside the supported range -9999..=9999.
    #[error("year out of range: {year} (must be -9999..=9999)")]
    YearOutOfRange {
        /// The year that was provided.
        year: i32,
    },

    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u32,
    },

    /// Returned when a day number exceeds the longest length of the given month.
    #[error("invalid day: {day} for month {month} (max {max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u32,
        /// The month for which the day is invalid.
        month: u32,
        /// The maximum valid day for the given month in any year.
        max_day: u32,
    },
}
