//! Lunar New Year boundary dates.

use turtle_calendar::{CalendarDay, MonthDay};

/// Boundary used for years missing from [`LUNAR_NEW_YEAR_TABLE`].
///
/// An approximation only: real Lunar New Year falls between January 21
/// and February 20.
pub const FALLBACK_BOUNDARY: MonthDay = MonthDay::of(2, 4);

/// Known Lunar New Year dates as `(year, month, day)`, sorted by year.
///
/// Extend this table to get exact boundaries for more years.
#[rustfmt::skip]
pub const LUNAR_NEW_YEAR_TABLE: [(i32, u32, u32); 27] = [
    (2017, 1, 28), (2018, 2, 16), (2019, 2, 5),  (2020, 1, 25), (2021, 2, 12),
    (2022, 2, 1),  (2023, 1, 22), (2024, 2, 10), (2025, 1, 29), (2026, 2, 17),
    (2027, 2, 6),  (2028, 1, 26), (2029, 2, 13), (2030, 2, 3),  (2031, 1, 23),
    (2032, 2, 11), (2033, 1, 31), (2034, 2, 19), (2035, 2, 8),  (2036, 1, 28),
    (2037, 2, 15), (2038, 2, 4),  (2039, 1, 24), (2040, 2, 12), (2041, 2, 1),
    (2042, 1, 22), (2043, 2, 10),
];

/// Returns `true` if `year` has an exact entry in the table.
pub fn is_tabulated(year: i32) -> bool {
    lookup(year).is_some()
}

/// Returns the Lunar New Year day for `year`, or February 4 if the year is
/// not tabulated.
pub fn lunar_new_year(year: i32) -> CalendarDay {
    let marker = lookup(year).unwrap_or(FALLBACK_BOUNDARY);
    marker.in_year(year)
}

fn lookup(year: i32) -> Option<MonthDay> {
    LUNAR_NEW_YEAR_TABLE
        .binary_search_by_key(&year, |&(y, _, _)| y)
        .ok()
        .map(|i| {
            let (_, month, day) = LUNAR_NEW_YEAR_TABLE[i];
            MonthDay::of(month, day)
        })
}
