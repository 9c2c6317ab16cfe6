//! # turtle-zodiac
//!
//! Chinese zodiac year and animal for a calendar day.
//!
//! The zodiac year turns over on Lunar New Year. Boundaries come from a
//! fixed table ([`LUNAR_NEW_YEAR_TABLE`], 2017-2043); any other year uses
//! February 4 ([`FALLBACK_BOUNDARY`]) so computation never fails, at the cost
//! of boundary accuracy.
//!
//! # Quick start
//!
//! ```
//! use turtle_calendar::CalendarDay;
//! use turtle_zodiac::{Animal, compute_zodiac};
//!
//! let before = compute_zodiac(CalendarDay::new(2026, 2, 16).unwrap());
//! let after = compute_zodiac(CalendarDay::new(2026, 2, 17).unwrap());
//! assert_eq!(before.animal, Animal::Snake);
//! assert_eq!(after.animal, Animal::Horse);
//! ```

mod animal;
mod table;

use serde::Serialize;
use tracing::trace;
use turtle_calendar::{CalendarDay, IntoCalendarDay, normalize};

pub use animal::{Animal, RAT_ANCHOR_YEAR, cycle_index};
pub use table::{FALLBACK_BOUNDARY, LUNAR_NEW_YEAR_TABLE, is_tabulated, lunar_new_year};

/// Zodiac position of a calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ZodiacInfo {
    /// Gregorian year in which the current zodiac year began.
    pub zodiac_year: i32,
    /// Animal of the zodiac year.
    pub animal: Animal,
    /// Cycle position of `animal`, 0 (Rat) through 11 (Pig).
    pub animal_index: usize,
    /// First day of the zodiac year (inclusive).
    pub lunar_new_year_date: CalendarDay,
    /// First day of the next zodiac year (exclusive).
    pub next_lunar_new_year_date: CalendarDay,
}

/// Computes the zodiac year and animal for `date`.
pub fn compute_zodiac(date: impl IntoCalendarDay) -> ZodiacInfo {
    let day = normalize(date);
    let gregorian_year = day.year();
    let boundary = lunar_new_year(gregorian_year);
    let zodiac_year = if day >= boundary {
        gregorian_year
    } else {
        gregorian_year - 1
    };
    if !is_tabulated(zodiac_year) || !is_tabulated(zodiac_year + 1) {
        trace!(zodiac_year, "lunar new year outside table, using fallback boundary");
    }

    let animal_index = cycle_index(zodiac_year);
    ZodiacInfo {
        zodiac_year,
        animal: Animal::from_index(animal_index),
        animal_index,
        lunar_new_year_date: lunar_new_year(zodiac_year),
        next_lunar_new_year_date: lunar_new_year(zodiac_year + 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> CalendarDay {
        CalendarDay::new(y, m, d).unwrap()
    }

    #[test]
    fn boundary_day_switches_animal() {
        let before = compute_zodiac(day(2026, 2, 16));
        assert_eq!(before.zodiac_year, 2025);
        assert_eq!(before.animal, Animal::Snake);
        assert_eq!(before.animal_index, 5);
        assert_eq!(before.lunar_new_year_date, day(2025, 1, 29));
        assert_eq!(before.next_lunar_new_year_date, day(2026, 2, 17));

        let after = compute_zodiac(day(2026, 2, 17));
        assert_eq!(after.zodiac_year, 2026);
        assert_eq!(after.animal, Animal::Horse);
        assert_eq!(after.animal_index, 6);
        assert_eq!(after.lunar_new_year_date, day(2026, 2, 17));
        assert_eq!(after.next_lunar_new_year_date, day(2027, 2, 6));
    }

    #[test]
    fn fallback_outside_table() {
        let info = compute_zodiac(day(2050, 2, 3));
        assert_eq!(info.zodiac_year, 2049);
        assert_eq!(info.animal, Animal::Snake);
        assert_eq!(info.lunar_new_year_date, day(2049, 2, 4));
        assert_eq!(info.next_lunar_new_year_date, day(2050, 2, 4));

        let info = compute_zodiac(day(2050, 2, 4));
        assert_eq!(info.zodiac_year, 2050);
        assert_eq!(info.animal, Animal::Horse);
    }

    #[test]
    fn table_edge_mixes_fallback_and_table() {
        // 2016 is not tabulated; 2017 is.
        let info = compute_zodiac(day(2017, 1, 27));
        assert_eq!(info.zodiac_year, 2016);
        assert_eq!(info.animal, Animal::Monkey);
        assert_eq!(info.lunar_new_year_date, day(2016, 2, 4));
        assert_eq!(info.next_lunar_new_year_date, day(2017, 1, 28));
    }

    #[test]
    fn early_january_belongs_to_previous_year() {
        let info = compute_zodiac(day(2024, 1, 1));
        assert_eq!(info.zodiac_year, 2023);
        assert_eq!(info.animal, Animal::Rabbit);
    }
}
