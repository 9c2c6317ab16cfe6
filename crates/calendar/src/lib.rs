//! # turtle-calendar
//!
//! Civil calendar days for the turtle, lunar and zodiac engines.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["NaiveDate / NaiveDateTime / DateTime<Tz>"] -->|"normalize()"| B["CalendarDay"]
//!     T["YYYY-MM-DD"] -->|"parse_iso()"| B
//!     B -->|"format_iso()"| T
//!     B -->|"day_count()"| C["signed days"]
//!     M["MonthDay"] -->|".in_year()"| B
//!     B -->|"anchored_year()"| Y["AnchoredYear [start, end)"]
//!     B -->|"day_sequence() / day_range()"| S["Vec of CalendarDay"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use turtle_calendar::{CalendarDay, MonthDay, anchored_year, day_count, parse_iso};
//!
//! let day = parse_iso("2026-03-16").unwrap();
//! let year = anchored_year(day, MonthDay::of(2, 17));
//! assert_eq!(day_count(year.start, day), 27);
//! assert_eq!(parse_iso("2024-02-30"), None);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `date` | `CalendarDay`, normalization and day counting |
//! | `month_day` | Yearly month/day markers |
//! | `iso` | Strict ISO text parsing and formatting |
//! | `anchored_year` | Years anchored on a month/day marker |
//! | `sequence` | Consecutive day generation |
//! | `error` | Error types |

mod anchored_year;
mod date;
mod error;
mod iso;
mod month_day;
mod sequence;

pub use anchored_year::{AnchoredYear, anchored_year};
pub use date::{
    CalendarDay, DAY_MS, IntoCalendarDay, MAX_YEAR, MIN_YEAR, day_count, is_same_day, normalize,
};
pub use error::CalendarError;
pub use iso::{format_iso, parse_iso};
pub use month_day::MonthDay;
pub use sequence::{day_range, day_sequence};
