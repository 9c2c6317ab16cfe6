//! # turtle-system
//!
//! Maps Gregorian days into a thirteen-moon turtle year under two models:
//!
//! - **Teaching** ([`CalendarModel::Teaching`]): 13 months of 28 days (364)
//!   from the tradition's anchor day, plus one or two extra days.
//! - **Observed** ([`CalendarModel::Observed`]): months bounded by mean new
//!   moons, 12 or 13 per year, starting at the first new moon on or after the
//!   tradition's lunar marker.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph TD
//!     D["date + CalendarModel + AnchorSelection"] --> S{"compute_turtle_date()"}
//!     S -->|Teaching| T["compute_teaching()"]
//!     S -->|Observed| O["compute_observed()"]
//!     T --> AY["anchored_year(teaching marker)"]
//!     O --> OY["observed_year(lunar marker)"]
//!     OY --> NM["lunar_year_start() via turtle_lunar"]
//!     OY --> LS["lunation_starts()"]
//!     AY --> R["TurtleSystemDate"]
//!     LS --> R
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use turtle_calendar::CalendarDay;
//! use turtle_system::{AnchorSelection, CalendarModel, Tradition, compute_turtle_date};
//!
//! let anchor = AnchorSelection::new(Tradition::Anishinaabe);
//! let day = CalendarDay::new(2027, 2, 16).unwrap();
//!
//! let teaching = compute_turtle_date(day, CalendarModel::Teaching, &anchor);
//! assert!(teaching.is_extra_day);
//! assert_eq!(teaching.extra_day_index, Some(1));
//!
//! let observed = compute_turtle_date(day, CalendarModel::Observed, &anchor);
//! assert!(observed.turtle_year_start <= day && day < observed.turtle_year_end);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `model` | Calendar model selection |
//! | `tradition` | Tradition anchors and custom start dates |
//! | `teaching` | Fixed 13 x 28 model |
//! | `observed` | New-moon based model and lunation enumeration |
//! | `result` | `TurtleSystemDate` |
//! | `explain` | Explanation text for a configuration |
//! | `error` | Error types |

mod error;
mod explain;
mod model;
mod observed;
mod result;
mod teaching;
mod tradition;

use turtle_calendar::IntoCalendarDay;

pub use error::SystemError;
pub use explain::{SystemExplanation, system_explanation};
pub use model::CalendarModel;
pub use observed::{
    Lunation, MAX_LUNATIONS, NewMoonEstimate, ObservedYear, compute_observed, lunar_year_start,
    lunation_starts, next_new_moon_on_or_after, observed_year,
};
pub use result::TurtleSystemDate;
pub use teaching::compute_teaching;
pub use tradition::{AnchorSelection, Tradition};

/// Months on the shell.
pub const TURTLE_MONTHS: i64 = 13;

/// Days per teaching month and segments per shell plate.
pub const DAYS_PER_TURTLE_MONTH: i64 = 28;

/// Days covered by the 13 x 28 plates.
pub const IN_MONTH_DAYS: i64 = TURTLE_MONTHS * DAYS_PER_TURTLE_MONTH;

/// Maps `date` into the turtle year of `model` anchored by `anchor`.
pub fn compute_turtle_date(
    date: impl IntoCalendarDay,
    model: CalendarModel,
    anchor: &AnchorSelection,
) -> TurtleSystemDate {
    match model {
        CalendarModel::Teaching => compute_teaching(date, anchor),
        CalendarModel::Observed => compute_observed(date, anchor),
    }
}
