//! # turtle-lunar
//!
//! Lunar phase approximation from a fixed mean synodic month.
//!
//! The moon's age is the time since a known reference new moon, reduced
//! modulo [`SYNODIC_MONTH_DAYS`]. There is no perturbation model: every
//! lunation is exactly the mean length.
//!
//! ```text
//! compute_phase(instant)
//!   ├─ elapsed days since REFERENCE_NEW_MOON
//!   ├─ age = elapsed mod synodic month (always non-negative)
//!   ├─ cycle_fraction = age / synodic month
//!   ├─ illumination = (1 - cos(2π · fraction)) / 2
//!   └─ PhaseName::from_cycle_fraction()
//! ```
//!
//! # Quick start
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use turtle_lunar::{PhaseName, compute_phase};
//!
//! let phase = compute_phase(Utc.with_ymd_and_hms(2000, 1, 6, 18, 14, 0).unwrap());
//! assert_eq!(phase.name, PhaseName::NewMoon);
//! assert!(phase.age_days < 1e-9);
//! ```

mod phase;

use chrono::{DateTime, Utc};

pub use phase::{LunarPhase, PhaseName, compute_phase, compute_phase_for_day, days_until_new_moon};

/// Mean length of a synodic month in days.
pub const SYNODIC_MONTH_DAYS: f64 = 29.53058867;

/// Milliseconds in one day.
pub const DAY_MS: f64 = 86_400_000.0;

/// A known new moon instant, 2000-01-06T18:14:00Z, as Unix milliseconds.
pub const REFERENCE_NEW_MOON_MS: i64 = 947_182_440_000;

/// The reference new moon as a UTC instant.
pub fn reference_new_moon() -> DateTime<Utc> {
    DateTime::from_timestamp_millis(REFERENCE_NEW_MOON_MS)
        .expect("reference epoch is within chrono's range")
}
