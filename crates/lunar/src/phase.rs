//! Phase classification, illumination and moon age.

use std::f64::consts::TAU;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use turtle_calendar::CalendarDay;

use crate::{DAY_MS, REFERENCE_NEW_MOON_MS, SYNODIC_MONTH_DAYS};

/// One of the eight named phases of the lunar cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhaseName {
    NewMoon,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    FullMoon,
    WaningGibbous,
    ThirdQuarter,
    WaningCrescent,
}

impl PhaseName {
    /// All phases in cycle order, starting at new moon.
    pub const ALL: [PhaseName; 8] = [
        PhaseName::NewMoon,
        PhaseName::WaxingCrescent,
        PhaseName::FirstQuarter,
        PhaseName::WaxingGibbous,
        PhaseName::FullMoon,
        PhaseName::WaningGibbous,
        PhaseName::ThirdQuarter,
        PhaseName::WaningCrescent,
    ];

    /// Classifies a cycle fraction in `[0, 1)`.
    ///
    /// Each phase covers one eighth of the cycle centred on its nominal
    /// point, so new moon spans both `[0, 0.0625)` and `[0.9375, 1)`.
    pub fn from_cycle_fraction(fraction: f64) -> Self {
        if !(0.0625..0.9375).contains(&fraction) {
            PhaseName::NewMoon
        } else if fraction < 0.1875 {
            PhaseName::WaxingCrescent
        } else if fraction < 0.3125 {
            PhaseName::FirstQuarter
        } else if fraction < 0.4375 {
            PhaseName::WaxingGibbous
        } else if fraction < 0.5625 {
            PhaseName::FullMoon
        } else if fraction < 0.6875 {
            PhaseName::WaningGibbous
        } else if fraction < 0.8125 {
            PhaseName::ThirdQuarter
        } else {
            PhaseName::WaningCrescent
        }
    }

    /// Human-readable label, e.g. `"Waxing Gibbous"`.
    pub fn label(self) -> &'static str {
        match self {
            PhaseName::NewMoon => "New Moon",
            PhaseName::WaxingCrescent => "Waxing Crescent",
            PhaseName::FirstQuarter => "First Quarter",
            PhaseName::WaxingGibbous => "Waxing Gibbous",
            PhaseName::FullMoon => "Full Moon",
            PhaseName::WaningGibbous => "Waning Gibbous",
            PhaseName::ThirdQuarter => "Third Quarter",
            PhaseName::WaningCrescent => "Waning Crescent",
        }
    }

    /// Single-character glyph for compact displays.
    pub fn symbol(self) -> &'static str {
        match self {
            PhaseName::NewMoon => "●",
            PhaseName::WaxingCrescent => "◔",
            PhaseName::FirstQuarter => "◑",
            PhaseName::WaxingGibbous => "◕",
            PhaseName::FullMoon => "○",
            PhaseName::WaningGibbous => "◕",
            PhaseName::ThirdQuarter => "◐",
            PhaseName::WaningCrescent => "◔",
        }
    }
}

impl fmt::Display for PhaseName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for PhaseName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Lunar phase at an instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LunarPhase {
    /// Named phase.
    pub name: PhaseName,
    /// Days since the most recent mean new moon, in `[0, SYNODIC_MONTH_DAYS)`.
    pub age_days: f64,
    /// Illuminated fraction approximation in `[0, 1]`.
    pub illumination: f64,
    /// `age_days / SYNODIC_MONTH_DAYS`, in `[0, 1)`.
    pub cycle_fraction: f64,
}

impl LunarPhase {
    /// Glyph of the named phase.
    pub fn symbol(&self) -> &'static str {
        self.name.symbol()
    }
}

/// Computes the lunar phase at `instant`.
///
/// Works for any instant, including those before the reference epoch:
/// the age is always reduced into `[0, SYNODIC_MONTH_DAYS)`.
///
/// Illumination uses `(1 - cos(2π · fraction)) / 2`, a smooth curve that is
/// 0 at new moon and 1 at full moon. It is not a geometric model.
pub fn compute_phase(instant: DateTime<Utc>) -> LunarPhase {
    let elapsed_days = (instant.timestamp_millis() - REFERENCE_NEW_MOON_MS) as f64 / DAY_MS;
    let age_days = positive_modulo(elapsed_days, SYNODIC_MONTH_DAYS);
    let cycle_fraction = age_days / SYNODIC_MONTH_DAYS;
    let illumination = (1.0 - (cycle_fraction * TAU).cos()) / 2.0;

    LunarPhase {
        name: PhaseName::from_cycle_fraction(cycle_fraction),
        age_days,
        illumination,
        cycle_fraction,
    }
}

/// Computes the lunar phase at civil noon of `day`.
pub fn compute_phase_for_day(day: CalendarDay) -> LunarPhase {
    compute_phase(day.noon_utc())
}

/// Days from `instant` until the next mean new moon.
///
/// Returns 0 when `instant` is exactly at a mean new moon.
pub fn days_until_new_moon(instant: DateTime<Utc>) -> f64 {
    let age_days = compute_phase(instant).age_days;
    positive_modulo(SYNODIC_MONTH_DAYS - age_days, SYNODIC_MONTH_DAYS)
}

fn positive_modulo(value: f64, divisor: f64) -> f64 {
    let m = value.rem_euclid(divisor);
    // rem_euclid can round up to exactly `divisor` for tiny negative inputs.
    if m >= divisor { 0.0 } else { m }
}
