//! Calendar model selection.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::SystemError;

/// Which turtle calendar algorithm to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CalendarModel {
    /// Symbolic 13 moons of 28 days (364) plus one or two extra days.
    #[default]
    Teaching,
    /// Months follow approximate new moons, giving 12 or 13 lunations.
    Observed,
}

impl CalendarModel {
    /// All models, in display order.
    pub const ALL: [CalendarModel; 2] = [CalendarModel::Teaching, CalendarModel::Observed];

    /// Stable identifier.
    pub fn id(self) -> &'static str {
        match self {
            CalendarModel::Teaching => "teaching_13x28",
            CalendarModel::Observed => "observed_lunar",
        }
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            CalendarModel::Teaching => "Turtle Teaching (13 x 28 + extra day)",
            CalendarModel::Observed => "Observed Lunar (new-moon based)",
        }
    }

    /// One-sentence summary of the model.
    pub fn summary(self) -> &'static str {
        match self {
            CalendarModel::Teaching => {
                "Symbolic teaching model: 13 moons of 28 days each (364), \
                 plus extra day(s) outside moon 13."
            }
            CalendarModel::Observed => {
                "Astronomical approximation: months follow new moons (about 29 or 30 days), \
                 giving 12 or sometimes 13 lunations."
            }
        }
    }
}

impl FromStr for CalendarModel {
    type Err = SystemError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "teaching_13x28" | "teaching" => Ok(CalendarModel::Teaching),
            "observed_lunar" | "observed" => Ok(CalendarModel::Observed),
            _ => Err(SystemError::UnknownModel { id: s.to_string() }),
        }
    }
}

impl fmt::Display for CalendarModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl Serialize for CalendarModel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.id())
    }
}
