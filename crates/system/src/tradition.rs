//! Cultural tradition anchors.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use turtle_calendar::{CalendarDay, MonthDay};

use crate::error::SystemError;

/// Tradition whose markers anchor the turtle year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tradition {
    #[default]
    Anishinaabe,
    Haudenosaunee,
    Cherokee,
    /// Anchored on a caller-supplied start date.
    Custom,
}

impl Tradition {
    /// All traditions, in display order.
    pub const ALL: [Tradition; 4] = [
        Tradition::Anishinaabe,
        Tradition::Haudenosaunee,
        Tradition::Cherokee,
        Tradition::Custom,
    ];

    /// Stable identifier.
    pub fn id(self) -> &'static str {
        match self {
            Tradition::Anishinaabe => "anishinaabe",
            Tradition::Haudenosaunee => "haudenosaunee",
            Tradition::Cherokee => "cherokee",
            Tradition::Custom => "custom",
        }
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Tradition::Anishinaabe => "Anishinaabe / Ojibwe",
            Tradition::Haudenosaunee => "Haudenosaunee / Oneida",
            Tradition::Cherokee => "Cherokee (Green Corn context)",
            Tradition::Custom => "Custom",
        }
    }

    /// Short cultural context shown alongside the label.
    pub fn context(self) -> &'static str {
        match self {
            Tradition::Anishinaabe => {
                "Commonly taught with 13-moon turtle-shell framing and local community \
                 moon naming traditions."
            }
            Tradition::Haudenosaunee => {
                "Often connected to midwinter ceremonial cycles and moon-based seasonal markers."
            }
            Tradition::Cherokee => {
                "Includes Green Corn seasonal renewal context in published turtle-calendar teachings."
            }
            Tradition::Custom => {
                "Uses a chosen start date to anchor the teaching or observed-lunar cycle."
            }
        }
    }

    /// Month/day on which the fixed teaching year starts.
    pub fn teaching_start(self) -> MonthDay {
        match self {
            Tradition::Anishinaabe => MonthDay::of(2, 17),
            Tradition::Haudenosaunee => MonthDay::of(1, 15),
            Tradition::Cherokee => MonthDay::of(8, 1),
            Tradition::Custom => MonthDay::of(1, 1),
        }
    }

    /// Month/day after which the observed lunar year waits for a new moon.
    pub fn lunar_marker(self) -> MonthDay {
        match self {
            Tradition::Anishinaabe => MonthDay::of(2, 1),
            Tradition::Haudenosaunee => MonthDay::of(1, 15),
            Tradition::Cherokee => MonthDay::of(8, 1),
            Tradition::Custom => MonthDay::of(1, 1),
        }
    }
}

impl FromStr for Tradition {
    type Err = SystemError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tradition::ALL
            .into_iter()
            .find(|t| t.id().eq_ignore_ascii_case(s))
            .ok_or_else(|| SystemError::UnknownTradition { id: s.to_string() })
    }
}

impl fmt::Display for Tradition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl Serialize for Tradition {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.id())
    }
}

/// A tradition together with the optional custom start date.
///
/// For [`Tradition::Custom`] with a start date, that date's month/day
/// replaces both markers. Without one, the custom markers fall back to
/// January 1. Other traditions ignore the custom start.
///
/// # Example
///
/// ```
/// use turtle_calendar::{CalendarDay, MonthDay};
/// use turtle_system::{AnchorSelection, Tradition};
///
/// let anchor = AnchorSelection::custom(CalendarDay::new(2024, 3, 20).unwrap());
/// assert_eq!(anchor.tradition(), Tradition::Custom);
/// assert_eq!(anchor.teaching_marker(), MonthDay::of(3, 20));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnchorSelection {
    tradition: Tradition,
    custom_start: Option<CalendarDay>,
}

impl AnchorSelection {
    /// Selects a tradition with no custom start date.
    pub fn new(tradition: Tradition) -> Self {
        Self {
            tradition,
            custom_start: None,
        }
    }

    /// Selects the custom tradition anchored on `start`.
    pub fn custom(start: CalendarDay) -> Self {
        Self::new(Tradition::Custom).with_custom_start(Some(start))
    }

    /// Sets the custom start date.
    pub fn with_custom_start(mut self, start: Option<CalendarDay>) -> Self {
        self.custom_start = start;
        self
    }

    /// Returns the selected tradition.
    pub fn tradition(&self) -> Tradition {
        self.tradition
    }

    /// Returns the custom start date, if any.
    pub fn custom_start(&self) -> Option<CalendarDay> {
        self.custom_start
    }

    /// Marker for the fixed teaching year.
    pub fn teaching_marker(&self) -> MonthDay {
        self.custom_marker()
            .unwrap_or_else(|| self.tradition.teaching_start())
    }

    /// Marker for the observed lunar year.
    pub fn lunar_marker(&self) -> MonthDay {
        self.custom_marker()
            .unwrap_or_else(|| self.tradition.lunar_marker())
    }

    fn custom_marker(&self) -> Option<MonthDay> {
        match (self.tradition, self.custom_start) {
            (Tradition::Custom, Some(start)) => Some(start.month_day()),
            _ => None,
        }
    }
}
