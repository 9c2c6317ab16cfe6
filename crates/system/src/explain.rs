//! Human-readable description of a model and tradition pairing.

use serde::Serialize;

use crate::model::CalendarModel;
use crate::tradition::{AnchorSelection, Tradition};

/// Title plus explanatory lines for the active configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SystemExplanation {
    pub title: String,
    pub lines: Vec<String>,
}

/// Builds the explanation for `model` anchored by `anchor`.
pub fn system_explanation(model: CalendarModel, anchor: &AnchorSelection) -> SystemExplanation {
    let tradition = anchor.tradition();
    let custom = tradition == Tradition::Custom;
    // Shown as M/D/YYYY after the custom anchor when one was given.
    let custom_marker = anchor
        .custom_start()
        .filter(|_| custom)
        .map(|d| format!(" ({}/{}/{})", d.month(), d.day(), d.year()))
        .unwrap_or_default();

    let (intro, anchor_line, usage) = match model {
        CalendarModel::Teaching => (
            "This setting uses the turtle teaching structure directly: 13 moons x 28 days (364), \
             with extra day(s) outside month 13.",
            if custom {
                format!("Custom anchor is applied as a yearly cycle start marker{custom_marker}.")
            } else {
                format!(
                    "{} anchor is applied as a tradition-specific cycle start marker ({}).",
                    tradition.label(),
                    tradition.teaching_start()
                )
            },
            "Use this mode when prioritizing cultural teaching structure over strict \
             astronomical month length.",
        ),
        CalendarModel::Observed => (
            "This setting follows approximate new-moon boundaries, so lunar months are \
             about 29 or 30 days.",
            if custom {
                format!(
                    "Custom anchor is used as the yearly marker window{custom_marker}; the cycle \
                     starts on the next approximate new moon after that marker."
                )
            } else {
                format!(
                    "{} anchor is used as the yearly marker window; the cycle starts on the next \
                     approximate new moon after {}.",
                    tradition.label(),
                    tradition.lunar_marker()
                )
            },
            "Use this mode when you want the moon progression to track astronomical \
             lunations more closely.",
        ),
    };

    SystemExplanation {
        title: format!("{} + {}", model.label(), tradition.label()),
        lines: vec![
            intro.to_string(),
            anchor_line,
            tradition.context().to_string(),
            usage.to_string(),
        ],
    }
}
