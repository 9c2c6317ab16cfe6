//! Per-day report assembled from the three engines, plus text rendering.

use serde::Serialize;

use turtle_calendar::CalendarDay;
use turtle_lunar::{LunarPhase, compute_phase_for_day};
use turtle_system::{AnchorSelection, CalendarModel, TurtleSystemDate, compute_turtle_date};
use turtle_zodiac::{ZodiacInfo, compute_zodiac};

/// Everything the calendar knows about one day.
#[derive(Debug, Clone, Serialize)]
pub struct DayReport {
    pub date: CalendarDay,
    pub turtle: Vec<TurtleSystemDate>,
    pub phase: LunarPhase,
    pub zodiac: ZodiacInfo,
}

impl DayReport {
    /// Computes the report for `day` under each of `models`.
    pub fn build(day: CalendarDay, models: &[CalendarModel], anchor: &AnchorSelection) -> Self {
        Self {
            date: day,
            turtle: models
                .iter()
                .map(|&model| compute_turtle_date(day, model, anchor))
                .collect(),
            phase: compute_phase_for_day(day),
            zodiac: compute_zodiac(day),
        }
    }
}

/// Short position label such as `Moon 2, Day 1`.
pub fn position_label(pos: &TurtleSystemDate) -> String {
    match (pos.model, pos.month_index, pos.day_index) {
        (CalendarModel::Teaching, Some(month), Some(day)) => format!("Moon {month}, Day {day}"),
        (CalendarModel::Observed, Some(month), Some(day)) => format!(
            "Lunation {month}, Day {day} of {}",
            pos.month_length.unwrap_or_default()
        ),
        _ => format!("Extra Day {}", pos.extra_day_index.unwrap_or_default()),
    }
}

/// Note shown when the day falls off the 13 x 28 shell.
pub fn shell_note(pos: &TurtleSystemDate) -> Option<String> {
    if !pos.out_of_shell_day {
        return None;
    }
    let index = pos.extra_day_index.unwrap_or_default();
    Some(match pos.model {
        CalendarModel::Teaching => format!("Outside Month 13: Active Extra Day {index}"),
        CalendarModel::Observed => format!("Outside 28-Day Ring: Active Overflow Day {index}"),
    })
}

/// Multi-line text rendering used by `show`.
pub fn render_day(report: &DayReport) -> String {
    let mut out = format!("{}\n", report.date);
    for pos in &report.turtle {
        out.push_str(&format!(
            "  {:<15} {} (day {} of {}, year {} to {})\n",
            pos.model.id(),
            position_label(pos),
            pos.day_of_turtle_year,
            pos.turtle_year_length,
            pos.turtle_year_start,
            pos.turtle_year_end.pred(),
        ));
        if let Some(note) = shell_note(pos) {
            out.push_str(&format!("  {:<15} {note}\n", ""));
        }
    }
    let phase = &report.phase;
    out.push_str(&format!(
        "  {:<15} {} {} (age {:.1} days, {:.0}% lit)\n",
        "moon",
        phase.symbol(),
        phase.name,
        phase.age_days,
        phase.illumination * 100.0,
    ));
    let zodiac = &report.zodiac;
    out.push_str(&format!(
        "  {:<15} {} {} ({} to {})\n",
        "zodiac",
        zodiac.animal,
        zodiac.zodiac_year,
        zodiac.lunar_new_year_date,
        zodiac.next_lunar_new_year_date.pred(),
    ));
    out
}

/// One-line text rendering used by `scan`.
pub fn render_row(report: &DayReport) -> String {
    let positions: Vec<String> = report
        .turtle
        .iter()
        .map(|pos| format!("{:<28}", position_label(pos)))
        .collect();
    format!(
        "{}  {}  {} {:<15}  {}",
        report.date,
        positions.join("  "),
        report.phase.symbol(),
        report.phase.name.label(),
        report.zodiac.animal,
    )
}
