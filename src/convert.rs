//! Pure conversion functions: TOML config structs -> core types.

use anyhow::{Context, Result, bail};
use tracing::{debug, warn};

use turtle_calendar::CalendarDay;
use turtle_system::{AnchorSelection, CalendarModel, Tradition};

use crate::config::{CalendarToml, OutputToml, TurtleConfig};

/// Output rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Validated settings shared by all subcommands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub model: CalendarModel,
    pub anchor: AnchorSelection,
    pub format: OutputFormat,
}

/// Parses an output format name.
pub fn parse_format(s: &str) -> Result<OutputFormat> {
    match s.to_lowercase().as_str() {
        "text" => Ok(OutputFormat::Text),
        "json" => Ok(OutputFormat::Json),
        other => bail!("unknown output format: {other:?} (expected text or json)"),
    }
}

/// Parses a calendar model identifier.
pub fn parse_model(s: &str) -> Result<CalendarModel> {
    Ok(s.parse()?)
}

/// Parses a tradition identifier.
pub fn parse_tradition(s: &str) -> Result<Tradition> {
    Ok(s.parse()?)
}

/// Parses a strict `YYYY-MM-DD` day.
pub fn parse_date(s: &str) -> Result<CalendarDay> {
    Ok(s.trim().parse()?)
}

/// Builds the tradition anchor from the `[calendar]` table.
pub fn build_anchor(calendar: &CalendarToml) -> Result<AnchorSelection> {
    let tradition = parse_tradition(&calendar.tradition)?;
    let custom_start = calendar
        .custom_start
        .as_deref()
        .map(parse_date)
        .transpose()
        .context("invalid custom_start")?;

    match (tradition, custom_start) {
        (Tradition::Custom, None) => {
            warn!("custom tradition without custom_start, anchoring on January 1");
        }
        (Tradition::Custom, Some(_)) => {}
        (_, Some(start)) => {
            debug!(%start, %tradition, "custom_start ignored for a named tradition");
        }
        (_, None) => {}
    }
    Ok(AnchorSelection::new(tradition).with_custom_start(custom_start))
}

/// Builds validated [`Settings`] from a loaded configuration.
pub fn build_settings(config: &TurtleConfig) -> Result<Settings> {
    Ok(Settings {
        model: parse_model(&config.calendar.model)?,
        anchor: build_anchor(&config.calendar)?,
        format: build_format(&config.output)?,
    })
}

fn build_format(output: &OutputToml) -> Result<OutputFormat> {
    parse_format(&output.format)
}
