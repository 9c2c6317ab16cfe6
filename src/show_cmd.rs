//! Show command: one day under the configured settings.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use turtle_calendar::CalendarDay;
use turtle_system::CalendarModel;

use crate::cli::ShowArgs;
use crate::convert::{self, OutputFormat, Settings};
use crate::report::{self, DayReport};

/// Run the show command.
pub fn run(args: ShowArgs, settings: &Settings) -> Result<()> {
    let _cmd = info_span!("show").entered();

    let day = match args.date.as_deref() {
        Some(text) => convert::parse_date(text)?,
        None => CalendarDay::today(),
    };
    let models: &[CalendarModel] = if args.all_models {
        &CalendarModel::ALL
    } else {
        std::slice::from_ref(&settings.model)
    };
    info!(%day, n_models = models.len(), tradition = %settings.anchor.tradition(), "computing day");

    let day_report = DayReport::build(day, models, &settings.anchor);
    match settings.format {
        OutputFormat::Text => print!("{}", report::render_day(&day_report)),
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&day_report).context("failed to serialize report")?
        ),
    }
    Ok(())
}
