//! Scan command: consecutive days between two dates.

use anyhow::{Context, Result, bail};
use tracing::{info, info_span};

use turtle_calendar::{day_count, day_range};
use turtle_system::CalendarModel;

use crate::cli::ScanArgs;
use crate::convert::{self, OutputFormat, Settings};
use crate::report::{self, DayReport};

/// Longest range accepted, in days.
const MAX_SCAN_DAYS: i64 = 100 * 366;

/// Run the scan command.
pub fn run(args: ScanArgs, settings: &Settings) -> Result<()> {
    let _cmd = info_span!("scan").entered();

    let from = convert::parse_date(&args.from).context("invalid --from")?;
    let to = convert::parse_date(&args.to).context("invalid --to")?;
    let n_days = day_count(from, to) + 1;
    if n_days < 1 {
        bail!("--to ({to}) is before --from ({from})");
    }
    if n_days > MAX_SCAN_DAYS {
        bail!("scan range of {n_days} days exceeds the limit of {MAX_SCAN_DAYS}");
    }
    info!(%from, %to, n_days, "scanning days");

    let reports: Vec<DayReport> = day_range(from, to)
        .into_iter()
        .map(|day| DayReport::build(day, &CalendarModel::ALL, &settings.anchor))
        .collect();

    match settings.format {
        OutputFormat::Text => {
            for r in &reports {
                println!("{}", report::render_row(r));
            }
        }
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&reports).context("failed to serialize scan")?
        ),
    }
    Ok(())
}
