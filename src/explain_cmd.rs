//! Explain command: describe the configured model and tradition.

use anyhow::{Context, Result};
use tracing::info_span;

use turtle_system::system_explanation;

use crate::convert::{OutputFormat, Settings};

/// Run the explain command.
pub fn run(settings: &Settings) -> Result<()> {
    let _cmd = info_span!("explain").entered();

    let explanation = system_explanation(settings.model, &settings.anchor);
    match settings.format {
        OutputFormat::Text => {
            println!("{}", explanation.title);
            println!();
            for line in &explanation.lines {
                println!("- {line}");
            }
            println!();
            println!("{}", settings.model.summary());
        }
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&explanation)
                .context("failed to serialize explanation")?
        ),
    }
    Ok(())
}
