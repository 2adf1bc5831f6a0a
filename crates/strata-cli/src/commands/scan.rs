//! Scan command implementation.

use std::fs;

use crate::cli::ScanArgs;
use crate::commands::utils;
use crate::error::{Result, ResultExt};
use crate::ui;

/// Execute the scan command.
///
/// Prints the analysis summary to stdout and, with `--json`, writes the
/// full graph to a file.
pub fn execute(args: ScanArgs) -> Result<()> {
    let result = utils::run_analysis(&args.source)?;

    print!("{}", result);

    if let Some(path) = &args.json {
        let json = result.graph.to_json()?;
        fs::write(path, json)
            .with_path(path)
            .context("Failed to write graph JSON")?;
        ui::success(&format!("Wrote graph to {}", path.display()));
    }

    let message = format!(
        "Scanned {} ({} skipped)",
        ui::format_count(result.files_scanned, "file"),
        result.files_skipped
    );
    if result.is_ok() {
        ui::success(&message);
    } else {
        ui::warning(&message);
    }

    Ok(())
}
