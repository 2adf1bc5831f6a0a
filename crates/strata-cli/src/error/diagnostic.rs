//! Miette report conversion for CLI errors.

use miette::Report;
use strata_analysis::AnalyzeError;

use crate::error::CliError;

/// Convert a [`CliError`] into a miette report for `main`.
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Analysis(e) => analyze_error_to_miette(e),
        CliError::Config(e) => miette::miette!("Configuration error: {}", e),
        _ => miette::miette!("{}", err),
    }
}

fn analyze_error_to_miette(err: AnalyzeError) -> Report {
    match err {
        AnalyzeError::Configuration { root, reason } => miette::miette!(
            "Invalid root {}: {}\n\nHint: Pass an existing directory as ROOT",
            root.display(),
            reason
        ),
        AnalyzeError::EmptyResult(root) => miette::miette!(
            "No Python modules found under {}\n\nHint: Check that ROOT is a Python source tree and that --exclude does not hide it",
            root.display()
        ),
        other => miette::miette!("Analysis failed: {}", other),
    }
}
