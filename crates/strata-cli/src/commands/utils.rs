//! Shared utilities for command implementations.

use strata_analysis::{AnalysisResult, Analyzer};

use crate::cli::SourceArgs;
use crate::config::StrataConfig;
use crate::error::Result;
use crate::ui;

/// Load the configuration for `source` and scan the repository.
///
/// Skipped files are reported as warnings; only fatal errors are returned.
pub fn run_analysis(source: &SourceArgs) -> Result<AnalysisResult> {
    let config = StrataConfig::load(source)?;
    tracing::debug!("Effective configuration: {:?}", config);

    let result = Analyzer::with_config(config.analyzer_config()).analyze()?;

    for diagnostic in &result.diagnostics {
        ui::warning(&format!("Skipped {}", diagnostic));
    }

    Ok(result)
}
