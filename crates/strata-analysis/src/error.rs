use std::path::PathBuf;

use strata_graph::{GraphError, RuntimeError};
use thiserror::Error;

/// Result type alias for scans.
pub type Result<T, E = AnalyzeError> = std::result::Result<T, E>;

/// Fatal scan errors.
///
/// Per-file problems never surface here; they are collected as
/// [`ScanDiagnostic`](crate::ScanDiagnostic)s on the result.
#[derive(Debug, Error)]
pub enum AnalyzeError {
    /// The root is missing or is not a directory.
    #[error("Invalid root {}: {reason}", .root.display())]
    Configuration { root: PathBuf, reason: String },

    /// The scan finished without finding a single module.
    #[error("No Python modules found under {}", .0.display())]
    EmptyResult(PathBuf),

    #[error(transparent)]
    Runtime(#[from] RuntimeError),

    #[error(transparent)]
    Graph(#[from] GraphError),
}

impl AnalyzeError {
    pub(crate) fn configuration(root: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Configuration {
            root: root.into(),
            reason: reason.into(),
        }
    }

    /// Whether this error means the scan found nothing, as opposed to
    /// failing outright.
    pub fn is_empty_result(&self) -> bool {
        matches!(self, Self::EmptyResult(_))
    }
}
