use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use strata_graph::{DependencyGraph, GraphStatistics, ModuleHierarchy};

use crate::extractor::ExtractError;

/// A file whose imports could not be extracted.
///
/// The file's module node is still part of the graph; only its outgoing
/// edges are missing.
#[derive(Debug)]
pub struct ScanDiagnostic {
    pub path: PathBuf,
    pub error: ExtractError,
}

impl fmt::Display for ScanDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)
    }
}

/// Outcome of a successful scan.
#[derive(Debug)]
pub struct AnalysisResult {
    pub root: PathBuf,
    pub graph: DependencyGraph,
    /// Top-level package directories used for the internal-import test.
    pub top_level_packages: Vec<String>,
    pub diagnostics: Vec<ScanDiagnostic>,
    pub files_scanned: usize,
    pub files_skipped: usize,
}

impl AnalysisResult {
    /// Check if every file was scanned without a diagnostic.
    pub fn is_ok(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn statistics(&self) -> GraphStatistics {
        self.graph.statistics()
    }

    /// Build the hierarchy view over a snapshot of the graph.
    pub fn hierarchy(&self) -> ModuleHierarchy {
        ModuleHierarchy::new(Arc::new(self.graph.clone()))
    }

    /// Consume the result, keeping only the graph.
    pub fn into_graph(self) -> DependencyGraph {
        self.graph
    }
}

impl fmt::Display for AnalysisResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Analysis Result")?;
        writeln!(f, "================")?;
        writeln!(f, "Root:        {}", self.root.display())?;
        writeln!(f, "Files:       {} scanned, {} skipped", self.files_scanned, self.files_skipped)?;
        writeln!(f, "{}", self.statistics())?;

        if !self.diagnostics.is_empty() {
            writeln!(f, "\nDiagnostics:")?;
            for diagnostic in &self.diagnostics {
                writeln!(f, "  - {}", diagnostic)?;
            }
        }

        Ok(())
    }
}
