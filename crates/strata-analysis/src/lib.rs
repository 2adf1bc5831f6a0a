//! # strata-analysis
//!
//! Import scanning for Python source trees.
//!
//! Reads every `.py` file under a root, extracts its import statements line
//! by line, resolves relative imports, and builds the
//! [`strata_graph::DependencyGraph`] of internal module dependencies.
//!
//! ## Pipeline
//!
//! ```text
//! parser ──▶ resolver ──▶ extractor ──▶ Analyzer ──▶ annotator ──▶ AnalysisResult
//!  (line)    (relative)    (per file)   (graph build) (packages, depth)
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use strata_analysis::Analyzer;
//!
//! # fn main() -> strata_analysis::Result<()> {
//! let result = Analyzer::new().root("path/to/repo").analyze()?;
//!
//! let hierarchy = result.hierarchy();
//! for ((from, to), count) in hierarchy.aggregated_dependencies("") {
//!     println!("{from} -> {to} ({count})");
//! }
//! # Ok(())
//! # }
//! ```

pub mod analyzer;
pub mod annotator;
pub mod config;
mod error;
pub mod extractor;
pub mod parser;
pub mod resolver;
mod result;

#[cfg(test)]
mod tests;

pub use analyzer::Analyzer;
#[cfg(not(target_family = "wasm"))]
pub use analyzer::build_dependency_graph;
pub use annotator::{AnnotationSummary, annotate};
pub use config::{AnalyzerConfig, DEFAULT_IGNORES, MAX_FILE_SIZE};
pub use error::{AnalyzeError, Result};
pub use extractor::{
    ExtractError, FileImportExtractor, SourceOverflow, imports_from_file, imports_from_source,
};
pub use parser::{FromImport, import_from_line, parse_from_import};
pub use resolver::{RelativeImportError, resolve_relative_import};
pub use result::{AnalysisResult, ScanDiagnostic};
