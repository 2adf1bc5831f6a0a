//! Shared configuration types for scanning.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use strata_graph::Runtime;

/// Maximum source file size in bytes (10MB).
///
/// Larger files are skipped with a diagnostic instead of being read.
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Directory names never descended into.
pub const DEFAULT_IGNORES: &[&str] = &[
    ".git",
    "__pycache__",
    ".venv",
    "venv",
    "env",
    ".tox",
    ".mypy_cache",
    ".pytest_cache",
    "build",
    "dist",
    "node_modules",
    "site-packages",
];

/// Configuration for a single scan.
#[derive(Clone)]
pub struct AnalyzerConfig {
    /// Repository root; module names are relative to it.
    pub root: PathBuf,
    /// Directory names to skip anywhere in the tree.
    pub exclude: Vec<String>,
    /// Whether dot-prefixed directories and files are scanned.
    pub include_hidden: bool,
    pub max_file_size: u64,
    /// Filesystem runtime. `None` uses the native filesystem.
    pub runtime: Option<Arc<dyn Runtime>>,
}

impl AnalyzerConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Whether a directory named `name` is pruned from the walk.
    pub fn is_excluded(&self, name: &str) -> bool {
        (!self.include_hidden && name.starts_with('.'))
            || self.exclude.iter().any(|pattern| pattern == name)
    }
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            exclude: DEFAULT_IGNORES.iter().map(|s| s.to_string()).collect(),
            include_hidden: false,
            max_file_size: MAX_FILE_SIZE,
            runtime: None,
        }
    }
}

impl fmt::Debug for AnalyzerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnalyzerConfig")
            .field("root", &self.root)
            .field("exclude", &self.exclude)
            .field("include_hidden", &self.include_hidden)
            .field("max_file_size", &self.max_file_size)
            .field("runtime", &self.runtime.as_ref().map(|_| "<dyn Runtime>"))
            .finish()
    }
}
