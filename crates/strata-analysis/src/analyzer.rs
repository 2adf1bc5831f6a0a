//! Repository scan that builds the module dependency graph.
//!
//! The [`Analyzer`] walks every source file under a root, creates one node
//! per module, synthesizes the ancestor packages of every node, and records
//! an edge for each import that targets a top-level package of the
//! repository. Imports of anything else (stdlib, third-party) are dropped.
//!
//! ```rust,no_run
//! use strata_analysis::Analyzer;
//!
//! # fn example() -> strata_analysis::Result<()> {
//! let result = Analyzer::new()
//!     .root("path/to/repo")
//!     .exclude(["migrations"])
//!     .analyze()?;
//!
//! println!("{}", result.statistics());
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;

use path_clean::PathClean;
use strata_graph::codec::{
    PACKAGE_MARKER, file_path_from_module_name, is_package_marker, is_source_file,
    module_name_from_file_path, parent_module,
};
use strata_graph::{DependencyGraph, Runtime};

use crate::annotator::annotate;
use crate::config::AnalyzerConfig;
use crate::extractor::FileImportExtractor;
use crate::result::{AnalysisResult, ScanDiagnostic};
use crate::{AnalyzeError, Result};

/// Builder-style entry point for a scan.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    config: AnalyzerConfig,
}

impl Analyzer {
    /// Create an analyzer with the default configuration, rooted at `.`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an analyzer from an existing configuration.
    pub fn with_config(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    /// Set the repository root.
    pub fn root(mut self, root: impl Into<PathBuf>) -> Self {
        self.config.root = root.into();
        self
    }

    /// Skip directories with these names, on top of the defaults.
    pub fn exclude(mut self, names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.config.exclude.extend(names.into_iter().map(Into::into));
        self
    }

    /// Whether dot-prefixed directories are scanned (default: false).
    pub fn include_hidden(mut self, include: bool) -> Self {
        self.config.include_hidden = include;
        self
    }

    /// Files larger than `bytes` are skipped with a diagnostic.
    pub fn max_file_size(mut self, bytes: u64) -> Self {
        self.config.max_file_size = bytes;
        self
    }

    /// Set the runtime for filesystem operations.
    ///
    /// If not set, the native filesystem is used.
    pub fn runtime(mut self, runtime: Arc<dyn Runtime>) -> Self {
        self.config.runtime = Some(runtime);
        self
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Run the scan.
    ///
    /// # Errors
    ///
    /// - [`AnalyzeError::Configuration`] if the root is missing or not a
    ///   directory
    /// - [`AnalyzeError::EmptyResult`] if no source file was found
    ///
    /// Files that cannot be read or whose imports cannot be resolved do not
    /// fail the scan; they are reported in [`AnalysisResult::diagnostics`].
    pub fn analyze(self) -> Result<AnalysisResult> {
        let runtime = self.get_runtime()?;
        let root = self.config.root.clean();

        if !runtime.exists(&root) {
            return Err(AnalyzeError::configuration(root, "directory does not exist"));
        }
        if !runtime.is_dir(&root) {
            return Err(AnalyzeError::configuration(root, "not a directory"));
        }

        let top_level_packages = self.top_level_packages(&root, runtime.as_ref())?;
        tracing::debug!("Top-level packages: {:?}", top_level_packages);

        let files = self.source_files(&root, runtime.as_ref())?;
        if files.is_empty() {
            return Err(AnalyzeError::EmptyResult(root));
        }

        let extractor = FileImportExtractor::new(&root, runtime.as_ref())
            .max_file_size(self.config.max_file_size);
        let mut builder = GraphBuilder {
            root: &root,
            runtime: runtime.as_ref(),
            top_level_packages: &top_level_packages,
            graph: DependencyGraph::new(),
        };
        let mut diagnostics = Vec::new();

        for file in &files {
            tracing::debug!("Scanning {}", file.display());
            let name = builder.add_file(file)?;

            match extractor.extract(file) {
                Ok(imports) => builder.add_imports(&name, file, &imports)?,
                Err(error) => {
                    tracing::warn!("Skipping imports of {}: {}", file.display(), error);
                    diagnostics.push(ScanDiagnostic {
                        path: file.clone(),
                        error,
                    });
                }
            }
        }

        let mut graph = builder.graph;
        annotate(&mut graph, &root, runtime.as_ref())?;

        tracing::info!(
            "Scanned {} files: {} modules, {} edges, {} skipped",
            files.len(),
            graph.node_count(),
            graph.edge_count(),
            diagnostics.len()
        );

        Ok(AnalysisResult {
            root,
            graph,
            top_level_packages,
            files_skipped: diagnostics.len(),
            files_scanned: files.len(),
            diagnostics,
        })
    }

    fn get_runtime(&self) -> Result<Arc<dyn Runtime>> {
        if let Some(ref runtime) = self.config.runtime {
            return Ok(Arc::clone(runtime));
        }

        #[cfg(not(target_family = "wasm"))]
        {
            Ok(Arc::new(strata_graph::NativeRuntime::new()))
        }
        #[cfg(target_family = "wasm")]
        {
            Err(AnalyzeError::Runtime(strata_graph::RuntimeError::Other(
                "a runtime is required on wasm targets".to_string(),
            )))
        }
    }

    /// Names of the non-hidden, non-excluded directories directly under root.
    fn top_level_packages(&self, root: &Path, runtime: &dyn Runtime) -> Result<Vec<String>> {
        let mut packages: Vec<String> = runtime
            .read_dir(root)?
            .into_iter()
            .filter(|path| runtime.is_dir(path))
            .filter_map(|path| {
                let name = path.file_name()?.to_string_lossy().into_owned();
                (!name.starts_with('.') && !self.config.is_excluded(&name)).then_some(name)
            })
            .collect();
        packages.sort();
        Ok(packages)
    }

    /// Every source file under root, sorted, with excluded directories pruned.
    fn source_files(&self, root: &Path, runtime: &dyn Runtime) -> Result<Vec<PathBuf>> {
        let mut files: Vec<PathBuf> = runtime
            .walk(root, &self.config.exclude)?
            .into_iter()
            .filter(|path| is_source_file(path))
            .filter(|path| {
                let Ok(relative) = path.strip_prefix(root) else {
                    return false;
                };
                let mut dirs: Vec<_> = relative.components().collect();
                dirs.pop();
                !dirs
                    .iter()
                    .any(|dir| self.config.is_excluded(&dir.as_os_str().to_string_lossy()))
            })
            .collect();
        files.sort();
        Ok(files)
    }
}

/// Mutable state of one scan.
struct GraphBuilder<'a> {
    root: &'a Path,
    runtime: &'a dyn Runtime,
    top_level_packages: &'a [String],
    graph: DependencyGraph,
}

impl GraphBuilder<'_> {
    /// Create or reuse the node for `file`, together with its ancestors.
    fn add_file(&mut self, file: &Path) -> Result<String> {
        let name = module_name_from_file_path(file, self.root);
        // A bare `__init__.py` at the root has no enclosing package
        let is_package = is_package_marker(file) && name != PACKAGE_MARKER;

        let file_path = if is_package {
            file_path_from_module_name(&name, self.root, self.runtime)
        } else {
            file.to_path_buf()
        };

        self.ensure_ancestors(&name);
        if !self.graph.ensure_module(&name, file_path.clone()) {
            // Placeholder created by an earlier import; point it at the real file
            self.graph.set_file_path(&name, file_path)?;
        }
        if is_package {
            self.graph.set_package(&name, true)?;
        }

        Ok(name)
    }

    fn add_imports(&mut self, name: &str, file: &Path, imports: &[String]) -> Result<()> {
        for import in imports {
            if !self.is_internal(import) {
                continue;
            }
            if import == name {
                tracing::debug!("Ignoring self-import in {}", name);
                continue;
            }

            self.ensure_ancestors(import);
            if self.graph.ensure_module(import, file) {
                tracing::debug!("Created placeholder for {} from {}", import, name);
            }
            self.graph.add_dependency(name, import)?;
        }
        Ok(())
    }

    /// Create every missing package prefix of `name`, outermost first.
    fn ensure_ancestors(&mut self, name: &str) {
        let mut ancestors = Vec::new();
        let mut current = parent_module(name);
        while !current.is_empty() {
            ancestors.push(current);
            current = parent_module(current);
        }

        for ancestor in ancestors.into_iter().rev() {
            let path = file_path_from_module_name(ancestor, self.root, self.runtime);
            self.graph.ensure_module(ancestor, path);
        }
    }

    fn is_internal(&self, import: &str) -> bool {
        self.top_level_packages.iter().any(|package| {
            import == package
                || import
                    .strip_prefix(package.as_str())
                    .is_some_and(|rest| rest.starts_with('.'))
        })
    }
}

/// Scan `root` on the native filesystem with the default configuration.
#[cfg(not(target_family = "wasm"))]
pub fn build_dependency_graph(root: impl Into<PathBuf>) -> Result<DependencyGraph> {
    Ok(Analyzer::new().root(root).analyze()?.into_graph())
}
