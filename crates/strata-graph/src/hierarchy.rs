//! Package-level views over a completed dependency graph.
//!
//! [`ModuleHierarchy`] indexes every parent path (with `""` as the root)
//! to the leaf modules and child packages directly below it, and folds
//! module-level edges into weighted edges between the children of any
//! chosen level.
//!
//! ```rust
//! use std::sync::Arc;
//! use strata_graph::{DependencyGraph, Module, ModuleHierarchy};
//!
//! let graph = DependencyGraph::from_modules([
//!     Module::builder("app", "/r/app").package(true).build(),
//!     Module::builder("app.models", "/r/app/models.py").dependency("app.views").build(),
//!     Module::new("app.views", "/r/app/views.py"),
//! ])?;
//!
//! let hierarchy = ModuleHierarchy::new(Arc::new(graph));
//! let weights = hierarchy.aggregated_dependencies("app");
//! assert_eq!(weights.get(&("models".to_string(), "views".to_string())), Some(&1));
//! # Ok::<(), strata_graph::GraphError>(())
//! ```

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use serde::Serialize;

use crate::codec::simple_name;
use crate::{DependencyGraph, Module};

/// Weighted edges between the children of one level, keyed by
/// `(source_child, target_child)`.
pub type AggregatedDependencies = BTreeMap<(String, String), usize>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct HierarchyLevel {
    /// Full names of leaf modules whose parent is this level.
    modules: BTreeSet<String>,
    /// Simple names of packages directly below this level.
    packages: BTreeSet<String>,
}

/// Read-only hierarchy index over a graph snapshot.
#[derive(Debug, Clone)]
pub struct ModuleHierarchy {
    graph: Arc<DependencyGraph>,
    levels: BTreeMap<String, HierarchyLevel>,
}

/// Direct children of one hierarchy level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LevelView<'a> {
    pub path: String,
    /// Leaf modules, sorted by name.
    pub modules: Vec<&'a Module>,
    /// Child package simple names, sorted.
    pub packages: Vec<&'a str>,
}

impl LevelView<'_> {
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty() && self.packages.is_empty()
    }
}

/// Attribute snapshot of one module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleInfo {
    pub name: String,
    pub parent: String,
    pub file_path: PathBuf,
    pub is_package: bool,
    pub depth: usize,
    pub dependencies: Vec<String>,
    pub dependency_count: usize,
}

impl ModuleHierarchy {
    /// Index `graph`. The graph is treated as an immutable snapshot; build a
    /// new hierarchy after rescanning.
    pub fn new(graph: Arc<DependencyGraph>) -> Self {
        let mut levels: BTreeMap<String, HierarchyLevel> = BTreeMap::new();
        levels.insert(String::new(), HierarchyLevel::default());

        for module in graph.modules.values() {
            let level = levels.entry(module.parent_name.clone()).or_default();
            if module.is_package {
                level.packages.insert(module.simple_name().to_string());
            } else {
                level.modules.insert(module.name.clone());
            }

            // Every ancestor is a package of its own parent level
            let segments: Vec<&str> = module.name.split('.').collect();
            for i in 1..segments.len() {
                let parent = segments[..i - 1].join(".");
                levels
                    .entry(parent)
                    .or_default()
                    .packages
                    .insert(segments[i - 1].to_string());
            }
        }

        Self { graph, levels }
    }

    pub fn graph(&self) -> &DependencyGraph {
        &self.graph
    }

    /// Every indexed level path, sorted, starting with the root `""`.
    pub fn level_paths(&self) -> impl Iterator<Item = &str> {
        self.levels.keys().map(String::as_str)
    }

    /// Children of `path`. Unknown paths yield an empty view.
    pub fn level_view(&self, path: &str) -> LevelView<'_> {
        let mut view = LevelView {
            path: path.to_string(),
            modules: Vec::new(),
            packages: Vec::new(),
        };

        if let Some(level) = self.levels.get(path) {
            view.modules = level
                .modules
                .iter()
                .filter_map(|name| self.graph.module(name))
                .collect();
            view.packages = level.packages.iter().map(String::as_str).collect();
        }

        view
    }

    /// Fold every graph edge into an edge between the children of `path`.
    ///
    /// Both endpoints must lie strictly below `path` (any node qualifies at
    /// the root) and map to recognized children of the level. Pairs where
    /// both endpoints land on the same child are dropped.
    pub fn aggregated_dependencies(&self, path: &str) -> AggregatedDependencies {
        let mut aggregated = AggregatedDependencies::new();
        let Some(level) = self.levels.get(path) else {
            return aggregated;
        };

        let recognized: BTreeSet<&str> = level
            .modules
            .iter()
            .map(|name| simple_name(name))
            .chain(level.packages.iter().map(String::as_str))
            .collect();

        for (from, to) in self.graph.edges() {
            let (Some(source), Some(target)) = (child_under(path, from), child_under(path, to))
            else {
                continue;
            };
            if source == target || !recognized.contains(source) || !recognized.contains(target) {
                continue;
            }
            *aggregated
                .entry((source.to_string(), target.to_string()))
                .or_default() += 1;
        }

        aggregated
    }

    /// Attribute snapshot of `name`, or `None` if it is not a node.
    pub fn module_info(&self, name: &str) -> Option<ModuleInfo> {
        let module = self.graph.module(name)?;
        Some(ModuleInfo {
            name: module.name.clone(),
            parent: module.parent_name.clone(),
            file_path: module.file_path.clone(),
            is_package: module.is_package,
            depth: module.depth,
            dependencies: module.dependencies.iter().cloned().collect(),
            dependency_count: module.dependency_count(),
        })
    }
}

/// First segment of `name` below `path`, or `None` when `name` is not
/// strictly nested under `path`.
fn child_under<'a>(path: &str, name: &'a str) -> Option<&'a str> {
    let rest = if path.is_empty() {
        name
    } else {
        name.strip_prefix(path)?.strip_prefix('.')?
    };
    rest.split('.').next().filter(|s| !s.is_empty())
}

impl fmt::Display for ModuleInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parent = if self.parent.is_empty() {
            "(top level)"
        } else {
            &self.parent
        };
        writeln!(f, "Name:         {}", self.name)?;
        writeln!(f, "Parent:       {}", parent)?;
        writeln!(f, "File:         {}", self.file_path.display())?;
        writeln!(f, "Package:      {}", if self.is_package { "yes" } else { "no" })?;
        writeln!(f, "Depth:        {}", self.depth)?;
        write!(f, "Dependencies: {}", self.dependency_count)?;
        for dep in &self.dependencies {
            write!(f, "\n  - {dep}")?;
        }
        Ok(())
    }
}
