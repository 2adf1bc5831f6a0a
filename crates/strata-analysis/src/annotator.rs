//! Post-build annotation of package flags and depths.

use std::path::Path;

use strata_graph::codec::{file_path_from_module_name, module_depth};
use strata_graph::{DependencyGraph, Runtime};

use crate::Result;

/// Counts reported by [`annotate`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnnotationSummary {
    pub packages: usize,
    pub max_depth: usize,
}

/// Mark packages and set depths on every node.
///
/// A node is a package iff its name maps back to an existing directory
/// under `root`; this overrides any flag set while building, and a package
/// node always ends up with that directory as its file path. Depth is the
/// number of dots in the name. Running it twice yields the same graph.
pub fn annotate(
    graph: &mut DependencyGraph,
    root: &Path,
    runtime: &dyn Runtime,
) -> Result<AnnotationSummary> {
    let names: Vec<String> = graph.module_names().into_iter().map(str::to_string).collect();
    let mut summary = AnnotationSummary::default();

    for name in &names {
        let path = file_path_from_module_name(name, root, runtime);
        let is_package = runtime.is_dir(&path);
        graph.set_package(name, is_package)?;
        if is_package {
            // Placeholders for namespace packages still carry the importer's path
            if graph.module(name).is_some_and(|m| m.file_path != path) {
                graph.set_file_path(name, path)?;
            }
            summary.packages += 1;
        }
    }

    for name in &names {
        let depth = module_depth(name);
        graph.set_depth(name, depth)?;
        summary.max_depth = summary.max_depth.max(depth);
    }

    tracing::info!(
        "Annotated {} modules: {} packages, max depth {}",
        names.len(),
        summary.packages,
        summary.max_depth
    );

    Ok(summary)
}
