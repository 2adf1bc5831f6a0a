//! Node filtering and package drill-down views.

use regex::{Regex, RegexBuilder};

use crate::{DependencyGraph, GraphError, Result};

/// Filter applied to a graph before presentation.
///
/// The pattern is matched case-insensitively anywhere in a module name.
/// `only_connected` then drops nodes left without any edge.
#[derive(Debug, Clone, Default)]
pub struct GraphFilter {
    pattern: Option<Regex>,
    only_connected: bool,
}

impl GraphFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep only modules whose name matches `pattern`.
    pub fn pattern(mut self, pattern: &str) -> Result<Self> {
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .map_err(|source| GraphError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })?;
        self.pattern = Some(regex);
        Ok(self)
    }

    /// Drop modules with no incoming or outgoing edge.
    pub fn only_connected(mut self, only_connected: bool) -> Self {
        self.only_connected = only_connected;
        self
    }

    pub fn is_noop(&self) -> bool {
        self.pattern.is_none() && !self.only_connected
    }

    /// Apply the filter, returning the induced subgraph.
    ///
    /// Connectivity is judged after the pattern filter, so a node whose
    /// only neighbours were filtered out is dropped too.
    pub fn apply(&self, graph: &DependencyGraph) -> DependencyGraph {
        let mut filtered = match &self.pattern {
            Some(regex) => graph.induced_subgraph(|m| regex.is_match(&m.name)),
            None => graph.clone(),
        };

        if self.only_connected {
            let snapshot = filtered.clone();
            filtered = snapshot.induced_subgraph(|m| snapshot.degree(&m.name) > 0);
        }

        filtered
    }
}

impl DependencyGraph {
    /// Subgraph of `package` and every module nested below it.
    ///
    /// An empty package name returns the whole graph.
    pub fn package_subgraph(&self, package: &str) -> DependencyGraph {
        if package.is_empty() {
            return self.clone();
        }
        let prefix = format!("{package}.");
        self.induced_subgraph(|m| m.name == package || m.name.starts_with(&prefix))
    }
}
