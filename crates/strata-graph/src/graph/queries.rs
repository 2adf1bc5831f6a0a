//! Read-only queries for DependencyGraph.
//!
//! Every list-returning query is sorted so callers get a deterministic view
//! regardless of hash-map iteration order.

use rustc_hash::FxHashSet;

use super::DependencyGraph;
use crate::Module;

impl DependencyGraph {
    pub fn contains(&self, name: &str) -> bool {
        self.modules.contains_key(name)
    }

    pub fn module(&self, name: &str) -> Option<&Module> {
        self.modules.get(name)
    }

    /// All modules, sorted by name.
    pub fn modules(&self) -> Vec<&Module> {
        let mut modules: Vec<&Module> = self.modules.values().collect();
        modules.sort_by(|a, b| a.name.cmp(&b.name));
        modules
    }

    /// All node names, sorted.
    pub fn module_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.modules.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// All edges as `(source, target)` pairs, sorted.
    pub fn edges(&self) -> Vec<(&str, &str)> {
        let mut edges: Vec<(&str, &str)> = self
            .dependencies
            .iter()
            .flat_map(|(from, targets)| targets.iter().map(move |to| (from.as_str(), to.as_str())))
            .collect();
        edges.sort_unstable();
        edges
    }

    pub fn has_edge(&self, from: &str, to: &str) -> bool {
        self.dependencies
            .get(from)
            .is_some_and(|targets| targets.contains(to))
    }

    /// Modules that `name` imports directly.
    pub fn dependencies(&self, name: &str) -> Vec<&str> {
        sorted(self.dependencies.get(name))
    }

    /// Modules that import `name` directly.
    pub fn dependents(&self, name: &str) -> Vec<&str> {
        sorted(self.dependents.get(name))
    }

    /// In-degree plus out-degree.
    pub fn degree(&self, name: &str) -> usize {
        let out = self.dependencies.get(name).map_or(0, FxHashSet::len);
        let inc = self.dependents.get(name).map_or(0, FxHashSet::len);
        out + inc
    }

    /// Direct children of `parent` (`""` for top-level nodes), sorted.
    pub fn children(&self, parent: &str) -> Vec<&Module> {
        let mut children: Vec<&Module> = self
            .modules
            .values()
            .filter(|m| m.parent_name == parent)
            .collect();
        children.sort_by(|a, b| a.name.cmp(&b.name));
        children
    }

    pub fn node_count(&self) -> usize {
        self.modules.len()
    }

    pub fn edge_count(&self) -> usize {
        self.dependencies.values().map(FxHashSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Subgraph induced by the modules accepted by `keep`.
    ///
    /// Edges survive only when both endpoints are kept; each kept module's
    /// `dependencies` is trimmed to match.
    pub fn induced_subgraph<F>(&self, mut keep: F) -> DependencyGraph
    where
        F: FnMut(&Module) -> bool,
    {
        let kept: FxHashSet<&str> = self
            .modules
            .values()
            .filter(|m| keep(m))
            .map(|m| m.name.as_str())
            .collect();

        let mut sub = DependencyGraph::new();
        for name in &kept {
            if let Some(module) = self.modules.get(*name) {
                let mut module = module.clone();
                module.dependencies.retain(|dep| kept.contains(dep.as_str()));
                sub.modules.insert(module.name.clone(), module);
            }
        }

        for (from, to) in self.edges() {
            if kept.contains(from) && kept.contains(to) {
                sub.dependencies
                    .entry(from.to_string())
                    .or_default()
                    .insert(to.to_string());
                sub.dependents
                    .entry(to.to_string())
                    .or_default()
                    .insert(from.to_string());
            }
        }

        sub
    }
}

fn sorted(set: Option<&FxHashSet<String>>) -> Vec<&str> {
    let mut names: Vec<&str> = set
        .map(|s| s.iter().map(String::as_str).collect())
        .unwrap_or_default();
    names.sort_unstable();
    names
}
