//! Structural invariant checks for DependencyGraph.

use super::DependencyGraph;
use crate::codec::{module_depth, parent_module};
use crate::{GraphError, Result};

impl DependencyGraph {
    /// Check the structural invariants of the graph.
    ///
    /// - every node's `parent_name` is derived from its name
    /// - every non-empty parent is itself a node (ancestor closure)
    /// - every node's depth is its parent's depth plus one
    /// - `dependencies` only names graph nodes and mirrors the adjacency sets
    ///
    /// Returns the first violation found, in name order.
    pub fn validate(&self) -> Result<()> {
        for module in self.modules() {
            let name = module.name.as_str();
            let violation = |reason: String| GraphError::InvariantViolation {
                module: name.to_string(),
                reason,
            };

            if module.parent_name != parent_module(name) {
                return Err(violation(format!(
                    "parent_name '{}' does not match derived parent '{}'",
                    module.parent_name,
                    parent_module(name)
                )));
            }

            if module.depth != module_depth(name) {
                return Err(violation(format!(
                    "depth {} does not match {} dot separators",
                    module.depth,
                    module_depth(name)
                )));
            }

            if !module.parent_name.is_empty() && !self.contains(&module.parent_name) {
                return Err(violation(format!(
                    "ancestor '{}' is not a node",
                    module.parent_name
                )));
            }

            for dep in &module.dependencies {
                if !self.contains(dep) {
                    return Err(violation(format!("dependency '{dep}' is not a node")));
                }
                if !self.has_edge(name, dep) {
                    return Err(violation(format!("dependency '{dep}' has no edge")));
                }
            }

            let adjacency = self.dependencies.get(name).map_or(0, |targets| targets.len());
            if adjacency != module.dependencies.len() {
                return Err(violation(format!(
                    "{} edges recorded but {} dependencies listed",
                    adjacency,
                    module.dependencies.len()
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{DependencyGraph, GraphError, Module};

    #[test]
    fn test_valid_graph() {
        let graph = DependencyGraph::from_modules([
            Module::new("app", "/r/app"),
            Module::builder("app.a", "/r/app/a.py").dependency("app.b").build(),
            Module::new("app.b", "/r/app/b.py"),
        ])
        .unwrap();
        assert!(graph.validate().is_ok());
    }

    #[test]
    fn test_missing_ancestor_is_reported() {
        let graph = DependencyGraph::from_modules([Module::new("app.a", "/r/app/a.py")]).unwrap();
        let err = graph.validate().unwrap_err();
        assert!(
            matches!(err, GraphError::InvariantViolation { module, .. } if module == "app.a")
        );
    }

    #[test]
    fn test_wrong_depth_is_reported() {
        let mut graph = DependencyGraph::from_modules([Module::new("app", "/r/app")]).unwrap();
        graph.set_depth("app", 3).unwrap();
        assert!(graph.validate().is_err());
    }
}
