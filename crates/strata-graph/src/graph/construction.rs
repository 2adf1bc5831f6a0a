//! Construction methods for DependencyGraph.

use super::DependencyGraph;
use crate::{Module, Result};

impl DependencyGraph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a graph from modules, deriving edges from each module's
    /// `dependencies`.
    ///
    /// Nodes are inserted first so dependencies may reference modules that
    /// appear later in the iterator. A dependency on a name that is not
    /// among the modules is an error.
    pub fn from_modules<I>(modules: I) -> Result<Self>
    where
        I: IntoIterator<Item = Module>,
    {
        let mut graph = Self::new();
        let mut pending = Vec::new();

        for mut module in modules {
            let deps = std::mem::take(&mut module.dependencies);
            pending.push((module.name.clone(), deps));
            graph.add_module(module)?;
        }

        for (from, deps) in pending {
            for to in deps {
                graph.add_dependency(&from, &to)?;
            }
        }

        Ok(graph)
    }
}
