use std::collections::BTreeSet;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::codec::{module_depth, parent_module};

/// One module or package node of the dependency graph.
///
/// `dependencies` only ever holds names of other graph nodes; the graph
/// keeps it in sync with its adjacency sets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    /// Canonical dotted name, unique within a graph.
    pub name: String,
    /// Dotted name of the enclosing package, `""` for top-level nodes.
    pub parent_name: String,
    /// Leaf modules point at their `.py` file, packages at their directory.
    pub file_path: PathBuf,
    pub dependencies: BTreeSet<String>,
    pub is_package: bool,
    pub depth: usize,
}

impl Module {
    /// Create a new module builder.
    ///
    /// The parent name and depth are derived from `name`.
    pub fn builder(name: impl Into<String>, file_path: impl Into<PathBuf>) -> ModuleBuilder {
        let name = name.into();
        let parent_name = parent_module(&name).to_string();
        let depth = module_depth(&name);
        ModuleBuilder {
            module: Self {
                name,
                parent_name,
                file_path: file_path.into(),
                dependencies: BTreeSet::new(),
                is_package: false,
                depth,
            },
        }
    }

    /// Shorthand for a module with default attributes.
    pub fn new(name: impl Into<String>, file_path: impl Into<PathBuf>) -> Self {
        Self::builder(name, file_path).build()
    }

    /// Iterate the names this module depends on, in sorted order.
    pub fn dependencies(&self) -> impl Iterator<Item = &str> {
        self.dependencies.iter().map(String::as_str)
    }

    pub fn dependency_count(&self) -> usize {
        self.dependencies.len()
    }

    /// Last dotted segment of the name.
    pub fn simple_name(&self) -> &str {
        crate::codec::simple_name(&self.name)
    }

    pub fn is_top_level(&self) -> bool {
        self.parent_name.is_empty()
    }
}

/// Builder for [`Module`].
#[derive(Debug)]
pub struct ModuleBuilder {
    module: Module,
}

impl ModuleBuilder {
    pub fn package(mut self, is_package: bool) -> Self {
        self.module.is_package = is_package;
        self
    }

    pub fn depth(mut self, depth: usize) -> Self {
        self.module.depth = depth;
        self
    }

    pub fn dependency(mut self, name: impl Into<String>) -> Self {
        self.module.dependencies.insert(name.into());
        self
    }

    pub fn build(self) -> Module {
        self.module
    }
}
