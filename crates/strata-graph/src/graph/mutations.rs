//! Mutation methods for DependencyGraph.

use std::path::PathBuf;

use super::DependencyGraph;
use crate::{GraphError, Module, Result};

impl DependencyGraph {
    /// Add a module if no node with its name exists yet.
    ///
    /// Returns `Ok(false)` and leaves the graph untouched when the name is
    /// already present. Dependencies carried by `module` become edges and
    /// must name existing nodes.
    pub fn add_module(&mut self, mut module: Module) -> Result<bool> {
        if self.modules.contains_key(&module.name) {
            return Ok(false);
        }

        let deps = std::mem::take(&mut module.dependencies);
        let name = module.name.clone();
        self.modules.insert(name.clone(), module);

        for dep in deps {
            self.add_dependency(&name, &dep)?;
        }

        Ok(true)
    }

    /// Make sure a node named `name` exists, creating a plain module at
    /// `file_path` if needed. Returns whether a node was created.
    pub fn ensure_module(&mut self, name: &str, file_path: impl Into<PathBuf>) -> bool {
        if self.modules.contains_key(name) {
            return false;
        }
        self.modules
            .insert(name.to_string(), Module::new(name, file_path));
        true
    }

    /// Add the edge `from -> to`.
    ///
    /// Idempotent: returns `Ok(false)` if the edge already existed. Both
    /// endpoints must already be nodes.
    pub fn add_dependency(&mut self, from: &str, to: &str) -> Result<bool> {
        if !self.modules.contains_key(to) {
            return Err(GraphError::UnknownModule(to.to_string()));
        }
        let Some(source) = self.modules.get_mut(from) else {
            return Err(GraphError::UnknownModule(from.to_string()));
        };

        if !source.dependencies.insert(to.to_string()) {
            return Ok(false);
        }

        self.dependencies
            .entry(from.to_string())
            .or_default()
            .insert(to.to_string());
        self.dependents
            .entry(to.to_string())
            .or_default()
            .insert(from.to_string());

        Ok(true)
    }

    /// Set the package flag of an existing node.
    pub fn set_package(&mut self, name: &str, is_package: bool) -> Result<()> {
        self.node_mut(name)?.is_package = is_package;
        Ok(())
    }

    /// Set the nesting depth of an existing node.
    pub fn set_depth(&mut self, name: &str, depth: usize) -> Result<()> {
        self.node_mut(name)?.depth = depth;
        Ok(())
    }

    /// Replace the file path of an existing node.
    pub fn set_file_path(&mut self, name: &str, file_path: impl Into<PathBuf>) -> Result<()> {
        self.node_mut(name)?.file_path = file_path.into();
        Ok(())
    }

    fn node_mut(&mut self, name: &str) -> Result<&mut Module> {
        self.modules
            .get_mut(name)
            .ok_or_else(|| GraphError::UnknownModule(name.to_string()))
    }
}
