//! In-memory dependency graph.
//!
//! Nodes live in a name-keyed table; edges are kept as forward and reverse
//! adjacency sets. Every mutation goes through methods that keep the
//! adjacency sets and each [`Module::dependencies`](crate::Module) in step,
//! so the graph stays a simple digraph with at most one edge per ordered
//! pair.

mod construction;
mod mutations;
mod queries;
mod serialization;
mod validation;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::Module;

pub use serialization::GraphSnapshot;

/// Directed graph of modules keyed by dotted name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyGraph {
    pub(crate) modules: FxHashMap<String, Module>,
    pub(crate) dependencies: FxHashMap<String, FxHashSet<String>>,
    pub(crate) dependents: FxHashMap<String, FxHashSet<String>>,
}
