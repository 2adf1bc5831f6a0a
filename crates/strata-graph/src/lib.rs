//! # strata-graph
//!
//! Pure data structures for Python module dependency graphs.
//!
//! This crate holds the graph model and everything that can be computed
//! from it without scanning source files:
//!
//! - [`codec`]: path to dotted module name conversion and back
//! - [`Module`] / [`DependencyGraph`]: the node entity and the digraph
//! - [`ModuleHierarchy`]: per-package level views and aggregated edges
//! - [`GraphFilter`], [`render_tree`], [`GraphStatistics`]: presentation helpers
//! - [`runtime`]: the filesystem abstraction shared with `strata-analysis`
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────┐      ┌─────────────────────────┐
//! │     DependencyGraph      │─────▶│     ModuleHierarchy     │
//! │  name -> Module          │ Arc  │  path -> level index    │
//! │  name -> {targets}       │      │  aggregated edges       │
//! └──────────────────────────┘      └─────────────────────────┘
//!              ▲
//!              │ codec (root-relative names)
//!        ┌─────┴─────┐
//!        │  Runtime  │  native / in-memory
//!        └───────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use strata_graph::{DependencyGraph, Module};
//!
//! let mut graph = DependencyGraph::new();
//! graph.add_module(Module::builder("app", "/repo/app/").package(true).build())?;
//! graph.add_module(Module::new("app.models", "/repo/app/models.py"))?;
//! graph.add_module(Module::new("app.views", "/repo/app/views.py"))?;
//! graph.add_dependency("app.models", "app.views")?;
//!
//! assert_eq!(graph.edges(), vec![("app.models", "app.views")]);
//! graph.validate()?;
//! # Ok::<(), strata_graph::GraphError>(())
//! ```

pub mod codec;
mod error;
mod filter;
mod graph;
pub mod hierarchy;
mod module;
pub mod runtime;
mod statistics;
mod tree;

#[cfg(test)]
mod tests;

pub use error::{GraphError, Result};
pub use filter::GraphFilter;
pub use graph::{DependencyGraph, GraphSnapshot};
pub use hierarchy::{AggregatedDependencies, LevelView, ModuleHierarchy, ModuleInfo};
pub use module::{Module, ModuleBuilder};
pub use runtime::{FileMetadata, Runtime, RuntimeError, RuntimeResult};
pub use statistics::GraphStatistics;
pub use tree::render_tree;

#[cfg(not(target_family = "wasm"))]
pub use runtime::native::NativeRuntime;
