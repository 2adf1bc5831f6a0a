//! Command implementations for the Strata CLI.
//!
//! - [`scan`] - Scan and summarize
//! - [`tree`] - Module tree
//! - [`level`] - One hierarchy level with aggregated edges
//! - [`info`] - Single module attributes
//! - [`graph`] - Filtered graph listing
//!
//! Each command provides an `execute` function that takes the parsed
//! arguments and returns a Result.

pub mod graph;
pub mod info;
pub mod level;
pub mod scan;
pub mod tree;
pub(crate) mod utils;

pub use graph::execute as graph_execute;
pub use info::execute as info_execute;
pub use level::execute as level_execute;
pub use scan::execute as scan_execute;
pub use tree::execute as tree_execute;
