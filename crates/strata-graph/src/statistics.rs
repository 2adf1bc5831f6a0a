use std::fmt;

use serde::{Deserialize, Serialize};

use crate::DependencyGraph;

/// Summary counts for a dependency graph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphStatistics {
    pub module_count: usize,
    pub package_count: usize,
    pub edge_count: usize,
    pub top_level_count: usize,
    pub max_depth: usize,
}

impl DependencyGraph {
    /// Compute a statistics snapshot.
    pub fn statistics(&self) -> GraphStatistics {
        let mut stats = GraphStatistics {
            edge_count: self.edge_count(),
            ..GraphStatistics::default()
        };

        for module in self.modules.values() {
            stats.module_count += 1;
            if module.is_package {
                stats.package_count += 1;
            }
            if module.is_top_level() {
                stats.top_level_count += 1;
            }
            stats.max_depth = stats.max_depth.max(module.depth);
        }

        stats
    }
}

impl fmt::Display for GraphStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Modules:     {}", self.module_count)?;
        writeln!(f, "Packages:    {}", self.package_count)?;
        writeln!(f, "Top-level:   {}", self.top_level_count)?;
        writeln!(f, "Edges:       {}", self.edge_count)?;
        write!(f, "Max depth:   {}", self.max_depth)
    }
}
