//! Graph command implementation.

use strata_graph::GraphFilter;

use crate::cli::GraphArgs;
use crate::commands::utils;
use crate::error::{Result, ResultExt};
use crate::ui;

/// Execute the graph command.
///
/// The package restriction is applied first, then the name pattern, then
/// the connectivity filter.
pub fn execute(args: GraphArgs) -> Result<()> {
    let mut filter = GraphFilter::new().only_connected(args.only_connected);
    if let Some(pattern) = &args.pattern {
        filter = filter
            .pattern(pattern)
            .with_hint("Patterns are regular expressions matched against dotted module names")?;
    }

    let result = utils::run_analysis(&args.source)?;

    let scoped = match &args.package {
        Some(package) => result.graph.package_subgraph(package),
        None => result.graph,
    };
    let graph = if filter.is_noop() {
        scoped
    } else {
        filter.apply(&scoped)
    };

    if args.json {
        println!("{}", graph.to_json()?);
        return Ok(());
    }

    println!("Nodes ({}):", graph.node_count());
    for name in graph.module_names() {
        println!("  {} [{}]", name, graph.degree(name));
    }

    println!("\nEdges ({}):", graph.edge_count());
    for (from, to) in graph.edges() {
        println!("  {}", ui::format_edge(from, to, 1));
    }

    if graph.is_empty() {
        ui::warning("No modules matched the filters");
    }

    Ok(())
}
