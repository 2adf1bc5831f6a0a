use std::collections::BTreeMap;
use std::fmt::Write as _;

use crate::{DependencyGraph, Module};

/// Render the package hierarchy as an indented tree.
///
/// Packages print as `name/`, leaf modules as `name.py`. Siblings are
/// sorted by name, and nodes whose parent is not in the graph are roots.
pub fn render_tree(graph: &DependencyGraph) -> String {
    let mut children: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    let mut roots = Vec::new();

    for module in graph.modules.values() {
        let parent = module.parent_name.as_str();
        if !parent.is_empty() && graph.contains(parent) {
            children.entry(parent).or_default().push(&module.name);
        } else {
            roots.push(module.name.as_str());
        }
    }

    roots.sort_unstable();
    for list in children.values_mut() {
        list.sort_unstable();
    }

    let mut out = String::new();
    render_level(graph, &children, &roots, "", &mut out);
    out
}

fn render_level(
    graph: &DependencyGraph,
    children: &BTreeMap<&str, Vec<&str>>,
    names: &[&str],
    prefix: &str,
    out: &mut String,
) {
    for (i, name) in names.iter().enumerate() {
        let Some(module) = graph.module(name) else {
            continue;
        };
        let is_last = i + 1 == names.len();
        let connector = if is_last { "└── " } else { "├── " };
        let _ = writeln!(out, "{prefix}{connector}{}", label(module));

        if let Some(kids) = children.get(*name) {
            let next_prefix = format!("{prefix}{}", if is_last { "    " } else { "│   " });
            render_level(graph, children, kids, &next_prefix, out);
        }
    }
}

fn label(module: &Module) -> String {
    let suffix = if module.is_package { "/" } else { ".py" };
    format!("{}{}", module.simple_name(), suffix)
}
