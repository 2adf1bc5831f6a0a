//! Property-based tests for the codec, graph, and hierarchy.
//!
//! Run with: cargo test --package strata-graph property_tests

use std::collections::BTreeSet;
use std::path::Path;
use std::sync::Arc;

use proptest::prelude::*;

use crate::codec::{file_path_from_module_name, module_name_from_file_path, parent_module};
use crate::runtime::test_utils::MemoryRuntime;
use crate::{DependencyGraph, Module, ModuleHierarchy};

/// Strategy for a dotted module name with 1-4 segments.
fn module_name_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z][a-z0-9_]{0,6}", 1..=4).prop_map(|parts| parts.join("."))
}

/// Build a graph holding `names`, all of their ancestors, and the edges
/// given as index pairs into the sorted node list.
fn graph_with_ancestors(names: &[String], edges: &[(usize, usize)]) -> DependencyGraph {
    let mut all: BTreeSet<String> = BTreeSet::new();
    for name in names {
        let segments: Vec<&str> = name.split('.').collect();
        for i in 1..=segments.len() {
            all.insert(segments[..i].join("."));
        }
    }

    let mut graph = DependencyGraph::new();
    for name in &all {
        graph
            .add_module(Module::new(name.as_str(), format!("/r/{}.py", name.replace('.', "/"))))
            .unwrap();
    }

    let nodes: Vec<&String> = all.iter().collect();
    for (a, b) in edges {
        let from = nodes[a % nodes.len()];
        let to = nodes[b % nodes.len()];
        if from != to {
            graph.add_dependency(from, to).unwrap();
        }
    }
    graph
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Property: leaf module names survive a path round trip.
    #[test]
    fn prop_codec_round_trip(
        parts in prop::collection::vec("[a-z][a-z0-9_]{0,6}", 2..=5)
    ) {
        let name = parts.join(".");
        let root = Path::new("/repo");
        let runtime = MemoryRuntime::new();

        let path = file_path_from_module_name(&name, root, &runtime);
        prop_assert_eq!(module_name_from_file_path(&path, root), name);
    }

    /// Property: the parent has exactly one segment fewer, and is empty
    /// iff the name has no dot.
    #[test]
    fn prop_parent_segment_count(name in module_name_strategy()) {
        let parent = parent_module(&name);
        let segments = name.split('.').count();

        if parent.is_empty() {
            prop_assert!(!name.contains('.'));
        } else {
            prop_assert_eq!(parent.split('.').count(), segments - 1);
        }
    }

    /// Property: graphs built with ancestor synthesis validate.
    #[test]
    fn prop_ancestor_closure(
        names in prop::collection::vec(module_name_strategy(), 1..=15),
        edges in prop::collection::vec((0usize..64, 0usize..64), 0..=20)
    ) {
        let graph = graph_with_ancestors(&names, &edges);
        prop_assert!(graph.validate().is_ok());

        for module in graph.modules() {
            if !module.parent_name.is_empty() {
                prop_assert!(graph.contains(&module.parent_name));
            }
        }
    }

    /// Property: root-level aggregation counts exactly the edges whose
    /// endpoints fall under distinct top-level names.
    #[test]
    fn prop_root_aggregation_sum(
        names in prop::collection::vec(module_name_strategy(), 1..=15),
        edges in prop::collection::vec((0usize..64, 0usize..64), 0..=20)
    ) {
        let graph = graph_with_ancestors(&names, &edges);
        let expected = graph
            .edges()
            .into_iter()
            .filter(|(from, to)| from.split('.').next() != to.split('.').next())
            .count();

        let hierarchy = ModuleHierarchy::new(Arc::new(graph));
        let total: usize = hierarchy.aggregated_dependencies("").values().sum();
        prop_assert_eq!(total, expected);
    }

    /// Property: dependency and dependent lists mirror each other.
    #[test]
    fn prop_dependency_dependent_symmetry(
        names in prop::collection::vec(module_name_strategy(), 1..=15),
        edges in prop::collection::vec((0usize..64, 0usize..64), 0..=20)
    ) {
        let graph = graph_with_ancestors(&names, &edges);
        for (from, to) in graph.edges() {
            prop_assert!(graph.dependents(to).contains(&from));
            prop_assert!(graph.dependencies(from).contains(&to));
        }
    }
}
