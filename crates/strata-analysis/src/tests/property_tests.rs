//! Property-based tests for parsing, resolution, and scanning.
//!
//! Run with: cargo test --package strata-analysis property_tests

use std::path::PathBuf;
use std::sync::Arc;

use proptest::prelude::*;
use strata_graph::runtime::test_utils::MemoryRuntime;

use crate::{Analyzer, annotate, import_from_line, resolve_relative_import};

fn segment_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,6}".prop_filter("keywords", |s| s != "as" && s != "import")
}

fn module_name_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(segment_strategy(), 1..=4).prop_map(|parts| parts.join("."))
}

/// A random tree of source files, each importing a few other tree modules.
fn project_strategy() -> impl Strategy<Value = Vec<(Vec<String>, Vec<usize>)>> {
    prop::collection::vec(
        (
            prop::collection::vec(segment_strategy(), 2..=4),
            prop::collection::vec(0usize..32, 0..=4),
        ),
        1..=12,
    )
}

fn memory_project(files: &[(Vec<String>, Vec<usize>)]) -> MemoryRuntime {
    let names: Vec<String> = files.iter().map(|(parts, _)| parts.join(".")).collect();
    let mut runtime = MemoryRuntime::new();

    for (parts, imports) in files {
        let source: String = imports
            .iter()
            .map(|i| format!("import {}\n", names[i % names.len()]))
            .collect();
        let mut path = PathBuf::from("/repo");
        path.extend(parts);
        path.set_extension("py");
        runtime.insert_file(path, source);
    }
    runtime
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Property: every target of a direct import is returned, in order.
    #[test]
    fn prop_direct_import_targets(names in prop::collection::vec(module_name_strategy(), 1..=5)) {
        let line = format!("import {}", names.join(", "));
        prop_assert_eq!(import_from_line(&line), names);
    }

    /// Property: aliases never leak into the result.
    #[test]
    fn prop_alias_is_dropped(name in module_name_strategy(), alias in segment_strategy()) {
        let line = format!("import {name} as {alias}");
        prop_assert_eq!(import_from_line(&line), vec![name]);
    }

    /// Property: `n` dots drop `n` segments of the anchor, then the
    /// suffix is appended.
    #[test]
    fn prop_relative_resolution(
        anchor in prop::collection::vec(segment_strategy(), 1..=5),
        dots in 1usize..=5,
        suffix in prop::option::of(module_name_strategy())
    ) {
        let token = format!("{}{}", ".".repeat(dots), suffix.clone().unwrap_or_default());
        let result = resolve_relative_import(&anchor.join("."), &token);

        if dots > anchor.len() {
            prop_assert!(result.is_err());
        } else {
            let mut expected: Vec<String> = anchor[..anchor.len() - dots].to_vec();
            expected.extend(suffix.iter().cloned());
            prop_assert_eq!(result.unwrap(), expected.join("."));
        }
    }

    /// Property: scanned graphs are closed under ancestors and validate,
    /// and re-annotating changes nothing.
    #[test]
    fn prop_scan_invariants(files in project_strategy()) {
        let runtime = Arc::new(memory_project(&files));
        let result = Analyzer::new()
            .root("/repo")
            .runtime(runtime.clone())
            .analyze()
            .unwrap();

        prop_assert!(result.graph.validate().is_ok());
        for module in result.graph.modules() {
            if !module.parent_name.is_empty() {
                prop_assert!(result.graph.contains(&module.parent_name));
            }
            prop_assert!(!module.dependencies.contains(&module.name));
        }

        let mut again = result.graph.clone();
        annotate(&mut again, &result.root, runtime.as_ref()).unwrap();
        prop_assert_eq!(again, result.graph);
    }
}
