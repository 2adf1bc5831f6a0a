//! Edge case tests for strata-analysis.
//!
//! These tests cover unreadable files, relative imports above the root,
//! excluded and hidden directories, and scans through the in-memory runtime.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use strata_graph::runtime::test_utils::MemoryRuntime;
use tempfile::TempDir;

use super::test_helpers::*;
use crate::{Analyzer, ExtractError, annotate};

#[test]
fn test_empty_file() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let root = create_test_project(&temp, &[("app/empty.py", "")]);

    let result = analyze(root);
    assert!(result.is_ok(), "Empty files should not cause errors");
    assert_eq!(result.graph.module_names(), vec!["app", "app.empty"]);
}

#[test]
fn test_undecodable_file_is_skipped() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let root = create_test_project(
        &temp,
        &[("app/good.py", "import app.bad\n"), ("app/other.py", "")],
    );
    fs::write(root.join("app/bad.py"), [0x69u8, 0x6d, 0x70, 0xff, 0xfe, 0x0a])
        .expect("Failed to write file");

    let result = analyze(root.clone());

    assert_eq!(result.files_scanned, 3);
    assert_eq!(result.files_skipped, 1);
    assert!(!result.is_ok());
    assert_eq!(result.diagnostics[0].path, root.join("app/bad.py"));
    assert!(matches!(result.diagnostics[0].error, ExtractError::Decode { .. }));

    // The node survives; only its imports are lost
    assert!(result.graph.contains("app.bad"));
    assert!(result.graph.has_edge("app.good", "app.bad"));
}

#[test]
fn test_relative_import_overflow_is_a_diagnostic() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let root = create_test_project(
        &temp,
        &[
            ("app/deep.py", "import app.ok\nfrom ...outside import x\n"),
            ("app/ok.py", ""),
        ],
    );

    let result = analyze(root);

    assert_eq!(result.files_skipped, 1);
    match &result.diagnostics[0].error {
        ExtractError::RelativeImportOverflow { line, discarded, .. } => {
            assert_eq!(*line, 2);
            assert_eq!(*discarded, 1);
        }
        other => panic!("unexpected diagnostic: {other}"),
    }
    // No edge is recorded from a file whose extraction failed
    assert!(result.graph.dependencies("app.deep").is_empty());
    assert!(!result.graph.contains("outside"));
}

#[test]
fn test_default_ignores_are_pruned() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let root = create_test_project(
        &temp,
        &[
            ("app/main.py", "import venv.lib\n"),
            ("venv/lib/site.py", ""),
            ("app/__pycache__/main.py", ""),
        ],
    );

    let result = analyze(root);

    assert_eq!(result.top_level_packages, vec!["app"]);
    assert_eq!(result.graph.module_names(), vec!["app", "app.main"]);
    assert_eq!(result.graph.edge_count(), 0);
}

#[test]
fn test_custom_exclude() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let root = create_test_project(
        &temp,
        &[("app/main.py", ""), ("app/migrations/0001.py", ""), ("tests/test_main.py", "")],
    );

    let result = Analyzer::new()
        .root(root)
        .exclude(["migrations", "tests"])
        .analyze()
        .unwrap();

    assert_eq!(result.graph.module_names(), vec!["app", "app.main"]);
}

#[test]
fn test_hidden_directories() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let root = create_test_project(
        &temp,
        &[("app/main.py", ""), ("app/.cache/stale.py", ""), (".tools/lint.py", "")],
    );

    let result = analyze(root.clone());
    assert_eq!(result.graph.module_names(), vec!["app", "app.main"]);

    let result = Analyzer::new()
        .root(root)
        .include_hidden(true)
        .analyze()
        .unwrap();
    assert_eq!(result.files_scanned, 3);
    // Hidden directories never count as top-level packages
    assert_eq!(result.top_level_packages, vec!["app"]);
}

#[test]
fn test_file_too_large() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let root = create_test_project(
        &temp,
        &[("app/big.py", "import app.small\n"), ("app/small.py", "")],
    );

    let result = Analyzer::new().root(root).max_file_size(8).analyze().unwrap();

    assert_eq!(result.files_skipped, 1);
    assert!(matches!(
        result.diagnostics[0].error,
        ExtractError::FileTooLarge { limit: 8, .. }
    ));
    assert_eq!(result.graph.edge_count(), 0);
}

#[test]
fn test_root_level_modules_are_not_internal() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let root = create_test_project(
        &temp,
        &[("main.py", "import helpers\nimport app.core\n"), ("helpers.py", ""), ("app/core.py", "")],
    );

    let result = analyze(root);

    assert!(result.graph.has_edge("main", "app.core"));
    assert!(!result.graph.has_edge("main", "helpers"));
    assert_eq!(result.graph.edge_count(), 1);
}

#[test]
fn test_placeholder_for_missing_module() {
    let runtime = MemoryRuntime::new()
        .with_file("/repo/app/a.py", "from app.gone.sub import thing\n");

    let result = Analyzer::new()
        .root("/repo")
        .runtime(Arc::new(runtime))
        .analyze()
        .unwrap();

    let graph = &result.graph;
    assert_eq!(graph.module_names(), vec!["app", "app.a", "app.gone", "app.gone.sub"]);
    assert_eq!(
        graph.module("app.gone.sub").unwrap().file_path,
        PathBuf::from("/repo/app/a.py")
    );
    assert!(!graph.module("app.gone").unwrap().is_package);
    graph.validate().unwrap();
}

#[test]
fn test_annotation_is_idempotent_after_scan() {
    let runtime = Arc::new(
        MemoryRuntime::new()
            .with_file("/repo/pkg/__init__.py", "")
            .with_file("/repo/pkg/sub/mod.py", "from .. import x\n"),
    );

    let result = Analyzer::new()
        .root("/repo")
        .runtime(runtime.clone())
        .analyze()
        .unwrap();

    let mut graph = result.graph.clone();
    annotate(&mut graph, &result.root, runtime.as_ref()).unwrap();
    assert_eq!(graph, result.graph);
}

#[test]
fn test_duplicate_imports_collapse() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let root = create_test_project(
        &temp,
        &[
            ("app/a.py", "import app.b\nfrom app.b import x\nimport app.b as b\n"),
            ("app/b.py", ""),
            ("app/c.py", "import app.b\n"),
        ],
    );

    let result = analyze(root);
    assert_eq!(result.graph.dependents("app.b"), vec!["app.a", "app.c"]);
    assert_eq!(result.graph.module("app.a").unwrap().dependency_count(), 1);
}
