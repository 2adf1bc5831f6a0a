//! End-to-end scenarios for parsing, resolution, and graph building.

use std::path::Path;

use strata_graph::codec::module_name_from_file_path;
use tempfile::TempDir;

use super::test_helpers::*;
use crate::{AnalyzeError, Analyzer, import_from_line, imports_from_source};

#[test]
fn test_multi_target_import_line() {
    assert_eq!(import_from_line("import os, sys"), vec!["os", "sys"]);
}

#[test]
fn test_single_dot_drops_own_name() {
    let imports = imports_from_source("from .views import main\n", "app.controllers.home").unwrap();
    assert_eq!(imports, vec!["app.controllers.views"]);
}

#[test]
fn test_bare_dot_in_root_level_file() {
    let imports = imports_from_source("from . import local_module\n", "test_imports").unwrap();
    assert_eq!(imports, vec!["local_module"]);
}

#[test]
fn test_init_file_under_nested_root() {
    let name = module_name_from_file_path(
        Path::new("zeeguu/core/model/__init__.py"),
        Path::new("zeeguu/"),
    );
    assert_eq!(name, "core.model");
}

#[test]
fn test_two_module_package() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let root = create_test_project(
        &temp,
        &[("app/models.py", "import app.views\n"), ("app/views.py", "")],
    );

    let result = analyze(root);
    let graph = &result.graph;

    assert_eq!(graph.module_names(), vec!["app", "app.models", "app.views"]);
    assert_eq!(graph.edges(), vec![("app.models", "app.views")]);
    assert!(result.is_ok());

    let aggregated = result.hierarchy().aggregated_dependencies("app");
    assert_eq!(aggregated.len(), 1);
    assert_eq!(
        aggregated.get(&("models".to_string(), "views".to_string())),
        Some(&1)
    );
}

#[test]
fn test_missing_and_empty_roots() {
    let temp = TempDir::new().expect("Failed to create temp dir");

    let err = Analyzer::new()
        .root(temp.path().join("does-not-exist"))
        .analyze()
        .unwrap_err();
    assert!(matches!(err, AnalyzeError::Configuration { .. }));

    let root = create_test_project(&temp, &[("README.md", "# nothing here\n")]);
    let err = Analyzer::new().root(root).analyze().unwrap_err();
    assert!(matches!(err, AnalyzeError::EmptyResult(_)));
}

#[test]
fn test_full_project() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let result = analyze(create_app_project(&temp));
    let graph = &result.graph;

    assert_eq!(result.top_level_packages, vec!["app", "lib"]);
    assert_eq!(result.files_scanned, 6);
    assert!(graph.has_edge("app.models", "app.db"));
    assert!(graph.has_edge("app.controllers.home", "app.controllers.views"));
    assert!(graph.has_edge("app.controllers.home", "app.models"));
    assert!(graph.has_edge("app.controllers.home", "lib.util"));
    assert_eq!(graph.edge_count(), 4);

    assert!(graph.module("app").unwrap().is_package);
    assert!(graph.module("app.controllers").unwrap().is_package);
    assert!(graph.module("lib").unwrap().is_package);
    assert!(!graph.module("app.db").unwrap().is_package);
    assert_eq!(graph.module("app.controllers.home").unwrap().depth, 2);

    graph.validate().unwrap();

    let hierarchy = result.hierarchy();
    let top = hierarchy.aggregated_dependencies("");
    assert_eq!(top.get(&("app".to_string(), "lib".to_string())), Some(&1));
    assert_eq!(top.len(), 1);

    let app = hierarchy.aggregated_dependencies("app");
    assert_eq!(app.get(&("controllers".to_string(), "models".to_string())), Some(&1));
    assert_eq!(app.get(&("models".to_string(), "db".to_string())), Some(&1));
    assert_eq!(app.len(), 2);
}
