//! Conversion between file-system paths and dotted module names.
//!
//! `app/models/user.py` under the scanned root maps to `app.models.user`,
//! and `app/models/__init__.py` maps to the package name `app.models`.
//!
//! The two directions are inverses for leaf modules. For packages the
//! reverse mapping yields the directory path with a trailing separator, so
//! `file_path_from_module_name("app", ..)` is `<root>/app/` rather than the
//! `__init__.py` file the name was originally derived from.

use std::path::{Component, Path, PathBuf};

use crate::runtime::Runtime;

/// Extension of scanned source files (without the dot).
pub const SOURCE_EXTENSION: &str = "py";

/// File stem that marks a directory as a package.
pub const PACKAGE_MARKER: &str = "__init__";

const PACKAGE_MARKER_FILE: &str = "__init__.py";

/// Derive the dotted module name for `path`, relative to `root`.
///
/// If `path` is not under `root` the full path is used unchanged, minus
/// any root or prefix components.
pub fn module_name_from_file_path(path: &Path, root: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);

    let mut segments: Vec<String> = relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();

    // `pkg/__init__.py` names the package itself; a bare root-level
    // `__init__.py` keeps its stem since there is no enclosing directory.
    if segments.len() > 1 && segments.last().is_some_and(|s| s == PACKAGE_MARKER_FILE) {
        segments.pop();
    }

    if let Some(last) = segments.last_mut() {
        if let Some(stem) = last.strip_suffix(".py") {
            *last = stem.to_string();
        }
    }

    segments.join(".")
}

/// Map a dotted module name back to a path under `root`.
///
/// Existing directories are returned with a trailing separator; anything
/// else is treated as a leaf module and gets the source extension.
pub fn file_path_from_module_name(name: &str, root: &Path, runtime: &dyn Runtime) -> PathBuf {
    let mut path = root.to_path_buf();
    for segment in name.split('.').filter(|s| !s.is_empty()) {
        path.push(segment);
    }

    if runtime.is_dir(&path) {
        // Pushing an empty component appends the separator
        path.push("");
        path
    } else {
        path.set_extension(SOURCE_EXTENSION);
        path
    }
}

/// Name of the enclosing package, or `""` for a top-level name.
pub fn parent_module(name: &str) -> &str {
    name.rsplit_once('.').map(|(parent, _)| parent).unwrap_or("")
}

/// Last dotted segment of `name`.
pub fn simple_name(name: &str) -> &str {
    name.rsplit_once('.').map(|(_, last)| last).unwrap_or(name)
}

/// Nesting depth: the number of dot separators in `name`.
pub fn module_depth(name: &str) -> usize {
    name.matches('.').count()
}

/// Whether `path` is a package marker file (`__init__.py`).
pub fn is_package_marker(path: &Path) -> bool {
    path.file_name().is_some_and(|n| n == PACKAGE_MARKER_FILE)
}

/// Whether `path` has the source extension.
pub fn is_source_file(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == SOURCE_EXTENSION)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::test_utils::MemoryRuntime;

    #[test]
    fn test_leaf_module_name() {
        let root = Path::new("/repo");
        assert_eq!(
            module_name_from_file_path(Path::new("/repo/app/models/user.py"), root),
            "app.models.user"
        );
        assert_eq!(module_name_from_file_path(Path::new("/repo/setup.py"), root), "setup");
    }

    #[test]
    fn test_package_module_name() {
        let root = Path::new("zeeguu/");
        assert_eq!(
            module_name_from_file_path(Path::new("zeeguu/core/model/__init__.py"), root),
            "core.model"
        );
    }

    #[test]
    fn test_root_level_init_keeps_stem() {
        let root = Path::new("/repo");
        assert_eq!(
            module_name_from_file_path(Path::new("/repo/__init__.py"), root),
            "__init__"
        );
    }

    #[test]
    fn test_path_outside_root_falls_back() {
        let name = module_name_from_file_path(Path::new("/elsewhere/pkg/mod.py"), Path::new("/repo"));
        assert_eq!(name, "elsewhere.pkg.mod");
    }

    #[test]
    fn test_only_trailing_extension_is_stripped() {
        let root = Path::new("/repo");
        assert_eq!(
            module_name_from_file_path(Path::new("/repo/app/pyutils.py"), root),
            "app.pyutils"
        );
    }

    #[test]
    fn test_file_path_for_leaf_and_package() {
        let runtime = MemoryRuntime::new().with_file("/repo/app/models.py", "");
        let root = Path::new("/repo");

        assert_eq!(
            file_path_from_module_name("app.models", root, &runtime),
            PathBuf::from("/repo/app/models.py")
        );

        let package = file_path_from_module_name("app", root, &runtime);
        assert!(package.as_os_str().to_string_lossy().ends_with(std::path::MAIN_SEPARATOR));
        assert_eq!(module_name_from_file_path(&package, root), "app");
    }

    #[test]
    fn test_parent_module() {
        assert_eq!(parent_module("app.components"), "app");
        assert_eq!(parent_module("a.b.c"), "a.b");
        assert_eq!(parent_module("app"), "");
        assert_eq!(parent_module(""), "");
    }

    #[test]
    fn test_simple_name_and_depth() {
        assert_eq!(simple_name("a.b.c"), "c");
        assert_eq!(simple_name("top"), "top");
        assert_eq!(module_depth("a.b.c"), 2);
        assert_eq!(module_depth("top"), 0);
    }

    #[test]
    fn test_marker_detection() {
        assert!(is_package_marker(Path::new("/r/pkg/__init__.py")));
        assert!(!is_package_marker(Path::new("/r/pkg/init.py")));
        assert!(is_source_file(Path::new("a.py")));
        assert!(!is_source_file(Path::new("a.pyc")));
    }
}
