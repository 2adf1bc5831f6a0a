//! Relative import resolution.
//!
//! A token with `n` leading dots drops the last `n` segments of the
//! importing module's own dotted name, then appends the remaining suffix.
//! For `app/controllers/home.py` (`app.controllers.home`):
//!
//! | token        | resolved                  |
//! |--------------|---------------------------|
//! | `.`          | `app.controllers`         |
//! | `.views`     | `app.controllers.views`   |
//! | `..`         | `app`                     |
//! | `..models`   | `app.models`              |
//!
//! Package `__init__.py` files resolve against `<package>.__init__` so that
//! a single dot means the package itself (see [`import_anchor`]).

use std::path::Path;

use strata_graph::codec::{PACKAGE_MARKER, is_package_marker, module_name_from_file_path};
use thiserror::Error;

use crate::parser::FromImport;

/// A relative import climbed above the scanned root.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RelativeImportError {
    #[error(
        "relative import '{token}' goes up {levels} level(s) but '{anchor}' only has {available} segment(s)"
    )]
    Overflow {
        token: String,
        anchor: String,
        levels: usize,
        available: usize,
    },
}

/// Number of leading dots in an import token.
pub fn relative_level(token: &str) -> usize {
    token.len() - token.trim_start_matches('.').len()
}

/// Resolve `token` against the dotted `anchor` name of the importing file.
///
/// Absolute tokens are returned unchanged. The result may be empty when
/// the dots consume the whole anchor and there is no suffix.
pub fn resolve_relative_import(anchor: &str, token: &str) -> Result<String, RelativeImportError> {
    let levels = relative_level(token);
    if levels == 0 {
        return Ok(token.to_string());
    }

    let segments: Vec<&str> = anchor.split('.').filter(|s| !s.is_empty()).collect();
    if levels > segments.len() {
        return Err(RelativeImportError::Overflow {
            token: token.to_string(),
            anchor: anchor.to_string(),
            levels,
            available: segments.len(),
        });
    }

    let mut resolved: Vec<&str> = segments[..segments.len() - levels].to_vec();
    let suffix = &token[levels..];
    resolved.extend(suffix.split('.').filter(|s| !s.is_empty()));

    Ok(resolved.join("."))
}

/// Resolve a parsed from-import to the module names it depends on.
///
/// Normally that is just the resolved base. When a relative base resolves
/// to nothing (`from . import x` in a top-level file) the imported names
/// themselves are the dependencies.
pub fn resolve_from_import(
    anchor: &str,
    from: &FromImport,
) -> Result<Vec<String>, RelativeImportError> {
    let resolved = resolve_relative_import(anchor, &from.base)?;
    if resolved.is_empty() {
        return Ok(from.names.clone());
    }
    Ok(vec![resolved])
}

/// Dotted name that relative imports in `path` resolve against.
///
/// This is the file's module name, except for package `__init__.py` files
/// where the marker segment is kept.
pub fn import_anchor(path: &Path, root: &Path) -> String {
    let name = module_name_from_file_path(path, root);
    if is_package_marker(path) && name != PACKAGE_MARKER {
        format!("{name}.{PACKAGE_MARKER}")
    } else {
        name
    }
}
