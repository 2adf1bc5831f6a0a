//! Line-based import statement parsing.
//!
//! Each line is classified on its own, with no syntax tree. Anything the
//! patterns below do not recognize is treated as "no import on this line":
//! comments, string literals that mention `import`, identifiers such as
//! `import_something`, and continuation fragments.

use once_cell::sync::Lazy;
use regex::Regex;

/// `from <base> import <names>`; the base may carry leading dots.
///
/// A dots-only base may touch the keyword (`from .import x`).
static FROM_IMPORT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^from\s+(?:(\.+)\s*|(\.+[A-Za-z_][\w.]*|[A-Za-z_][\w.]*)\s+)import\b(.*)$")
        .unwrap_or_else(|e| panic!("regex: {e}"))
});

/// `import <targets>`.
static DIRECT_IMPORT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^import\s+(.+)$").unwrap_or_else(|e| panic!("regex: {e}")));

/// One comma-separated target of a direct import, alias optional.
static DIRECT_TARGET: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Za-z_][\w.]*)(?:\s+as\s+[A-Za-z_]\w*)?").unwrap_or_else(|e| panic!("regex: {e}"))
});

static IDENTIFIER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_]\w*$").unwrap_or_else(|e| panic!("regex: {e}")));

/// A parsed `from <base> import <names>` statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FromImport {
    /// Base module token, verbatim (relative tokens keep their dots).
    pub base: String,
    /// Imported names with aliases stripped. `*` is not listed.
    pub names: Vec<String>,
}

impl FromImport {
    pub fn is_relative(&self) -> bool {
        self.base.starts_with('.')
    }
}

/// Module names referenced by one line of source.
///
/// - `import x, y as z` yields `["x", "y"]`
/// - `from <base> import ...` yields `[<base>]`, with relative bases
///   returned unresolved (`.views`, `..`)
/// - anything else yields `[]`
pub fn import_from_line(line: &str) -> Vec<String> {
    let line = strip_comment(line.trim());

    if let Some(from) = parse_from_import(line) {
        return vec![from.base];
    }

    let Some(caps) = DIRECT_IMPORT.captures(line) else {
        return Vec::new();
    };

    caps[1]
        .split(',')
        .filter_map(|part| DIRECT_TARGET.captures(part.trim()))
        .map(|target| target[1].to_string())
        .collect()
}

/// Parse a `from ... import ...` line, including its imported names.
///
/// Parentheses, a trailing line continuation, aliases, and `*` are
/// dropped from the name list. Names spread over following lines are not
/// collected.
pub fn parse_from_import(line: &str) -> Option<FromImport> {
    let line = strip_comment(line.trim());
    let caps = FROM_IMPORT.captures(line)?;

    let base = caps.get(1).or_else(|| caps.get(2))?.as_str();
    let names = caps[3]
        .trim()
        .trim_end_matches('\\')
        .split(',')
        .filter_map(|part| {
            let part = part.trim().trim_matches(|c| c == '(' || c == ')').trim();
            let name = part.split_whitespace().next()?;
            IDENTIFIER.is_match(name).then(|| name.to_string())
        })
        .collect();

    Some(FromImport {
        base: base.to_string(),
        names,
    })
}

/// Whether the trimmed line opens a direct `import` statement.
pub fn is_direct_import(line: &str) -> bool {
    DIRECT_IMPORT.is_match(strip_comment(line.trim()))
}

/// `line` without a trailing `#` comment.
pub(crate) fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(idx) => line[..idx].trim_end(),
        None => line,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_import() {
        assert_eq!(import_from_line("import os"), vec!["os"]);
        assert_eq!(import_from_line("   import os   "), vec!["os"]);
    }

    #[test]
    fn test_multi_import() {
        assert_eq!(import_from_line("import os, sys"), vec!["os", "sys"]);
        assert_eq!(
            import_from_line("import os.path as osp, json, numpy as np"),
            vec!["os.path", "json", "numpy"]
        );
    }

    #[test]
    fn test_alias_is_dropped() {
        assert_eq!(import_from_line("import numpy as np"), vec!["numpy"]);
        assert_eq!(import_from_line("import x, y as z"), vec!["x", "y"]);
    }

    #[test]
    fn test_from_import_returns_base_only() {
        assert_eq!(import_from_line("from os import path"), vec!["os"]);
        assert_eq!(import_from_line("   from   os   import   path   "), vec!["os"]);
        assert_eq!(import_from_line("from os.path import join, exists"), vec!["os.path"]);
    }

    #[test]
    fn test_parenthesized_from_import() {
        assert_eq!(import_from_line("from os import (path, walk)"), vec!["os"]);
        assert_eq!(import_from_line("from os import (path,"), vec!["os"]);
    }

    #[test]
    fn test_relative_tokens_are_verbatim() {
        assert_eq!(import_from_line("from . import views"), vec!["."]);
        assert_eq!(import_from_line("from .views import main"), vec![".views"]);
        assert_eq!(import_from_line("from ..models import User"), vec!["..models"]);
        assert_eq!(import_from_line("from .. import parent"), vec![".."]);
    }

    #[test]
    fn test_dots_touching_import_keyword() {
        assert_eq!(import_from_line("from .import views"), vec!["."]);
        assert_eq!(import_from_line("from ..import x"), vec![".."]);
        assert_eq!(import_from_line("from .import_utils import load"), vec![".import_utils"]);
        assert!(import_from_line("from .imports").is_empty());

        let parsed = parse_from_import("from ..import (a, b as c)").unwrap();
        assert_eq!(parsed.base, "..");
        assert_eq!(parsed.names, vec!["a", "b"]);
    }

    #[test]
    fn test_non_imports_yield_nothing() {
        assert!(import_from_line("# import os").is_empty());
        assert!(import_from_line("").is_empty());
        assert!(import_from_line("def import_something():").is_empty());
        assert!(import_from_line("'import os'").is_empty());
        assert!(import_from_line("\"from os import path\"").is_empty());
        assert!(import_from_line("important = True").is_empty());
        assert!(import_from_line("from_value = 3").is_empty());
        assert!(import_from_line("x = 1  # import os").is_empty());
    }

    #[test]
    fn test_trailing_comment_is_ignored() {
        assert_eq!(import_from_line("import os  # stdlib"), vec!["os"]);
        assert_eq!(import_from_line("from app import db  # noqa"), vec!["app"]);
    }

    #[test]
    fn test_continuation_fragments_are_skipped() {
        assert_eq!(import_from_line("import a, \\"), vec!["a"]);
        assert!(import_from_line("    b, c)").is_empty());
    }

    #[test]
    fn test_parse_from_import_names() {
        let parsed = parse_from_import("from . import local_module").unwrap();
        assert_eq!(parsed.base, ".");
        assert_eq!(parsed.names, vec!["local_module"]);
        assert!(parsed.is_relative());

        let parsed = parse_from_import("from pkg import (a as b, c) \\").unwrap();
        assert_eq!(parsed.names, vec!["a", "c"]);

        let parsed = parse_from_import("from pkg import *").unwrap();
        assert!(parsed.names.is_empty());
        assert!(!parsed.is_relative());

        assert!(parse_from_import("import os").is_none());
    }

    #[test]
    fn test_is_direct_import() {
        assert!(is_direct_import("  import os, sys"));
        assert!(!is_direct_import("from os import path"));
        assert!(!is_direct_import("imports = []"));
    }
}
