//! Plain-text formatting shared by the commands.

/// `"1 module"` / `"3 modules"`.
pub fn format_count(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

/// `"models -> views"`, with the weight when it is above one.
pub fn format_edge(from: &str, to: &str, weight: usize) -> String {
    if weight > 1 {
        format!("{from} -> {to} ({weight})")
    } else {
        format!("{from} -> {to}")
    }
}

/// Display name of a hierarchy level; the root is the empty path.
pub fn format_level_path(path: &str) -> &str {
    if path.is_empty() { "(root)" } else { path }
}
