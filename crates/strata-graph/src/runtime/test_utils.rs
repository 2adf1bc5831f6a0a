//! In-memory runtime for tests.
//!
//! `MemoryRuntime` holds a flat map of file paths to contents. Directories
//! are implied by file paths (any proper prefix of a file path is a
//! directory) and can also be registered explicitly for empty folders.
//!
//! ```rust,ignore
//! use strata_graph::runtime::Runtime;
//! use strata_graph::runtime::test_utils::MemoryRuntime;
//! use std::path::Path;
//!
//! let runtime = MemoryRuntime::new()
//!     .with_file("/repo/app/models.py", "import app.views\n");
//!
//! assert!(runtime.is_dir(Path::new("/repo/app")));
//! assert!(runtime.exists(Path::new("/repo/app/models.py")));
//! ```

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use super::{FileMetadata, Runtime, RuntimeError, RuntimeResult};

#[derive(Debug, Default, Clone)]
pub struct MemoryRuntime {
    files: BTreeMap<PathBuf, Vec<u8>>,
    dirs: BTreeSet<PathBuf>,
}

impl MemoryRuntime {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file with the given contents.
    pub fn with_file(mut self, path: impl Into<PathBuf>, content: impl AsRef<[u8]>) -> Self {
        self.insert_file(path, content);
        self
    }

    /// Register an empty directory.
    pub fn with_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.dirs.insert(path.into());
        self
    }

    pub fn insert_file(&mut self, path: impl Into<PathBuf>, content: impl AsRef<[u8]>) {
        self.files.insert(path.into(), content.as_ref().to_vec());
    }

    fn is_implied_dir(&self, path: &Path) -> bool {
        self.dirs.iter().any(|d| d.starts_with(path))
            || self
                .files
                .keys()
                .any(|file| file != path && file.starts_with(path))
    }
}

impl Runtime for MemoryRuntime {
    fn read_file(&self, path: &Path) -> RuntimeResult<Vec<u8>> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| RuntimeError::FileNotFound(path.to_path_buf()))
    }

    fn metadata(&self, path: &Path) -> RuntimeResult<FileMetadata> {
        if let Some(content) = self.files.get(path) {
            return Ok(FileMetadata {
                size: content.len() as u64,
                is_dir: false,
                is_file: true,
            });
        }
        if self.is_implied_dir(path) {
            return Ok(FileMetadata {
                size: 0,
                is_dir: true,
                is_file: false,
            });
        }
        Err(RuntimeError::FileNotFound(path.to_path_buf()))
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path) || self.is_implied_dir(path)
    }

    fn read_dir(&self, path: &Path) -> RuntimeResult<Vec<PathBuf>> {
        if !self.is_implied_dir(path) {
            return Err(RuntimeError::FileNotFound(path.to_path_buf()));
        }

        let children: BTreeSet<PathBuf> = self
            .files
            .keys()
            .chain(self.dirs.iter())
            .filter_map(|entry| {
                let rest = entry.strip_prefix(path).ok()?;
                let first = rest.components().next()?;
                Some(path.join(first))
            })
            .collect();

        Ok(children.into_iter().collect())
    }

    fn walk(&self, root: &Path, skip_dirs: &[String]) -> RuntimeResult<Vec<PathBuf>> {
        if !self.is_implied_dir(root) {
            return Err(RuntimeError::FileNotFound(root.to_path_buf()));
        }

        let files = self
            .files
            .keys()
            .filter(|file| {
                let Ok(rest) = file.strip_prefix(root) else {
                    return false;
                };
                let mut components: Vec<_> = rest.components().collect();
                // Drop the file name; only directory segments are pruned
                components.pop();
                !components.iter().any(|c| {
                    let name = c.as_os_str().to_string_lossy();
                    skip_dirs.iter().any(|skip| skip.as_str() == name)
                })
            })
            .cloned()
            .collect();

        Ok(files)
    }
}
