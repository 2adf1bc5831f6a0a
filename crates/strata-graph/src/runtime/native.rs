//! Native runtime backed by `std::fs` and `walkdir`.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::{FileMetadata, Runtime, RuntimeError, RuntimeResult};

/// Runtime that talks to the host filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeRuntime;

impl NativeRuntime {
    pub fn new() -> Self {
        Self
    }
}

impl Runtime for NativeRuntime {
    fn read_file(&self, path: &Path) -> RuntimeResult<Vec<u8>> {
        std::fs::read(path).map_err(|e| RuntimeError::from_io(path, e))
    }

    fn metadata(&self, path: &Path) -> RuntimeResult<FileMetadata> {
        let meta = std::fs::metadata(path).map_err(|e| RuntimeError::from_io(path, e))?;
        Ok(FileMetadata {
            size: meta.len(),
            is_dir: meta.is_dir(),
            is_file: meta.is_file(),
        })
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn read_dir(&self, path: &Path) -> RuntimeResult<Vec<PathBuf>> {
        let entries = std::fs::read_dir(path).map_err(|e| RuntimeError::from_io(path, e))?;
        let mut children = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| RuntimeError::from_io(path, e))?;
            children.push(entry.path());
        }
        children.sort();
        Ok(children)
    }

    fn walk(&self, root: &Path, skip_dirs: &[String]) -> RuntimeResult<Vec<PathBuf>> {
        let mut files = Vec::new();

        let walker = WalkDir::new(root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                // Never prune the root itself
                if entry.depth() == 0 || !entry.file_type().is_dir() {
                    return true;
                }
                let name = entry.file_name().to_string_lossy();
                !skip_dirs.iter().any(|skip| skip.as_str() == name)
            });

        for entry in walker {
            match entry {
                Ok(entry) if entry.file_type().is_file() => files.push(entry.into_path()),
                Ok(_) => {}
                Err(err) => {
                    // Unreadable subtrees are skipped, the walk itself continues
                    tracing::warn!("Skipping unreadable entry: {}", err);
                }
            }
        }

        Ok(files)
    }
}
