//! Filesystem runtime abstraction.
//!
//! The `Runtime` trait is the single seam through which the codec, the
//! extractor, the graph builder, and the annotator touch the filesystem.
//! Production code uses [`native::NativeRuntime`]; tests swap in the
//! in-memory [`test_utils::MemoryRuntime`] so package detection and
//! scanning can run without a real directory tree.

#[cfg(not(target_family = "wasm"))]
pub mod native;

// Test utilities (available in test builds)
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

use std::path::{Path, PathBuf};

/// Result type for runtime operations
pub type RuntimeResult<T> = Result<T, RuntimeError>;

/// Errors that can occur during runtime operations
#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    /// File not found
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// I/O error
    #[error("I/O error on {}: {message}", .path.display())]
    Io { path: PathBuf, message: String },

    /// Other runtime error
    #[error("Runtime error: {0}")]
    Other(String),
}

impl RuntimeError {
    /// Build an error from a `std::io::Error`, mapping `NotFound` to
    /// [`RuntimeError::FileNotFound`].
    pub fn from_io(path: &Path, err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound(path.to_path_buf())
        } else {
            Self::Io {
                path: path.to_path_buf(),
                message: err.to_string(),
            }
        }
    }
}

/// File metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileMetadata {
    /// File size in bytes
    pub size: u64,
    /// Whether this is a directory
    pub is_dir: bool,
    /// Whether this is a file
    pub is_file: bool,
}

/// Filesystem queries needed to scan a source tree.
///
/// All operations are synchronous; a scan is a single sequential pass and
/// each read is a short-lived, scoped acquisition.
pub trait Runtime: Send + Sync + std::fmt::Debug {
    /// Read a file's full contents.
    fn read_file(&self, path: &Path) -> RuntimeResult<Vec<u8>>;

    /// Get file metadata.
    fn metadata(&self, path: &Path) -> RuntimeResult<FileMetadata>;

    /// Check if a path exists (file or directory).
    fn exists(&self, path: &Path) -> bool;

    /// Check if a path exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool {
        self.metadata(path).map(|m| m.is_dir).unwrap_or(false)
    }

    /// List the direct children of a directory.
    fn read_dir(&self, path: &Path) -> RuntimeResult<Vec<PathBuf>>;

    /// Recursively list every file below `root`.
    ///
    /// Directories whose file name appears in `skip_dirs` are not entered.
    fn walk(&self, root: &Path, skip_dirs: &[String]) -> RuntimeResult<Vec<PathBuf>>;
}
