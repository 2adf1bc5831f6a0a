//! Per-file import extraction.

use std::path::{Path, PathBuf};

use strata_graph::{Runtime, RuntimeError};
use thiserror::Error;

use crate::config::MAX_FILE_SIZE;
use crate::parser::{import_from_line, is_direct_import, parse_from_import, strip_comment};
use crate::resolver::{RelativeImportError, import_anchor, resolve_from_import};

/// Why a file's imports could not be extracted.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Failed to read {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: RuntimeError,
    },

    #[error("{} is not valid UTF-8: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("{} is {size} bytes, over the {limit} byte limit", .path.display())]
    FileTooLarge { path: PathBuf, size: u64, limit: u64 },

    /// The file's other imports are discarded along with the bad line.
    #[error("{}:{line}: {source} ({discarded} other imports discarded)", .path.display())]
    RelativeImportOverflow {
        path: PathBuf,
        line: usize,
        discarded: usize,
        #[source]
        source: RelativeImportError,
    },
}

/// First relative import in a source text that climbs above the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceOverflow {
    /// 1-based line number.
    pub line: usize,
    pub error: RelativeImportError,
    /// Imports on other lines that were resolved but are not returned.
    pub discarded: usize,
}

impl ExtractError {
    pub fn path(&self) -> &Path {
        match self {
            Self::FileRead { path, .. }
            | Self::Decode { path, .. }
            | Self::FileTooLarge { path, .. }
            | Self::RelativeImportOverflow { path, .. } => path,
        }
    }
}

/// Reads source files through a [`Runtime`] and lists their imports.
#[derive(Debug, Clone, Copy)]
pub struct FileImportExtractor<'a> {
    root: &'a Path,
    runtime: &'a dyn Runtime,
    max_file_size: u64,
}

impl<'a> FileImportExtractor<'a> {
    pub fn new(root: &'a Path, runtime: &'a dyn Runtime) -> Self {
        Self {
            root,
            runtime,
            max_file_size: MAX_FILE_SIZE,
        }
    }

    pub fn max_file_size(mut self, limit: u64) -> Self {
        self.max_file_size = limit;
        self
    }

    /// Absolute module names imported by `path`, in first-occurrence order.
    ///
    /// Duplicates are kept. Relative imports are resolved against the
    /// file's own module name.
    pub fn extract(&self, path: &Path) -> Result<Vec<String>, ExtractError> {
        let source = self.read_source(path)?;
        let anchor = import_anchor(path, self.root);

        imports_from_source(&source, &anchor).map_err(|overflow| {
            ExtractError::RelativeImportOverflow {
                path: path.to_path_buf(),
                line: overflow.line,
                discarded: overflow.discarded,
                source: overflow.error,
            }
        })
    }

    fn read_source(&self, path: &Path) -> Result<String, ExtractError> {
        let metadata = self.runtime.metadata(path).map_err(|source| ExtractError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

        if metadata.size > self.max_file_size {
            return Err(ExtractError::FileTooLarge {
                path: path.to_path_buf(),
                size: metadata.size,
                limit: self.max_file_size,
            });
        }

        let bytes = self.runtime.read_file(path).map_err(|source| ExtractError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

        let mut source = String::from_utf8(bytes).map_err(|source| ExtractError::Decode {
            path: path.to_path_buf(),
            source,
        })?;

        if source.starts_with('\u{feff}') {
            source.remove(0);
        }
        Ok(source)
    }
}

/// Imports of `path` with the default size limit.
pub fn imports_from_file(
    path: &Path,
    root: &Path,
    runtime: &dyn Runtime,
) -> Result<Vec<String>, ExtractError> {
    FileImportExtractor::new(root, runtime).extract(path)
}

/// Imports referenced by `source`, resolved against `anchor`.
///
/// A relative import that climbs above the root fails the whole text. The
/// rest is still scanned so the error can report how many imports were
/// discarded.
pub fn imports_from_source(source: &str, anchor: &str) -> Result<Vec<String>, SourceOverflow> {
    let mut imports = Vec::new();
    let mut overflow: Option<(usize, RelativeImportError)> = None;

    for (idx, line) in source.lines().enumerate() {
        let trimmed = strip_comment(line.trim());

        if is_direct_import(trimmed) {
            // Each comma-separated target is parsed as its own statement
            let targets = trimmed["import".len()..].split(',');
            for target in targets {
                imports.extend(import_from_line(&format!("import {}", target.trim())));
            }
            continue;
        }

        let Some(from) = parse_from_import(trimmed) else {
            continue;
        };
        if from.is_relative() {
            match resolve_from_import(anchor, &from) {
                Ok(resolved) => {
                    tracing::debug!("Resolved '{}' in {} to {:?}", from.base, anchor, resolved);
                    imports.extend(resolved);
                }
                Err(error) => {
                    overflow.get_or_insert((idx + 1, error));
                }
            }
        } else {
            imports.push(from.base);
        }
    }

    match overflow {
        Some((line, error)) => Err(SourceOverflow {
            line,
            error,
            discarded: imports.len(),
        }),
        None => Ok(imports),
    }
}
