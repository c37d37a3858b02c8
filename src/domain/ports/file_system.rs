//! FileSystem port - abstraction over file I/O operations
//!
//! This trait lets the configmap surface read and rewrite generated files
//! without depending on a concrete implementation (local disk, in-memory).

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// File system operation errors
#[derive(Debug, Error)]
pub enum FsError {
    /// File not found
    #[error("file not found")]
    NotFound,
    /// Permission denied
    #[error("permission denied")]
    PermissionDenied,
    /// Content is not UTF-8 text
    #[error("invalid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
    /// I/O error
    #[error("I/O error: {0}")]
    Io(std::io::Error),
    /// Other error
    #[error("{0}")]
    Other(String),
}

impl From<std::io::Error> for FsError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound,
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied,
            _ => FsError::Io(err),
        }
    }
}

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O with atomic writes
/// - `MemoryFs` (tests) - in-memory map
pub trait FileSystem {
    /// Read a whole file as UTF-8 text
    fn read(&self, path: &Path) -> FsResult<String>;

    /// Replace a file's content atomically: readers see the old or the new
    /// content, never a mix
    fn write(&self, path: &Path, content: &str) -> FsResult<()>;

    /// Check if `path` is an existing directory
    fn is_dir(&self, path: &Path) -> bool;

    /// Every regular file below `dir`, recursively, sorted
    fn list_files(&self, dir: &Path) -> FsResult<Vec<PathBuf>>;
}

impl<F: FileSystem + ?Sized> FileSystem for &F {
    fn read(&self, path: &Path) -> FsResult<String> {
        (**self).read(path)
    }

    fn write(&self, path: &Path, content: &str) -> FsResult<()> {
        (**self).write(path, content)
    }

    fn is_dir(&self, path: &Path) -> bool {
        (**self).is_dir(path)
    }

    fn list_files(&self, dir: &Path) -> FsResult<Vec<PathBuf>> {
        (**self).list_files(dir)
    }
}
