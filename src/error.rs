//! Error types for composeflat
//!
//! Uses `thiserror` for library errors. Only the configmap surface and the
//! config loader touch the file system, so every file-system variant names the
//! path that failed.

use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::domain::ports::FsError;

/// Result type alias for composeflat operations
pub type FlattenResult<T> = Result<T, FlattenError>;

/// Main error type for composeflat operations
#[derive(Error, Debug)]
pub enum FlattenError {
    /// A file could not be read or decoded
    #[error("failed to read {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: FsError,
    },

    /// A rewritten file could not be written back
    #[error("failed to write {path}: {source}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: FsError,
    },

    /// Directory traversal failed
    #[error("failed to walk {path}: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: FsError,
    },

    /// Invalid context configuration
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },
}

impl FlattenError {
    /// The file or directory the error refers to
    pub fn path(&self) -> &Path {
        match self {
            FlattenError::ReadFile { path, .. }
            | FlattenError::WriteFile { path, .. }
            | FlattenError::Walk { path, .. } => path,
            FlattenError::InvalidConfig { file, .. } => file,
        }
    }
}
