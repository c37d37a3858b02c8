//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};
use ignore::WalkBuilder;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Local file system implementation
///
/// Provides atomic writes and deterministic recursive listing.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn read(&self, path: &Path) -> FsResult<String> {
        let bytes = std::fs::read(path)?;
        Ok(String::from_utf8(bytes)?)
    }

    fn write(&self, path: &Path, content: &str) -> FsResult<()> {
        atomic_write(path, content.as_bytes())
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn list_files(&self, dir: &Path) -> FsResult<Vec<PathBuf>> {
        // No ignore files, no hidden-file filtering. Symlinked directories are
        // not descended into; symlinks to regular files are listed.
        let walker = WalkBuilder::new(dir)
            .standard_filters(false)
            .follow_links(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .build();

        let mut files = Vec::new();
        for entry in walker {
            let entry = entry.map_err(walk_error)?;
            let is_file = match entry.file_type() {
                Some(ty) if ty.is_file() => true,
                Some(ty) if ty.is_symlink() => entry.path().is_file(),
                _ => false,
            };
            if is_file {
                files.push(entry.into_path());
            }
        }
        Ok(files)
    }
}

fn walk_error(err: ignore::Error) -> FsError {
    let message = err.to_string();
    err.into_io_error()
        .map(FsError::from)
        .unwrap_or(FsError::Other(message))
}

/// Write content to a file atomically
///
/// Writes a temp file next to `path` and renames it into place. An existing
/// file keeps its permissions; a read-only one is refused. A symlink is
/// written through, so the link target is replaced and the link survives.
pub fn atomic_write(path: &Path, content: &[u8]) -> FsResult<()> {
    let is_link = std::fs::symlink_metadata(path).is_ok_and(|meta| meta.file_type().is_symlink());
    let target = if is_link {
        std::fs::canonicalize(path)?
    } else {
        path.to_path_buf()
    };
    let parent = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let permissions = std::fs::metadata(&target).ok().map(|meta| meta.permissions());
    if permissions.as_ref().is_some_and(|perms| perms.readonly()) {
        return Err(FsError::PermissionDenied);
    }

    let mut temp = NamedTempFile::new_in(parent)?;
    temp.write_all(content)?;
    temp.as_file().sync_all()?;
    if let Some(permissions) = permissions {
        std::fs::set_permissions(temp.path(), permissions)?;
    }
    temp.persist(&target).map_err(|e| FsError::from(e.error))?;
    Ok(())
}
