//! In-memory file system for tests

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Files held as raw bytes so undecodable content can be simulated.
///
/// Uses `Arc<Mutex<>>` internally so it can be cloned and shared.
#[derive(Clone, Default)]
pub struct MemoryFs {
    pub files: Arc<Mutex<BTreeMap<PathBuf, Vec<u8>>>>,
    pub writes: Arc<Mutex<Vec<PathBuf>>>,
    pub fail_writes: bool,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(self, path: impl Into<PathBuf>, content: impl Into<Vec<u8>>) -> Self {
        self.files
            .lock()
            .unwrap()
            .insert(path.into(), content.into());
        self
    }

    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    pub fn content(&self, path: impl AsRef<Path>) -> Option<String> {
        let files = self.files.lock().unwrap();
        files
            .get(path.as_ref())
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }

    pub fn written(&self) -> Vec<PathBuf> {
        self.writes.lock().unwrap().clone()
    }
}

impl FileSystem for MemoryFs {
    fn read(&self, path: &Path) -> FsResult<String> {
        let files = self.files.lock().unwrap();
        let bytes = files.get(path).cloned().ok_or(FsError::NotFound)?;
        Ok(String::from_utf8(bytes)?)
    }

    fn write(&self, path: &Path, content: &str) -> FsResult<()> {
        if self.fail_writes {
            return Err(FsError::PermissionDenied);
        }
        self.writes.lock().unwrap().push(path.to_path_buf());
        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), content.as_bytes().to_vec());
        Ok(())
    }

    fn is_dir(&self, path: &Path) -> bool {
        let files = self.files.lock().unwrap();
        files
            .keys()
            .any(|file| file != path && file.starts_with(path))
    }

    fn list_files(&self, dir: &Path) -> FsResult<Vec<PathBuf>> {
        let files = self.files.lock().unwrap();
        Ok(files
            .keys()
            .filter(|file| *file != dir && file.starts_with(dir))
            .cloned()
            .collect())
    }
}
