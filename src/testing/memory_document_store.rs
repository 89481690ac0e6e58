use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::DocumentStore;

/// In-memory document store for testing.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocumentStore {
    files: Arc<Mutex<BTreeMap<PathBuf, String>>>,
    dirs: Arc<Mutex<BTreeSet<PathBuf>>>,
    read_only: Arc<Mutex<BTreeSet<PathBuf>>>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an (empty) directory.
    pub fn with_dir(self, path: impl Into<PathBuf>) -> Self {
        self.dirs.lock().unwrap().insert(path.into());
        self
    }

    /// Register a file with the given content.
    pub fn with_file(self, path: impl Into<PathBuf>, content: &str) -> Self {
        self.files.lock().unwrap().insert(path.into(), content.to_string());
        self
    }

    /// Make writes below `path` fail with a permission error.
    pub fn with_read_only(self, path: impl Into<PathBuf>) -> Self {
        self.read_only.lock().unwrap().insert(path.into());
        self
    }

    pub fn read(&self, path: &Path) -> Option<String> {
        self.files.lock().unwrap().get(path).cloned()
    }
}

impl DocumentStore for MemoryDocumentStore {
    fn is_dir(&self, path: &Path) -> bool {
        if self.dirs.lock().unwrap().iter().any(|dir| dir.starts_with(path)) {
            return true;
        }
        self.files.lock().unwrap().keys().any(|file| file != path && file.starts_with(path))
    }

    fn is_file(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path)
    }

    fn list_files(&self, root: &Path) -> Result<Vec<PathBuf>, AppError> {
        let files = self.files.lock().unwrap();
        Ok(files.keys().filter(|file| *file != root && file.starts_with(root)).cloned().collect())
    }

    fn write_text(&self, path: &Path, content: &str) -> Result<(), AppError> {
        if self.read_only.lock().unwrap().iter().any(|dir| path.starts_with(dir)) {
            return Err(AppError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("Permission denied: {}", path.display()),
            )));
        }
        if let Some(parent) = path.parent() {
            self.dirs.lock().unwrap().insert(parent.to_path_buf());
        }
        self.files.lock().unwrap().insert(path.to_path_buf(), content.to_string());
        Ok(())
    }
}
