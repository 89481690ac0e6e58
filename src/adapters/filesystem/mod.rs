//! Filesystem adapter for the `DocumentStore` port.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::domain::AppError;
use crate::ports::DocumentStore;

/// Filesystem-backed document store.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilesystemDocumentStore;

impl FilesystemDocumentStore {
    pub fn new() -> Self {
        Self
    }
}

impl DocumentStore for FilesystemDocumentStore {
    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn list_files(&self, root: &Path) -> Result<Vec<PathBuf>, AppError> {
        let files = WalkDir::new(root)
            .min_depth(1)
            .follow_links(false)
            .into_iter()
            // Unreadable subtrees are left out of the scan.
            .filter_map(|entry| entry.ok())
            .filter(|entry| {
                let file_type = entry.file_type();
                file_type.is_file() || (file_type.is_symlink() && entry.path().is_file())
            })
            .map(|entry| entry.into_path())
            .collect();
        Ok(files)
    }

    fn write_text(&self, path: &Path, content: &str) -> Result<(), AppError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
        Ok(())
    }
}
