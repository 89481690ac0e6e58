//! Filesystem operations used by a conversion run.

use std::path::{Path, PathBuf};

use crate::domain::AppError;

/// Port for the filesystem a conversion run reads from and writes to.
pub trait DocumentStore {
    /// Check whether a path is an existing directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Check whether a path is an existing regular file.
    fn is_file(&self, path: &Path) -> bool;

    /// List every regular file below `root`, at any depth.
    ///
    /// Directory symlinks are not followed. Order is unspecified.
    fn list_files(&self, root: &Path) -> Result<Vec<PathBuf>, AppError>;

    /// Write UTF-8 content to a file, creating parent directories as needed.
    /// Existing content is replaced.
    fn write_text(&self, path: &Path, content: &str) -> Result<(), AppError>;
}
