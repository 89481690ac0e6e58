use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::domain::{AppError, ConvertedDocument};
use crate::ports::DocumentConverter;

/// Converter double that renders `# <stem>` and fails on selected paths.
#[derive(Default)]
pub struct FakeConverter {
    pub calls: Mutex<Vec<PathBuf>>,
    failing: HashSet<PathBuf>,
}

impl FakeConverter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on(mut self, path: impl Into<PathBuf>) -> Self {
        self.failing.insert(path.into());
        self
    }

    pub fn calls(&self) -> Vec<PathBuf> {
        self.calls.lock().unwrap().clone()
    }

    pub fn rendered(source: &Path) -> String {
        let stem = source.file_stem().map(|s| s.to_string_lossy()).unwrap_or_default();
        format!("# {}\n", stem)
    }
}

impl DocumentConverter for FakeConverter {
    fn convert(&self, source: &Path) -> Result<ConvertedDocument, AppError> {
        self.calls.lock().unwrap().push(source.to_path_buf());
        if self.failing.contains(source) {
            return Err(AppError::conversion(source, "File is not a zip file"));
        }
        Ok(ConvertedDocument::new(Self::rendered(source)))
    }
}
