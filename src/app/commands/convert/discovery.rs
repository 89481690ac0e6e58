//! Source document discovery.

use std::path::{Path, PathBuf};

use crate::domain::{AppError, is_source_document};
use crate::ports::DocumentStore;

/// Find every `.docx` file below `docs_dir`, sorted by path.
pub fn discover<S: DocumentStore>(store: &S, docs_dir: &Path) -> Result<Vec<PathBuf>, AppError> {
    let mut documents: Vec<PathBuf> =
        store.list_files(docs_dir)?.into_iter().filter(|path| is_source_document(path)).collect();
    documents.sort();
    documents.dedup();
    Ok(documents)
}
