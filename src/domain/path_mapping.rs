//! Destination path derivation for converted documents.

use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::domain::document::TARGET_EXTENSION;

/// Compute where the Markdown for `source` is written.
///
/// Without an output directory the file lands next to its source. With one,
/// the source's position relative to `docs_dir` is mirrored under it.
pub fn target_path(
    source: &Path,
    docs_dir: &Path,
    output_dir: Option<&Path>,
) -> Result<PathBuf, AppError> {
    let Some(output_dir) = output_dir else {
        return Ok(source.with_extension(TARGET_EXTENSION));
    };

    let relative = source.strip_prefix(docs_dir).map_err(|_| AppError::SourceOutsideDocsDir {
        source_path: source.to_path_buf(),
        docs_dir: docs_dir.to_path_buf(),
    })?;

    Ok(output_dir.join(relative).with_extension(TARGET_EXTENSION))
}
