use std::path::Path;

use crate::domain::{AppError, ConvertedDocument};

/// Port for turning one source document into Markdown text.
///
/// Implementations report any failure as an error; callers treat the error
/// as opaque and only display it.
pub trait DocumentConverter {
    /// Convert the document at `source`.
    fn convert(&self, source: &Path) -> Result<ConvertedDocument, AppError>;
}
