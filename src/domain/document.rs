//! Document kinds handled by the converter pipeline.

use std::path::Path;

/// Extension of the documents picked up by discovery.
pub const SOURCE_EXTENSION: &str = "docx";

/// Extension given to converted output files.
pub const TARGET_EXTENSION: &str = "md";

/// Text produced by a successful conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedDocument {
    pub text_content: String,
}

impl ConvertedDocument {
    pub fn new(text_content: impl Into<String>) -> Self {
        Self { text_content: text_content.into() }
    }
}

/// Whether `path` names a source document, i.e. its file name ends in `.docx`.
///
/// A file named exactly `.docx` counts. Matching is byte-exact with no case folding.
pub fn is_source_document(path: &Path) -> bool {
    path.file_name().is_some_and(|name| {
        let name = name.as_encoded_bytes();
        name.len() > SOURCE_EXTENSION.len()
            && name.ends_with(SOURCE_EXTENSION.as_bytes())
            && name[name.len() - SOURCE_EXTENSION.len() - 1] == b'.'
    })
}
