//! docx2md: Batch-convert `.docx` documents under a directory tree to Markdown.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    AppError, ConvertOptions, ConvertOutcome, convert, convert_in, convert_with_reporter,
};
pub use domain::{ConversionEvent, ConvertedDocument, FileOutcome, RunTally, target_path};
