pub mod config;
pub mod document;
pub mod error;
pub mod path_mapping;
pub mod tally;

pub use config::{ConvertSection, ConverterConfig};
pub use document::{ConvertedDocument, SOURCE_EXTENSION, TARGET_EXTENSION, is_source_document};
pub use error::AppError;
pub use path_mapping::target_path;
pub use tally::{ConversionEvent, FileOutcome, RunTally};
