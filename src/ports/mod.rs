mod document_converter;
mod document_store;
mod progress_reporter;

pub use document_converter::DocumentConverter;
pub use document_store::DocumentStore;
pub use progress_reporter::ProgressReporter;
