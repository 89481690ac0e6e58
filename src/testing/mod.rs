mod fake_converter;
mod memory_document_store;
mod recording_reporter;

pub use fake_converter::FakeConverter;
pub use memory_document_store::MemoryDocumentStore;
pub use recording_reporter::RecordingReporter;
