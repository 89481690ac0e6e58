pub mod docx;
pub mod filesystem;
pub mod stdout_reporter;

pub use docx::DocxConverter;
pub use filesystem::FilesystemDocumentStore;
pub use stdout_reporter::StdoutReporter;
