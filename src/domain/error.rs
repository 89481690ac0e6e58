use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for docx2md operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Docs directory is missing or is not a directory.
    #[error("Docs directory does not exist or is not a directory: {}", .0.display())]
    DocsDirNotFound(PathBuf),

    /// Docs directory holds no convertible documents.
    #[error("No .docx files found under {}", .0.display())]
    NoSourceFiles(PathBuf),

    /// The converter rejected a document.
    #[error("{details}")]
    Conversion { path: PathBuf, details: String },

    /// A source path does not live under the docs directory.
    #[error("{} is not located under {}", .source_path.display(), .docs_dir.display())]
    SourceOutsideDocsDir { source_path: PathBuf, docs_dir: PathBuf },

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub fn conversion<P: Into<PathBuf>, S: Into<String>>(path: P, details: S) -> Self {
        AppError::Conversion { path: path.into(), details: details.into() }
    }

    /// Whether this error ends a run before any document is processed.
    ///
    /// These are reported on stdout as plain diagnostics rather than as errors.
    pub fn aborts_run(&self) -> bool {
        matches!(self, AppError::DocsDirNotFound(_) | AppError::NoSourceFiles(_))
    }

    /// Provide an `io::ErrorKind`-like view of the error.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::TomlParseError(_)
            | AppError::SourceOutsideDocsDir { .. } => io::ErrorKind::InvalidInput,
            AppError::DocsDirNotFound(_) | AppError::NoSourceFiles(_) => io::ErrorKind::NotFound,
            AppError::Conversion { .. } => io::ErrorKind::InvalidData,
        }
    }
}
