//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::{Component, Path, PathBuf};

use crate::adapters::{DocxConverter, FilesystemDocumentStore, StdoutReporter};
use crate::app::{AppContext, commands::convert};
use crate::ports::ProgressReporter;

pub use crate::app::commands::convert::{ConvertOptions, ConvertOutcome};
pub use crate::domain::AppError;

/// Create an `AppContext` backed by the real filesystem and DOCX converter.
fn create_context() -> AppContext<FilesystemDocumentStore, DocxConverter> {
    AppContext::new(FilesystemDocumentStore::new(), DocxConverter::new())
}

// =============================================================================
// Convert Command API
// =============================================================================

/// Convert `.docx` files, resolving relative paths against the current directory.
pub fn convert(options: ConvertOptions) -> Result<ConvertOutcome, AppError> {
    convert_in(std::env::current_dir()?, options)
}

/// Convert `.docx` files, resolving relative paths against `base`.
///
/// Progress lines are printed to stdout.
pub fn convert_in(
    base: impl Into<PathBuf>,
    options: ConvertOptions,
) -> Result<ConvertOutcome, AppError> {
    convert_with_reporter(base, options, &mut StdoutReporter)
}

/// Convert `.docx` files, sending progress events to `reporter`.
pub fn convert_with_reporter<R: ProgressReporter>(
    base: impl Into<PathBuf>,
    options: ConvertOptions,
    reporter: &mut R,
) -> Result<ConvertOutcome, AppError> {
    let base = base.into();
    let options = absolutize(&base, options);
    let ctx = create_context();
    convert::execute(&ctx, &options, reporter)
}

fn absolutize(base: &Path, options: ConvertOptions) -> ConvertOptions {
    ConvertOptions {
        docs_dir: normalize(&base.join(options.docs_dir)),
        output_dir: options.output_dir.map(|dir| normalize(&base.join(dir))),
        force: options.force,
    }
}

/// Lexically drop `.` components and fold `..` into its parent.
fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(normalized.components().next_back(), Some(Component::Normal(_))) {
                    normalized.pop();
                } else if !normalized.has_root() {
                    normalized.push(component);
                }
            }
            other => normalized.push(other),
        }
    }
    normalized
}
