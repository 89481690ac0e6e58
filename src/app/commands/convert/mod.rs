//! Batch conversion of a docs directory.

mod discovery;

use std::path::{Path, PathBuf};

use crate::app::AppContext;
use crate::domain::{AppError, ConversionEvent, RunTally, target_path};
use crate::ports::{DocumentConverter, DocumentStore, ProgressReporter};

pub use discovery::discover;

/// Inputs for one conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Directory scanned recursively for `.docx` files.
    pub docs_dir: PathBuf,
    /// Root of the mirrored output tree; `None` writes beside each source.
    pub output_dir: Option<PathBuf>,
    /// Overwrite Markdown files that already exist.
    pub force: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOutcome {
    pub tally: RunTally,
    pub exit_code: i32,
}

/// Convert every discovered document, one at a time.
///
/// A missing docs directory or an empty scan aborts before any document is
/// touched. After that, a failure on one document is reported and counted but
/// never stops the batch.
pub fn execute<S, C, R>(
    ctx: &AppContext<S, C>,
    options: &ConvertOptions,
    reporter: &mut R,
) -> Result<ConvertOutcome, AppError>
where
    S: DocumentStore,
    C: DocumentConverter,
    R: ProgressReporter,
{
    if !ctx.store().is_dir(&options.docs_dir) {
        return Err(AppError::DocsDirNotFound(options.docs_dir.clone()));
    }

    let documents = discover(ctx.store(), &options.docs_dir)?;
    if documents.is_empty() {
        return Err(AppError::NoSourceFiles(options.docs_dir.clone()));
    }

    let mut tally = RunTally::default();
    for source in &documents {
        let destination =
            target_path(source, &options.docs_dir, options.output_dir.as_deref())?;
        let event = process_document(ctx, source, destination, options.force);
        if let Some(outcome) = event.outcome() {
            tally.record(outcome);
        }
        reporter.report(&event);
    }

    reporter.report(&ConversionEvent::Finished(tally));
    Ok(ConvertOutcome { tally, exit_code: tally.exit_code() })
}

fn process_document<S, C>(
    ctx: &AppContext<S, C>,
    source: &Path,
    destination: PathBuf,
    force: bool,
) -> ConversionEvent
where
    S: DocumentStore,
    C: DocumentConverter,
{
    if !force && ctx.store().is_file(&destination) {
        return ConversionEvent::Skipped { destination };
    }

    match convert_and_write(ctx, source, &destination) {
        Ok(()) => ConversionEvent::Converted { source: source.to_path_buf(), destination },
        Err(err) => {
            ConversionEvent::Failed { source: source.to_path_buf(), details: err.to_string() }
        }
    }
}

fn convert_and_write<S, C>(
    ctx: &AppContext<S, C>,
    source: &Path,
    destination: &Path,
) -> Result<(), AppError>
where
    S: DocumentStore,
    C: DocumentConverter,
{
    let document = ctx.converter().convert(source)?;
    ctx.store().write_text(destination, &document.text_content)
}
