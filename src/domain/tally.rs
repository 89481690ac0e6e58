//! Per-run outcome accounting.

use std::fmt;
use std::path::PathBuf;

/// Result of processing one discovered document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    Converted,
    Skipped,
    Failed,
}

impl FileOutcome {
    pub fn is_failure(self) -> bool {
        self == FileOutcome::Failed
    }
}

/// Counters for one conversion run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunTally {
    pub converted: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl RunTally {
    pub fn record(&mut self, outcome: FileOutcome) {
        match outcome {
            FileOutcome::Converted => self.converted += 1,
            FileOutcome::Skipped => self.skipped += 1,
            FileOutcome::Failed => self.failed += 1,
        }
    }

    /// Number of documents that received an outcome.
    pub fn total(&self) -> usize {
        self.converted + self.skipped + self.failed
    }

    /// Process exit status for the run: non-zero iff any document failed.
    pub fn exit_code(&self) -> i32 {
        if self.failed > 0 { 1 } else { 0 }
    }
}

/// Progress notification emitted while a run advances.
///
/// The `Display` form is the status line shown to users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionEvent {
    Converted { source: PathBuf, destination: PathBuf },
    Skipped { destination: PathBuf },
    Failed { source: PathBuf, details: String },
    Finished(RunTally),
}

impl ConversionEvent {
    /// Outcome carried by a per-file event; `None` for the summary.
    pub fn outcome(&self) -> Option<FileOutcome> {
        match self {
            ConversionEvent::Converted { .. } => Some(FileOutcome::Converted),
            ConversionEvent::Skipped { .. } => Some(FileOutcome::Skipped),
            ConversionEvent::Failed { .. } => Some(FileOutcome::Failed),
            ConversionEvent::Finished(_) => None,
        }
    }
}

impl fmt::Display for ConversionEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionEvent::Converted { source, destination } => {
                write!(f, "Converted {} -> {}", source.display(), destination.display())
            }
            ConversionEvent::Skipped { destination } => {
                write!(f, "Skipping existing file: {}", destination.display())
            }
            ConversionEvent::Failed { source, details } => {
                write!(f, "Failed to convert {}: {}", source.display(), details)
            }
            ConversionEvent::Finished(tally) => write!(
                f,
                "Finished. converted={} skipped={} failed={}",
                tally.converted, tally.skipped, tally.failed
            ),
        }
    }
}
