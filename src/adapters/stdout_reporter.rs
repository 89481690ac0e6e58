use crate::domain::ConversionEvent;
use crate::ports::ProgressReporter;

/// Prints each progress event as one line on stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutReporter;

impl ProgressReporter for StdoutReporter {
    fn report(&mut self, event: &ConversionEvent) {
        println!("{}", event);
    }
}
