use crate::domain::ConversionEvent;
use crate::ports::ProgressReporter;

/// Reporter that keeps every event for later assertions.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    pub events: Vec<ConversionEvent>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.events.iter().map(ToString::to_string).collect()
    }
}

impl ProgressReporter for RecordingReporter {
    fn report(&mut self, event: &ConversionEvent) {
        self.events.push(event.clone());
    }
}
