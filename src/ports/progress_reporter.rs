use crate::domain::ConversionEvent;

/// Port for surfacing run progress to the user.
pub trait ProgressReporter {
    /// Emit one progress event.
    fn report(&mut self, event: &ConversionEvent);
}
