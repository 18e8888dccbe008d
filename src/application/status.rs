use crate::domain::SubmissionOutcome;

/// The part of the interface that reports submission progress.
///
/// Implementors own how the busy indicator and the outcome text are drawn;
/// the coordinator only drives the two transitions.
pub trait StatusDisplay {
    /// Reveal the busy indicator.
    fn show_pending(&mut self);

    /// Hide the busy indicator and show `text`.
    fn resolve(&mut self, text: &str);

    fn apply(&mut self, outcome: &SubmissionOutcome) {
        self.resolve(&outcome.text);
    }
}
