//! Blocking user gates: confirmation before deletion and validation alerts.

use std::cell::RefCell;

pub const DELETE_CONFIRMATION: &str = "Delete this job?";

/// Front-end hooks for the two blocking interactions.
pub trait Prompter {
    /// Asks a yes/no question. `false` aborts the pending action.
    fn confirm(&self, message: &str) -> bool;

    /// Shows a blocking notification.
    fn alert(&self, message: &str);
}

impl<P: Prompter + ?Sized> Prompter for &P {
    fn confirm(&self, message: &str) -> bool {
        (**self).confirm(message)
    }

    fn alert(&self, message: &str) {
        (**self).alert(message)
    }
}

/// Answers every confirmation with a fixed value and logs alerts.
///
/// Used for non-interactive runs (`--yes`) and scripted sessions.
#[derive(Debug, Clone, Copy)]
pub struct FixedAnswer(pub bool);

impl Prompter for FixedAnswer {
    fn confirm(&self, message: &str) -> bool {
        tracing::debug!(answer = self.0, "{}", message);
        self.0
    }

    fn alert(&self, message: &str) {
        tracing::warn!("{}", message);
    }
}

/// Records every prompt it receives; answers confirmations with a fixed value.
#[derive(Debug, Default)]
pub struct RecordingPrompter {
    answer: bool,
    confirmations: RefCell<Vec<String>>,
    alerts: RefCell<Vec<String>>,
}

impl RecordingPrompter {
    pub fn answering(answer: bool) -> Self {
        Self {
            answer,
            ..Default::default()
        }
    }

    pub fn confirmations(&self) -> Vec<String> {
        self.confirmations.borrow().clone()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }
}

impl Prompter for RecordingPrompter {
    fn confirm(&self, message: &str) -> bool {
        self.confirmations.borrow_mut().push(message.to_string());
        self.answer
    }

    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }
}
