//! Modal stack for managing overlays
//!
//! Overlays sit above whichever screen is current and take all key input
//! until dismissed.

use super::notification::Notification;

/// Represents a modal overlay that can be displayed on top of a screen
#[derive(Debug, Clone, PartialEq)]
pub enum Modal {
    /// Quit confirmation dialog
    QuitConfirm,
    /// Acknowledgement dialog showing a message
    Notification(Notification),
}

/// A stack of modal overlays
///
/// Modals are rendered from bottom to top, with only the top modal
/// receiving input events.
#[derive(Debug, Default)]
pub struct ModalStack {
    stack: Vec<Modal>,
}

impl ModalStack {
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }

    pub fn push(&mut self, modal: Modal) {
        self.stack.push(modal);
    }

    pub fn pop(&mut self) -> Option<Modal> {
        self.stack.pop()
    }

    /// Get a reference to the top modal without removing it
    pub fn top(&self) -> Option<&Modal> {
        self.stack.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Modal> {
        self.stack.iter()
    }
}
