//! Action enum - All possible application actions
//!
//! Actions are discrete operations that the application can perform.
//! Screens emit Actions in response to key events, and the App processes
//! them to update state.

use crate::navigation::Route;
use std::fmt;

/// All possible actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick while idle
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Force quit without confirmation
    ForceQuit,

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────
    /// Push a new screen built from the route
    Navigate(Route),
    /// Pop the current screen
    Back,

    // ─────────────────────────────────────────────────────────────────────────
    // Session Entry
    // ─────────────────────────────────────────────────────────────────────────
    /// Submit the credential form in its current mode
    SubmitCredentials,
    /// Flip between login and sign-up
    ToggleAuthMode,

    // ─────────────────────────────────────────────────────────────────────────
    // Modals
    // ─────────────────────────────────────────────────────────────────────────
    /// Open quit confirmation dialog
    OpenQuitDialog,
    /// Close the current modal
    CloseModal,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::ForceQuit => write!(f, "ForceQuit"),
            Action::Navigate(route) => write!(f, "Navigate({})", route.name().title()),
            Action::Back => write!(f, "Back"),
            Action::SubmitCredentials => write!(f, "SubmitCredentials"),
            Action::ToggleAuthMode => write!(f, "ToggleAuthMode"),
            Action::OpenQuitDialog => write!(f, "OpenQuitDialog"),
            Action::CloseModal => write!(f, "CloseModal"),
        }
    }
}
