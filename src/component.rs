//! Component trait - Interface for screens and dialogs
//!
//! Each component encapsulates its own local state, key handling, and rendering.
//! Components communicate with the App through Actions rather than reaching
//! into each other's state.

use crate::action::Action;
use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

/// Trait for UI components
///
/// The pattern follows:
/// 1. `handle_key_event` - Convert key presses to Actions (local edits such as
///    typing into a text field may happen here)
/// 2. `update` - Process Actions addressed to this component
/// 3. `draw` - Render the component
pub trait Component {
    /// Initialize the component
    ///
    /// Called once when the component becomes active.
    fn init(&mut self) -> Result<()> {
        Ok(())
    }

    /// Handle a key event, returning an optional Action
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let _ = key;
        Ok(None)
    }

    /// Update component state based on an Action
    ///
    /// May return a follow-up Action for the App to process next.
    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        let _ = action;
        Ok(None)
    }

    /// Draw the component into `area`
    ///
    /// This method should be pure rendering - no state changes beyond
    /// widget scroll bookkeeping.
    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()>;
}
