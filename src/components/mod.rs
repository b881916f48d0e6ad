//! UI Components
//!
//! Each screen and dialog encapsulates its own state, key handling, and
//! rendering. Components communicate through Actions rather than direct
//! state mutation.

pub mod catalog;
pub mod detail;
pub mod image;
pub mod info;
pub mod layout;
pub mod notification_dialog;
pub mod quit_dialog;
pub mod session_entry;

pub use catalog::CatalogComponent;
pub use detail::DetailComponent;
pub use image::ImagePlaceholder;
pub use info::{InfoComponent, InfoPage};
pub use layout::{calculate_screen_layout, centered_popup, render_header, render_help_bar};
pub use notification_dialog::NotificationDialog;
pub use quit_dialog::QuitDialog;
pub use session_entry::SessionEntryComponent;

/// Draw into an off-screen terminal and return its rows joined by newlines
#[cfg(test)]
pub(crate) fn render_text(width: u16, height: u16, draw: impl FnOnce(&mut ratatui::Frame)) -> String {
    use ratatui::{backend::TestBackend, Terminal};

    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(draw).unwrap();
    let buffer = terminal.backend().buffer();
    buffer
        .content()
        .chunks(buffer.area.width as usize)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
