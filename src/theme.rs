//! Shared style table
//!
//! Every screen reads its styles from [`THEME`]. Styles never change at
//! runtime, so the table is a plain constant.

use ratatui::style::{Color, Modifier, Style};

/// Named styles used across the screens
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Screen header bar
    pub header: Style,
    /// Back indicator in the header
    pub header_back: Style,
    /// Large heading inside a screen
    pub title: Style,
    /// Border of a screen's body block
    pub border: Style,
    /// Unfocused text input
    pub input: Style,
    /// Focused text input
    pub input_focused: Style,
    /// Placeholder text in an empty input
    pub placeholder: Style,
    pub button: Style,
    pub button_focused: Style,
    /// Catalog row title
    pub item_title: Style,
    /// Catalog row price
    pub item_price: Style,
    /// Highlighted catalog row
    pub item_selected: Style,
    /// Frame drawn around image placeholders
    pub image_frame: Style,
    pub image_caption: Style,
    pub detail_title: Style,
    pub detail_price: Style,
    /// Centered prose on detail and info screens
    pub body_text: Style,
    /// Key hints in the help bar
    pub help_key: Style,
    pub help_text: Style,
    pub dialog_border: Style,
    pub dialog_title: Style,
}

pub const THEME: Theme = Theme {
    header: Style::new().fg(Color::White).bg(Color::Blue).add_modifier(Modifier::BOLD),
    header_back: Style::new().fg(Color::Gray).bg(Color::Blue),
    title: Style::new().fg(Color::White).add_modifier(Modifier::BOLD),
    border: Style::new().fg(Color::DarkGray),
    input: Style::new().fg(Color::Gray),
    input_focused: Style::new().fg(Color::Cyan),
    placeholder: Style::new().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
    button: Style::new().fg(Color::Blue),
    button_focused: Style::new().fg(Color::Black).bg(Color::Cyan).add_modifier(Modifier::BOLD),
    item_title: Style::new().fg(Color::White).add_modifier(Modifier::BOLD),
    item_price: Style::new().fg(Color::Green),
    item_selected: Style::new().bg(Color::DarkGray),
    image_frame: Style::new().fg(Color::DarkGray),
    image_caption: Style::new().fg(Color::Gray).add_modifier(Modifier::ITALIC),
    detail_title: Style::new().fg(Color::White).add_modifier(Modifier::BOLD),
    detail_price: Style::new().fg(Color::Green).add_modifier(Modifier::BOLD),
    body_text: Style::new().fg(Color::Gray),
    help_key: Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    help_text: Style::new().fg(Color::DarkGray),
    dialog_border: Style::new().fg(Color::Yellow),
    dialog_title: Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD),
};
