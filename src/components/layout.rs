//! Layout calculations and shared chrome for the UI

use crate::theme::THEME;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Screen layout areas
pub struct ScreenLayout {
    pub header: Rect,
    pub body: Rect,
    pub help: Rect,
}

/// Calculate centered popup area
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let popup_x = area.x + (area.width.saturating_sub(width)) / 2;
    let popup_y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect::new(
        popup_x,
        popup_y,
        width.min(area.width),
        height.min(area.height),
    )
}

/// Split the terminal into header bar, screen body and help bar
pub fn calculate_screen_layout(area: Rect) -> ScreenLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    ScreenLayout {
        header: chunks[0],
        body: chunks[1],
        help: chunks[2],
    }
}

/// Render the navigation header: a back hint when there is somewhere to go
/// back to, followed by the screen title
pub fn render_header(frame: &mut Frame, area: Rect, title: &str, can_go_back: bool) {
    let mut spans = Vec::new();
    if can_go_back {
        spans.push(Span::styled(" ← Back ", THEME.header_back));
    }
    spans.push(Span::styled(format!(" {} ", title), THEME.header));

    let header = Paragraph::new(Line::from(spans)).style(THEME.header);
    frame.render_widget(header, area);
}

/// Render a one-line row of key hints, e.g. `[("Esc", "Back")]`
pub fn render_help_bar(frame: &mut Frame, area: Rect, hints: &[(&str, &str)]) {
    let spans: Vec<Span> = hints
        .iter()
        .flat_map(|(key, label)| {
            [
                Span::styled(format!(" {} ", key), THEME.help_key),
                Span::styled(format!("{} ", label), THEME.help_text),
            ]
        })
        .collect();

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_popup_fits_inside() {
        let area = Rect::new(0, 0, 100, 40);
        let popup = centered_popup(area, 40, 10);
        assert_eq!(popup, Rect::new(30, 15, 40, 10));
    }

    #[test]
    fn test_centered_popup_clamps_to_area() {
        let area = Rect::new(0, 0, 20, 5);
        let popup = centered_popup(area, 40, 10);
        assert_eq!(popup.width, 20);
        assert_eq!(popup.height, 5);
    }

    #[test]
    fn test_screen_layout_reserves_header_and_help() {
        let layout = calculate_screen_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.header.height, 1);
        assert_eq!(layout.help.height, 1);
        assert_eq!(layout.body.height, 22);
        assert_eq!(layout.help.y, 23);
    }
}
