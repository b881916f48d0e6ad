//! Notification dialog - acknowledgement box for a titled message

use crate::action::Action;
use crate::component::Component;
use crate::components::centered_popup;
use crate::model::Notification;
use crate::theme::THEME;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

const MIN_WIDTH: u16 = 24;
const MAX_WIDTH: u16 = 60;

/// Dialog showing the notification on top of the modal stack
#[derive(Default)]
pub struct NotificationDialog {
    notification: Option<Notification>,
}

impl NotificationDialog {
    /// Set the notification to show on the next draw
    pub fn set_notification(&mut self, notification: &Notification) {
        self.notification = Some(notification.clone());
    }

    /// Popup width: widest of title and message plus borders, within bounds
    fn popup_width(notification: &Notification) -> u16 {
        let content = notification.title.width().max(notification.message.width()) + 4;
        u16::try_from(content)
            .unwrap_or(MAX_WIDTH)
            .clamp(MIN_WIDTH, MAX_WIDTH)
    }
}

/// Lines `text` takes when word-wrapped to `width` columns
///
/// Words wider than a line are broken across lines.
fn wrapped_line_count(text: &str, width: usize) -> usize {
    let width = width.max(1);
    let mut lines = 1;
    let mut line_width = 0;
    for word in text.split_whitespace() {
        let word_width = word.width();
        if line_width > 0 && line_width + 1 + word_width <= width {
            line_width += 1 + word_width;
            continue;
        }
        if line_width > 0 {
            lines += 1;
        }
        let extra = word_width.saturating_sub(1) / width;
        lines += extra;
        line_width = word_width - extra * width;
    }
    lines
}

impl Component for NotificationDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => Some(Action::CloseModal),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let Some(notification) = &self.notification else {
            return Ok(());
        };

        let width = Self::popup_width(notification);
        let inner_width = usize::from(width.saturating_sub(2));
        let message_lines = wrapped_line_count(&notification.message, inner_width);
        // Borders, blank line, message, blank line, OK
        let height = u16::try_from(message_lines)
            .unwrap_or(u16::MAX)
            .saturating_add(5);
        let popup_area = centered_popup(area, width, height);

        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(THEME.dialog_border)
            .title(format!(" {} ", notification.title))
            .title_style(THEME.dialog_title);
        let inner = block.inner(popup_area);
        frame.render_widget(block, popup_area);

        // OK keeps its own row; a short popup clips the message, never the button
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(inner);

        let message = Paragraph::new(notification.message.as_str())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(message, chunks[1]);

        let ok = Paragraph::new(Line::from(Span::styled("[ OK ]", THEME.button_focused)))
            .alignment(Alignment::Center);
        frame.render_widget(ok, chunks[3]);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::render_text;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_dismiss_keys_close() {
        let mut dialog = NotificationDialog::default();
        for code in [KeyCode::Enter, KeyCode::Esc, KeyCode::Char(' ')] {
            let action = dialog
                .handle_key_event(KeyEvent::new(code, KeyModifiers::NONE))
                .unwrap();
            assert_eq!(action, Some(Action::CloseModal));
        }
        let other = dialog
            .handle_key_event(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE))
            .unwrap();
        assert_eq!(other, None);
    }

    #[test]
    fn test_popup_width_bounds() {
        let short = Notification::new("Hi", "ok");
        assert_eq!(NotificationDialog::popup_width(&short), MIN_WIDTH);

        let long = Notification::new("Logged In!", "x".repeat(200));
        assert_eq!(NotificationDialog::popup_width(&long), MAX_WIDTH);

        let medium = Notification::new("Logged In!", "Email: a@b.c, Password: pw");
        assert_eq!(NotificationDialog::popup_width(&medium), 30);
    }

    #[test]
    fn test_popup_width_saturates_for_huge_messages() {
        let huge = Notification::new("Logged In!", "x".repeat(70_000));
        assert_eq!(NotificationDialog::popup_width(&huge), MAX_WIDTH);
    }

    #[test]
    fn test_wrapped_line_count() {
        assert_eq!(wrapped_line_count("", 10), 1);
        assert_eq!(wrapped_line_count("short", 10), 1);
        assert_eq!(wrapped_line_count("aaaa bbbb cccc", 9), 2);
        assert_eq!(wrapped_line_count(&"x".repeat(100), 58), 2);
        assert_eq!(wrapped_line_count("ab cdefghijkl", 5), 3);
    }

    #[test]
    fn test_draw_shows_title_and_message() {
        let mut dialog = NotificationDialog::default();
        dialog.set_notification(&Notification::new("Signed Up!", "Email: q@w.e, Password: 123"));
        let text = render_text(80, 20, |frame| {
            dialog.draw(frame, frame.area()).unwrap();
        });
        assert!(text.contains("Signed Up!"));
        assert!(text.contains("Email: q@w.e, Password: 123"));
        assert!(text.contains("[ OK ]"));
    }

    #[test]
    fn test_draw_long_spaced_message_keeps_ok_visible() {
        let message = format!(
            "Email: {}, Password: {}",
            "abcdefghij ".repeat(9),
            "p".repeat(50)
        );
        assert_eq!(wrapped_line_count(&message, 58), 4);

        let mut dialog = NotificationDialog::default();
        dialog.set_notification(&Notification::new("Logged In!", message));
        let text = render_text(100, 40, |frame| {
            dialog.draw(frame, frame.area()).unwrap();
        });
        assert!(text.contains("Logged In!"));
        assert!(text.contains(&"p".repeat(50)));
        assert!(text.contains("[ OK ]"));
    }

    #[test]
    fn test_draw_without_notification_is_blank() {
        let mut dialog = NotificationDialog::default();
        let text = render_text(20, 4, |frame| {
            dialog.draw(frame, frame.area()).unwrap();
        });
        assert!(text.chars().all(|c| c == ' ' || c == '\n'));
    }
}
