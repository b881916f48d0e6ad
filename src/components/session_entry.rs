//! Session entry screen
//!
//! Email and password fields with a login/sign-up switch. Submitting never
//! checks anything; the App turns the outcome into a notification and, when
//! logging in, opens the catalog.

use crate::action::Action;
use crate::component::Component;
use crate::model::{CredentialEntry, SubmitOutcome};
use crate::theme::THEME;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthChar;

const MASK: char = '•';

/// Focusable elements, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Email,
    Password,
    Submit,
    Switch,
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Focus::Email => Focus::Password,
            Focus::Password => Focus::Submit,
            Focus::Submit => Focus::Switch,
            Focus::Switch => Focus::Email,
        }
    }

    fn prev(self) -> Self {
        match self {
            Focus::Email => Focus::Switch,
            Focus::Password => Focus::Email,
            Focus::Submit => Focus::Password,
            Focus::Switch => Focus::Submit,
        }
    }
}

/// Session entry screen component
#[derive(Debug, Default)]
pub struct SessionEntryComponent {
    pub credentials: CredentialEntry,
    pub focus: Focus,
}

impl SessionEntryComponent {
    pub const HELP: &'static [(&'static str, &'static str)] = &[
        ("Tab", "Next"),
        ("Enter", "Press"),
        ("Ctrl+T", "Switch mode"),
        ("Esc", "Quit"),
    ];

    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_mode(&mut self) {
        self.credentials.toggle_mode();
        tracing::debug!(mode = self.credentials.mode.label(), "auth mode toggled");
    }

    pub fn submit(&self) -> SubmitOutcome {
        self.credentials.submit()
    }

    fn focused_field(&mut self) -> Option<&mut String> {
        match self.focus {
            Focus::Email => Some(&mut self.credentials.email),
            Focus::Password => Some(&mut self.credentials.password),
            Focus::Submit | Focus::Switch => None,
        }
    }

    fn press_enter(&mut self) -> Option<Action> {
        match self.focus {
            Focus::Email => {
                self.focus = Focus::Password;
                None
            }
            Focus::Password | Focus::Submit => Some(Action::SubmitCredentials),
            Focus::Switch => Some(Action::ToggleAuthMode),
        }
    }
}

impl Component for SessionEntryComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        // AltGr arrives as Ctrl+Alt, so those chords are typed like plain keys
        if key.modifiers.contains(KeyModifiers::CONTROL)
            && !key.modifiers.contains(KeyModifiers::ALT)
        {
            return Ok(match key.code {
                KeyCode::Char('t') => Some(Action::ToggleAuthMode),
                _ => None,
            });
        }

        let action = match key.code {
            KeyCode::Esc => Some(Action::OpenQuitDialog),
            KeyCode::Tab | KeyCode::Down => {
                self.focus = self.focus.next();
                None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = self.focus.prev();
                None
            }
            KeyCode::Enter => self.press_enter(),
            KeyCode::Backspace => {
                if let Some(field) = self.focused_field() {
                    field.pop();
                }
                None
            }
            KeyCode::Char(c) => {
                if let Some(field) = self.focused_field() {
                    field.push(c);
                    None
                } else if c == ' ' {
                    // Space activates a focused button
                    self.press_enter()
                } else {
                    None
                }
            }
            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        if action == Action::ToggleAuthMode {
            self.toggle_mode();
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let form_width = area.width.min(48);
        let form_area = Rect::new(
            area.x + (area.width - form_width) / 2,
            area.y,
            form_width,
            area.height,
        );

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Spacer
                Constraint::Length(2), // Title
                Constraint::Length(3), // Email
                Constraint::Length(3), // Password
                Constraint::Length(1), // Spacer
                Constraint::Length(1), // Submit
                Constraint::Length(1), // Switch
                Constraint::Min(0),
            ])
            .split(form_area);

        let mode = self.credentials.mode;
        let title = Paragraph::new(Line::styled(mode.label(), THEME.title))
            .alignment(Alignment::Center);
        frame.render_widget(title, chunks[1]);

        let masked: String = self.credentials.password.chars().map(|_| MASK).collect();
        let inner_width = form_width.saturating_sub(2) as usize;
        frame.render_widget(
            text_input(
                "Email",
                &self.credentials.email,
                self.focus == Focus::Email,
                inner_width,
            ),
            chunks[2],
        );
        frame.render_widget(
            text_input("Password", &masked, self.focus == Focus::Password, inner_width),
            chunks[3],
        );

        frame.render_widget(button(mode.label(), self.focus == Focus::Submit), chunks[5]);
        frame.render_widget(
            button(mode.switch_label(), self.focus == Focus::Switch),
            chunks[6],
        );

        Ok(())
    }
}

/// A bordered single-line input showing `placeholder` while empty
///
/// Values wider than the field scroll so the end and the cursor stay visible.
fn text_input<'a>(
    placeholder: &'a str,
    value: &'a str,
    focused: bool,
    inner_width: usize,
) -> Paragraph<'a> {
    let style = if focused { THEME.input_focused } else { THEME.input };
    let mut content = if value.is_empty() {
        Line::from(Span::styled(placeholder, THEME.placeholder))
    } else {
        let room = inner_width.saturating_sub(usize::from(focused));
        Line::from(Span::styled(visible_tail(value, room), Style::default()))
    };
    if focused {
        let cursor = Span::styled("_", style);
        if value.is_empty() {
            content.spans.insert(0, cursor);
        } else {
            content.spans.push(cursor);
        }
    }

    Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(style),
    )
}

/// The longest suffix of `value` that fits in `width` columns
fn visible_tail(value: &str, width: usize) -> &str {
    let mut used = 0;
    let mut start = value.len();
    for (index, c) in value.char_indices().rev() {
        used += c.width().unwrap_or(0);
        if used > width {
            break;
        }
        start = index;
    }
    &value[start..]
}

fn button(label: &str, focused: bool) -> Paragraph<'_> {
    let style = if focused { THEME.button_focused } else { THEME.button };
    Paragraph::new(Line::styled(format!("[ {} ]", label), style)).alignment(Alignment::Center)
}
