//! Static information screens: About, Contact and Cash Out

use crate::action::Action;
use crate::component::Component;
use crate::navigation::ScreenName;
use crate::theme::THEME;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    text::Line,
    widgets::{Paragraph, Wrap},
    Frame,
};

/// Which fixed page to show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoPage {
    About,
    Contact,
    CashOut,
}

impl InfoPage {
    pub fn screen_name(&self) -> ScreenName {
        match self {
            InfoPage::About => ScreenName::About,
            InfoPage::Contact => ScreenName::Contact,
            InfoPage::CashOut => ScreenName::CashOut,
        }
    }

    pub fn heading(&self) -> &'static str {
        match self {
            InfoPage::About => "About Us",
            InfoPage::Contact => "Contact Us",
            InfoPage::CashOut => "Cash Out",
        }
    }

    /// Body paragraphs
    pub fn body(&self) -> &'static [&'static str] {
        match self {
            InfoPage::About => &[
                "Welcome to our shopping app! We are committed to providing the best \
                 products and services to our customers. Explore a wide range of items \
                 carefully curated just for you.",
            ],
            InfoPage::Contact => &[
                "For any inquiries or assistance, please reach out to us:",
                "Email: support@shoppingapp.com",
                "Phone: +1 234 567 8900",
                "Address: 123 Shopping Street, City, Country",
            ],
            InfoPage::CashOut => &["Proceed with cashing out your selected items."],
        }
    }
}

/// Static page component; holds nothing but which page it is
pub struct InfoComponent {
    page: InfoPage,
}

impl InfoComponent {
    pub fn new(page: InfoPage) -> Self {
        Self { page }
    }

    pub fn page(&self) -> InfoPage {
        self.page
    }
}

impl Component for InfoComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Left | KeyCode::Char('h') => {
                Some(Action::Back)
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let mut lines = vec![
            Line::from(""),
            Line::styled(self.page.heading(), THEME.title),
            Line::from(""),
        ];
        lines.extend(
            self.page
                .body()
                .iter()
                .map(|text| Line::styled(*text, THEME.body_text)),
        );

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::render_text;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_pages_map_to_screen_names() {
        assert_eq!(InfoPage::About.screen_name(), ScreenName::About);
        assert_eq!(InfoPage::Contact.screen_name(), ScreenName::Contact);
        assert_eq!(InfoPage::CashOut.screen_name(), ScreenName::CashOut);
    }

    #[test]
    fn test_contact_lists_all_channels() {
        let body = InfoPage::Contact.body();
        assert_eq!(body.len(), 4);
        assert_eq!(body[1], "Email: support@shoppingapp.com");
        assert_eq!(body[2], "Phone: +1 234 567 8900");
    }

    #[test]
    fn test_any_back_key_goes_back() {
        let mut info = InfoComponent::new(InfoPage::About);
        let action = info
            .handle_key_event(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE))
            .unwrap();
        assert_eq!(action, Some(Action::Back));
    }

    #[test]
    fn test_draw_is_identical_on_every_visit() {
        let first = render_text(80, 12, |frame| {
            InfoComponent::new(InfoPage::CashOut)
                .draw(frame, frame.area())
                .unwrap();
        });
        let second = render_text(80, 12, |frame| {
            InfoComponent::new(InfoPage::CashOut)
                .draw(frame, frame.area())
                .unwrap();
        });
        assert_eq!(first, second);
        assert!(first.contains("Cash Out"));
        assert!(first.contains("Proceed with cashing out your selected items."));
    }

    #[test]
    fn test_draw_about_wraps_text() {
        let text = render_text(60, 12, |frame| {
            InfoComponent::new(InfoPage::About)
                .draw(frame, frame.area())
                .unwrap();
        });
        assert!(text.contains("About Us"));
        assert!(text.contains("Welcome to our shopping app!"));
    }
}
