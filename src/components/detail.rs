//! Detail screen - one product's title, image, price and description

use crate::action::Action;
use crate::component::Component;
use crate::components::ImagePlaceholder;
use crate::model::DetailParams;
use crate::theme::THEME;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::{Paragraph, Wrap},
    Frame,
};

const IMAGE_WIDTH: u16 = 30;
const IMAGE_HEIGHT: u16 = 9;

/// Detail screen component
pub struct DetailComponent {
    pub params: DetailParams,
}

impl DetailComponent {
    pub fn new(params: DetailParams) -> Self {
        Self { params }
    }

    pub fn description(&self) -> String {
        format!(
            "This is a detailed description of chosen Product {}.",
            self.params.title
        )
    }
}

impl Component for DetailComponent {
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
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(2),
                Constraint::Length(IMAGE_HEIGHT + 1),
                Constraint::Length(2),
                Constraint::Min(0),
            ])
            .split(area);

        frame.render_widget(
            Paragraph::new(Line::styled(self.params.title.as_str(), THEME.detail_title))
                .alignment(Alignment::Center),
            chunks[1],
        );

        let image_width = IMAGE_WIDTH.min(chunks[2].width);
        let image_area = Rect::new(
            chunks[2].x + (chunks[2].width - image_width) / 2,
            chunks[2].y,
            image_width,
            chunks[2].height,
        );
        frame.render_widget(
            ImagePlaceholder::new(&self.params.image).size(IMAGE_WIDTH, IMAGE_HEIGHT),
            image_area,
        );

        frame.render_widget(
            Paragraph::new(Line::styled(self.params.price.as_str(), THEME.detail_price))
                .alignment(Alignment::Center),
            chunks[3],
        );

        frame.render_widget(
            Paragraph::new(Line::styled(self.description(), THEME.body_text))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            chunks[4],
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::render_text;
    use crossterm::event::KeyModifiers;

    fn params() -> DetailParams {
        DetailParams {
            title: "Item 7".to_string(),
            price: "$35".to_string(),
            image: "https://via.placeholder.com/150?text=Product+7".to_string(),
        }
    }

    #[test]
    fn test_description_interpolates_title() {
        let detail = DetailComponent::new(params());
        assert_eq!(
            detail.description(),
            "This is a detailed description of chosen Product Item 7."
        );
    }

    #[test]
    fn test_back_keys() {
        let mut detail = DetailComponent::new(params());
        for code in [KeyCode::Esc, KeyCode::Backspace, KeyCode::Left, KeyCode::Char('h')] {
            let action = detail
                .handle_key_event(KeyEvent::new(code, KeyModifiers::NONE))
                .unwrap();
            assert_eq!(action, Some(Action::Back));
        }
        let other = detail
            .handle_key_event(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE))
            .unwrap();
        assert_eq!(other, None);
    }

    #[test]
    fn test_draw_shows_all_fields() {
        let mut detail = DetailComponent::new(params());
        let text = render_text(80, 24, |frame| {
            detail.draw(frame, frame.area()).unwrap();
        });
        assert!(text.contains("Item 7"));
        assert!(text.contains("$35"));
        assert!(text.contains("Product 7"));
        assert!(text.contains("This is a detailed description of chosen Product Item 7."));
    }
}
