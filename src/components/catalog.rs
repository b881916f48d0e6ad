//! Catalog screen - Scrollable list of products
//!
//! Owns the item list and the selection cursor. Shopping an item opens its
//! detail screen with a copy of the item's display fields; three shortcuts
//! open the static information screens.

use crate::action::Action;
use crate::component::Component;
use crate::components::ImagePlaceholder;
use crate::model::{build_catalog, CatalogItem, DetailParams};
use crate::navigation::Route;
use crate::theme::THEME;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Height of one list row, sized to the thumbnail
const ROW_HEIGHT: u16 = 5;
const THUMBNAIL_WIDTH: u16 = 16;

/// Catalog screen component
pub struct CatalogComponent {
    pub items: Vec<CatalogItem>,
    pub selected: usize,
    /// First visible row
    offset: usize,
}

impl Default for CatalogComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogComponent {
    pub const HELP: &'static [(&'static str, &'static str)] = &[
        ("j/k", "Move"),
        ("Enter", "Shop"),
        ("a", "About"),
        ("c", "Contact"),
        ("o", "Cash Out"),
        ("Esc", "Back"),
        ("q", "Quit"),
    ];

    pub fn new() -> Self {
        Self {
            items: build_catalog(),
            selected: 0,
            offset: 0,
        }
    }

    pub fn selected_item(&self) -> Option<&CatalogItem> {
        self.items.get(self.selected)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────

    pub fn next(&mut self) {
        if self.selected + 1 < self.items.len() {
            self.selected += 1;
        }
    }

    pub fn previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.items.len().saturating_sub(1);
    }

    /// The "Shop" action for the selected row
    pub fn shop_selected(&self) -> Option<Action> {
        self.selected_item()
            .map(|item| Action::Navigate(Route::Detail(DetailParams::from(item))))
    }

    /// Keep the selection inside the visible window of `visible` rows
    fn scroll_into_view(&mut self, visible: usize) {
        let visible = visible.max(1);
        if self.selected < self.offset {
            self.offset = self.selected;
        } else if self.selected >= self.offset + visible {
            self.offset = self.selected + 1 - visible;
        }
    }
}

impl Component for CatalogComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.next();
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.previous();
                None
            }
            KeyCode::Char('g') | KeyCode::Home => {
                self.select_first();
                None
            }
            KeyCode::Char('G') | KeyCode::End => {
                self.select_last();
                None
            }
            KeyCode::Enter | KeyCode::Char('s') => self.shop_selected(),
            KeyCode::Char('a') => Some(Action::Navigate(Route::About)),
            KeyCode::Char('c') => Some(Action::Navigate(Route::Contact)),
            KeyCode::Char('o') => Some(Action::Navigate(Route::CashOut)),
            KeyCode::Esc | KeyCode::Backspace => Some(Action::Back),
            KeyCode::Char('q') => Some(Action::OpenQuitDialog),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(area);

        let list_block = Block::default()
            .borders(Borders::ALL)
            .border_style(THEME.border)
            .title(Span::styled(
                format!(" Shopping Items ({}) ", self.items.len()),
                THEME.title,
            ));
        let list_area = list_block.inner(chunks[0]);
        frame.render_widget(list_block, chunks[0]);

        let visible = (list_area.height / ROW_HEIGHT) as usize;
        self.scroll_into_view(visible);

        for (slot, (index, item)) in self
            .items
            .iter()
            .enumerate()
            .skip(self.offset)
            .take(visible.max(1))
            .enumerate()
        {
            let y = list_area.y + slot as u16 * ROW_HEIGHT;
            let height = ROW_HEIGHT.min(list_area.bottom().saturating_sub(y));
            if height == 0 {
                break;
            }
            let row = Rect::new(list_area.x, y, list_area.width, height);
            draw_row(frame, row, item, index == self.selected);
        }

        draw_nav_buttons(frame, chunks[1]);
        Ok(())
    }
}

fn draw_row(frame: &mut Frame, area: Rect, item: &CatalogItem, selected: bool) {
    if selected {
        frame.render_widget(Block::default().style(THEME.item_selected), area);
    }

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(THUMBNAIL_WIDTH + 1), Constraint::Min(0)])
        .split(area);

    frame.render_widget(
        ImagePlaceholder::new(&item.image).size(THUMBNAIL_WIDTH, ROW_HEIGHT),
        columns[0],
    );

    let shop_style = if selected { THEME.button_focused } else { THEME.button };
    let lines = vec![
        Line::from(""),
        Line::styled(item.title.as_str(), THEME.item_title),
        Line::styled(item.price.as_str(), THEME.item_price),
        Line::styled("[ Shop ]", shop_style),
    ];
    frame.render_widget(Paragraph::new(lines), columns[1]);
}

fn draw_nav_buttons(frame: &mut Frame, area: Rect) {
    let spans = vec![
        Span::styled("[ About Us ]", THEME.button),
        Span::styled(" a   ", THEME.help_key),
        Span::styled("[ Contact Us ]", THEME.button),
        Span::styled(" c   ", THEME.help_key),
        Span::styled("[ Cash Out ]", THEME.button),
        Span::styled(" o", THEME.help_key),
    ];
    let buttons = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::TOP).border_style(THEME.border));
    frame.render_widget(buttons, area);
}
