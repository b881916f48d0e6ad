//! Image placeholder widget
//!
//! The terminal cannot show remote raster images, so an image is drawn as a
//! framed box of the requested size carrying the caption encoded in its URL.
//! Nothing is fetched and nothing is reported back to the caller.

use crate::theme::THEME;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

/// A framed stand-in for an image at `url`
#[derive(Debug, Clone, Copy)]
pub struct ImagePlaceholder<'a> {
    url: &'a str,
    width: u16,
    height: u16,
}

impl<'a> ImagePlaceholder<'a> {
    pub fn new(url: &'a str) -> Self {
        Self {
            url,
            width: 16,
            height: 5,
        }
    }

    /// Target display size in cells
    pub fn size(mut self, width: u16, height: u16) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Caption text: the `text` query value with `+` decoded as spaces,
    /// or the whole URL when there is none
    pub fn caption(&self) -> String {
        self.url
            .split_once('?')
            .and_then(|(_, query)| {
                query
                    .split('&')
                    .find_map(|pair| pair.strip_prefix("text="))
            })
            .filter(|text| !text.is_empty())
            .map(|text| text.replace('+', " "))
            .unwrap_or_else(|| self.url.to_string())
    }
}

impl Widget for ImagePlaceholder<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let target = Rect::new(
            area.x,
            area.y,
            self.width.min(area.width),
            self.height.min(area.height),
        );
        if target.width < 3 || target.height < 3 {
            return;
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(THEME.image_frame);
        let inner = block.inner(target);
        block.render(target, buf);

        // Vertically centre the caption
        let pad = inner.height.saturating_sub(1) / 2;
        let caption_area = Rect::new(
            inner.x,
            inner.y + pad,
            inner.width,
            inner.height.saturating_sub(pad),
        );
        Paragraph::new(Line::styled(self.caption(), THEME.image_caption))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(caption_area, buf);
    }
}
