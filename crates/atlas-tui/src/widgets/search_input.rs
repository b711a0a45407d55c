//! Search bar widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::theme::{styles, Palette};

pub const SEARCH_PLACEHOLDER: &str = "Search for a country...";

/// Search term input shown above the country list
pub struct SearchBar<'a> {
    term: &'a str,
    active: bool,
    palette: &'a Palette,
}

impl<'a> SearchBar<'a> {
    pub fn new(term: &'a str, palette: &'a Palette) -> Self {
        Self {
            term,
            active: false,
            palette,
        }
    }

    /// Render as focused, with a cursor
    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::element_block(self.palette, self.active).title(" Search [/] ");
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width < 3 {
            return;
        }

        let mut spans = vec![Span::styled("⌕ ", styles::text_muted(self.palette))];

        if self.term.is_empty() && !self.active {
            spans.push(Span::styled(
                SEARCH_PLACEHOLDER,
                styles::text_muted(self.palette),
            ));
        } else {
            // Keep the end of a long term (and the cursor) visible
            let room = (inner.width as usize).saturating_sub(3);
            let visible = tail_to_width(self.term, room);
            spans.push(Span::styled(visible, styles::text(self.palette)));
            if self.active {
                spans.push(Span::styled("_", styles::accent(self.palette)));
            }
        }

        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}

/// Longest suffix of `text` that fits in `width` columns
fn tail_to_width(text: &str, width: usize) -> &str {
    let mut start = 0;
    while text[start..].width() > width {
        match text[start..].chars().next() {
            Some(c) => start += c.len_utf8(),
            None => break,
        }
    }
    &text[start..]
}
