//! Header bar with the app title and theme toggle

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{styles, Palette};

pub const APP_TITLE: &str = "Atlas Explorer";

/// Main header showing the title and the theme toggle label
pub struct MainHeader<'a> {
    palette: &'a Palette,
    toggle_label: &'a str,
    is_dark: bool,
}

impl<'a> MainHeader<'a> {
    pub fn new(palette: &'a Palette, toggle_label: &'a str, is_dark: bool) -> Self {
        Self {
            palette,
            toggle_label,
            is_dark,
        }
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::element_block(self.palette, false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let row = Rect { height: 1, ..inner };

        Paragraph::new(Line::from(Span::styled(
            format!(" {APP_TITLE}"),
            styles::text_bold(self.palette),
        )))
        .render(row, buf);

        let icon = if self.is_dark { "☀" } else { "☾" };
        let toggle = Line::from(vec![
            Span::styled(format!("{icon} "), styles::accent(self.palette)),
            Span::styled(self.toggle_label, styles::text(self.palette)),
            Span::styled(" [t] ", styles::text_muted(self.palette)),
        ]);
        Paragraph::new(toggle)
            .alignment(Alignment::Right)
            .render(row, buf);
    }
}
