//! Footer line with the key bindings for the current mode

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use atlas_app::UiMode;

use crate::theme::{styles, Palette};

fn hints_for(mode: UiMode) -> &'static [(&'static str, &'static str)] {
    match mode {
        UiMode::Browse => &[
            ("↑↓", "move"),
            ("Enter", "details"),
            ("/", "search"),
            ("f", "region"),
            ("1-5", "quick region"),
            ("x", "clear"),
            ("r", "reload"),
            ("t", "theme"),
            ("q", "quit"),
        ],
        UiMode::SearchInput => &[
            ("type", "filter"),
            ("Ctrl+U", "clear"),
            ("Enter/Esc", "done"),
        ],
        UiMode::RegionMenu => &[
            ("↑↓", "move"),
            ("Enter", "toggle"),
            ("1-5", "pick"),
            ("Esc", "close"),
        ],
        UiMode::Detail => &[
            ("Esc", "back"),
            ("r", "retry"),
            ("t", "theme"),
            ("q", "quit"),
        ],
    }
}

pub struct KeyHints<'a> {
    mode: UiMode,
    palette: &'a Palette,
}

impl<'a> KeyHints<'a> {
    pub fn new(mode: UiMode, palette: &'a Palette) -> Self {
        Self { mode, palette }
    }
}

impl Widget for KeyHints<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![Span::raw(" ")];
        for (key, action) in hints_for(self.mode) {
            spans.push(Span::styled(*key, styles::keybinding(self.palette)));
            spans.push(Span::styled(
                format!(" {action}  "),
                styles::text_muted(self.palette),
            ));
        }

        Paragraph::new(Line::from(spans))
            .style(styles::screen(self.palette))
            .render(area, buf);
    }
}
