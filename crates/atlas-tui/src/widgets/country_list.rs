//! Country list widget
//!
//! Renders the list read model: a loading placeholder, the fixed error
//! message, the empty-result message, or one card per visible country.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph, StatefulWidget, Widget, Wrap},
};

use atlas_app::{ListViewController, NO_RESULTS_MESSAGE};
use atlas_core::Country;

use crate::theme::{styles, Palette};

/// Rows taken by one card (name, facts, flag, spacer)
pub const CARD_HEIGHT: usize = 4;

pub struct CountryList<'a> {
    list: &'a ListViewController,
    palette: &'a Palette,
    loading_frame: usize,
}

impl<'a> CountryList<'a> {
    pub fn new(list: &'a ListViewController, palette: &'a Palette) -> Self {
        Self {
            list,
            palette,
            loading_frame: 0,
        }
    }

    pub fn loading_frame(mut self, frame: usize) -> Self {
        self.loading_frame = frame;
        self
    }

    fn card(&self, country: &Country, width: usize) -> ListItem<'static> {
        let p = self.palette;
        let fact = |name: &str, value: String| {
            vec![
                Span::styled(format!("{name}: "), styles::label(p)),
                Span::styled(value, styles::text_secondary(p)),
            ]
        };

        let mut facts = fact("Population", country.population_display());
        facts.push(Span::raw("   "));
        facts.extend(fact("Region", country.region.clone()));
        facts.push(Span::raw("   "));
        facts.extend(fact("Capital", country.capital_display()));

        ListItem::new(vec![
            Line::from(Span::styled(
                super::truncate(&country.name, width),
                styles::text_bold(p),
            )),
            Line::from(facts),
            Line::from(Span::styled(
                super::truncate(&country.flags.png, width),
                styles::text_muted(p),
            )),
            Line::raw(""),
        ])
    }
}

impl Widget for CountryList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::element_block(self.palette, false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let model = self.list.read_model();

        let notice = if model.is_loading {
            Some(Line::from(vec![
                Span::styled(
                    format!("{} ", styles::spinner_frame(self.loading_frame)),
                    styles::accent(self.palette),
                ),
                Span::styled("Loading countries...", styles::text(self.palette)),
            ]))
        } else if let Some(message) = model.error_message {
            Some(Line::from(Span::styled(message, styles::error(self.palette))))
        } else if self.list.is_empty_result() {
            Some(Line::from(Span::styled(
                NO_RESULTS_MESSAGE,
                styles::text_muted(self.palette),
            )))
        } else {
            None
        };

        if let Some(line) = notice {
            let y = inner.y + inner.height / 2;
            Paragraph::new(line)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .render(Rect::new(inner.x, y, inner.width, inner.bottom() - y), buf);
            return;
        }

        let width = (inner.width as usize).saturating_sub(3);
        let items: Vec<ListItem> = model
            .visible_records
            .iter()
            .map(|country| self.card(country, width))
            .collect();

        let list = List::new(items)
            .highlight_style(styles::selected(self.palette))
            .highlight_symbol("▌ ");
        let mut state = ListState::default().with_selected(Some(self.list.selected_index()));
        StatefulWidget::render(list, inner, buf, &mut state);
    }
}
