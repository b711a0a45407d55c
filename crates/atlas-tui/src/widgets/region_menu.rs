//! Region selector and its drop-down menu

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget},
};

use atlas_core::REGIONS;

use crate::theme::{styles, Palette};

/// Closed selector showing the active region or the placeholder label
pub struct RegionSelector<'a> {
    label: &'a str,
    open: bool,
    palette: &'a Palette,
}

impl<'a> RegionSelector<'a> {
    pub fn new(label: &'a str, open: bool, palette: &'a Palette) -> Self {
        Self {
            label,
            open,
            palette,
        }
    }
}

impl Widget for RegionSelector<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::element_block(self.palette, self.open).title(" Region [f] ");
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let arrow = if self.open { " ▴" } else { " ▾" };
        let label_width = (inner.width as usize).saturating_sub(arrow.chars().count() + 1);
        let line = Line::from(vec![
            Span::raw(" "),
            Span::styled(
                super::truncate(self.label, label_width),
                styles::text(self.palette),
            ),
            Span::styled(arrow, styles::text_muted(self.palette)),
        ]);
        Paragraph::new(line).render(inner, buf);
    }
}

/// Drop-down list of regions.
///
/// The active region is marked and the highlighted entry uses the selection
/// style; confirming the active entry clears the filter.
pub struct RegionMenu<'a> {
    selected_region: &'a str,
    highlighted: usize,
    palette: &'a Palette,
}

impl<'a> RegionMenu<'a> {
    pub fn new(selected_region: &'a str, highlighted: usize, palette: &'a Palette) -> Self {
        Self {
            selected_region,
            highlighted,
            palette,
        }
    }

    /// Area of the menu when dropped below `anchor`, clipped to `bounds`
    pub fn area_below(anchor: Rect, bounds: Rect) -> Rect {
        let height = (REGIONS.len() as u16 + 2).min(bounds.bottom().saturating_sub(anchor.bottom()));
        Rect::new(anchor.x, anchor.bottom(), anchor.width, height)
    }
}

impl Widget for RegionMenu<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        let block = styles::element_block(self.palette, true);
        let inner = block.inner(area);
        block.render(area, buf);

        for (i, region) in REGIONS.iter().enumerate() {
            let y = inner.y + i as u16;
            if y >= inner.bottom() {
                break;
            }

            let is_selected = *region == self.selected_region;
            let marker = if is_selected { "✓" } else { " " };
            let style = if i == self.highlighted {
                styles::selected(self.palette)
            } else {
                styles::text(self.palette)
            };

            let line = Line::from(vec![
                Span::styled(format!("{} ", i + 1), styles::text_muted(self.palette)),
                Span::styled(format!("{marker} {region}"), style),
            ]);
            Paragraph::new(line).render(Rect::new(inner.x, y, inner.width, 1), buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use crate::theme::palette::LIGHT;

    #[test]
    fn test_selector_placeholder() {
        let mut term = TestTerminal::new();
        term.render_widget(
            RegionSelector::new("Filter by Region", false, &LIGHT),
            Rect::new(0, 0, 24, 3),
        );
        assert!(term.buffer_contains("Filter by Region"));
    }

    #[test]
    fn test_selector_shows_region() {
        let mut term = TestTerminal::new();
        term.render_widget(
            RegionSelector::new("Europe", true, &LIGHT),
            Rect::new(0, 0, 24, 3),
        );
        assert!(term.buffer_contains("Europe"));
        assert!(term.buffer_contains("▴"));
    }

    #[test]
    fn test_menu_lists_every_region() {
        let mut term = TestTerminal::new();
        term.render_widget(RegionMenu::new("", 0, &LIGHT), Rect::new(0, 0, 24, 7));
        for region in REGIONS {
            assert!(term.buffer_contains(region), "missing {region}");
        }
        assert!(!term.buffer_contains("✓"));
    }

    #[test]
    fn test_menu_marks_active_region() {
        let mut term = TestTerminal::new();
        term.render_widget(RegionMenu::new("Asia", 2, &LIGHT), Rect::new(0, 0, 24, 7));
        assert!(term.line_contains(3, "✓ Asia"));
    }

    #[test]
    fn test_area_below_clips_to_bounds() {
        let anchor = Rect::new(56, 3, 24, 3);
        let bounds = Rect::new(0, 0, 80, 24);
        let area = RegionMenu::area_below(anchor, bounds);
        assert_eq!(area.y, 6);
        assert_eq!(area.height, 7);

        let small = Rect::new(0, 0, 80, 9);
        assert_eq!(RegionMenu::area_below(anchor, small).height, 3);
    }
}
