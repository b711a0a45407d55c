//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Height of the bordered header (top border + title row + bottom border)
pub const HEADER_HEIGHT: u16 = 3;

/// Height of the search/region toolbar on the list screen
pub const TOOLBAR_HEIGHT: u16 = 3;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title and theme toggle
    pub header: Rect,

    /// Search bar and region selector; zero height on the detail screen
    pub toolbar: Rect,

    /// Country list or country detail
    pub content: Rect,

    /// Key hints
    pub footer: Rect,
}

/// Create the main screen layout
///
/// # Arguments
/// * `area` - Total screen area
/// * `with_toolbar` - Reserve the filter toolbar (list screen only)
pub fn create(area: Rect, with_toolbar: bool) -> ScreenAreas {
    let toolbar_height = if with_toolbar { TOOLBAR_HEIGHT } else { 0 };

    let chunks = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Length(toolbar_height),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        toolbar: chunks[1],
        content: chunks[2],
        footer: chunks[3],
    }
}

/// Split the toolbar into the search bar (left) and region selector (right)
pub fn split_toolbar(toolbar: Rect) -> (Rect, Rect) {
    let selector_width = 24.min(toolbar.width / 2);
    let chunks = Layout::horizontal([Constraint::Min(10), Constraint::Length(selector_width)])
        .split(toolbar);
    (chunks[0], chunks[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_layout() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = create(area, true);

        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.toolbar.height, 3);
        assert_eq!(layout.toolbar.y, 3);
        assert_eq!(layout.content.y, 6);
        assert_eq!(layout.content.height, 17); // 24 - 3 - 3 - 1
        assert_eq!(layout.footer.y, 23);
    }

    #[test]
    fn test_detail_layout_has_no_toolbar() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = create(area, false);

        assert_eq!(layout.toolbar.height, 0);
        assert_eq!(layout.content.y, 3);
        assert_eq!(layout.content.height, 20);
    }

    #[test]
    fn test_layout_areas_contiguous() {
        let area = Rect::new(0, 0, 80, 24);
        for with_toolbar in [true, false] {
            let l = create(area, with_toolbar);
            assert_eq!(
                l.header.height + l.toolbar.height + l.content.height + l.footer.height,
                area.height
            );
        }
    }

    #[test]
    fn test_split_toolbar() {
        let (search, selector) = split_toolbar(Rect::new(0, 3, 80, 3));
        assert_eq!(selector.width, 24);
        assert_eq!(search.width, 56);
        assert_eq!(selector.x, 56);
    }
}
