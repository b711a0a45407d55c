//! Main render/view function (View in TEA pattern)

use ratatui::widgets::Block;
use ratatui::Frame;

use atlas_app::{AppState, UiMode};

use crate::layout;
use crate::theme::{styles, Palette};
use crate::widgets;


/// Render the complete UI.
///
/// Pure with respect to `state`: everything shown is derived from the
/// controllers' read models on every frame.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let palette = Palette::for_mode(state.theme.mode());

    frame.render_widget(Block::default().style(styles::screen(palette)), area);

    let on_detail = state.ui_mode == UiMode::Detail;
    let areas = layout::create(area, !on_detail);

    frame.render_widget(
        widgets::MainHeader::new(palette, state.theme.toggle_label(), state.theme.is_dark()),
        areas.header,
    );

    if on_detail {
        let detail = widgets::CountryDetail::new(state.detail.read_model(), palette)
            .loading_frame(state.loading_frame);
        frame.render_widget(detail, areas.content);
    } else {
        let (search_area, selector_area) = layout::split_toolbar(areas.toolbar);
        let query = state.list.query();

        frame.render_widget(
            widgets::SearchBar::new(&query.search_term, palette)
                .active(state.ui_mode == UiMode::SearchInput),
            search_area,
        );

        let menu_open = state.ui_mode == UiMode::RegionMenu;
        frame.render_widget(
            widgets::RegionSelector::new(query.region_label(), menu_open, palette),
            selector_area,
        );

        frame.render_widget(
            widgets::CountryList::new(&state.list, palette).loading_frame(state.loading_frame),
            areas.content,
        );

        // Drop-down overlay last so it covers the list
        if menu_open {
            let menu_area = widgets::RegionMenu::area_below(selector_area, area);
            frame.render_widget(
                widgets::RegionMenu::new(
                    &query.selected_region,
                    state.region_menu.highlighted,
                    palette,
                ),
                menu_area,
            );
        }
    }

    frame.render_widget(widgets::KeyHints::new(state.ui_mode, palette), areas.footer);
}
