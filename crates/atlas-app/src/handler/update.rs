//! Main update function - handles state transitions (TEA pattern)

use atlas_core::prelude::*;

use crate::message::Message;
use crate::state::{AppState, UiMode};

use super::{keys::handle_key, UpdateAction, UpdateResult, PAGE_SIZE};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Tick => {
            state.tick_loading_animation();
            UpdateResult::none()
        }

        Message::ToggleTheme => {
            state.theme.toggle();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Catalog fetch
        // ─────────────────────────────────────────────────────────
        Message::LoadCatalog => {
            let token = state.list.begin_fetch();
            UpdateResult::action(UpdateAction::FetchCatalog { token })
        }

        Message::CatalogLoaded { token, countries } => {
            state.list.apply_fetch(token, Ok(countries));
            UpdateResult::none()
        }

        Message::CatalogLoadFailed { token, error } => {
            state.list.apply_fetch(token, Err(error));
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Query inputs
        // ─────────────────────────────────────────────────────────
        Message::StartSearch => {
            if state.ui_mode == UiMode::Browse {
                state.ui_mode = UiMode::SearchInput;
            }
            UpdateResult::none()
        }

        Message::EndSearch => {
            if state.ui_mode == UiMode::SearchInput {
                state.ui_mode = UiMode::Browse;
            }
            UpdateResult::none()
        }

        Message::SetSearch(term) => {
            state.list.set_search_term(term);
            UpdateResult::none()
        }

        Message::SearchInput(c) => {
            state.list.push_search_char(c);
            UpdateResult::none()
        }

        Message::SearchBackspace => {
            state.list.pop_search_char();
            UpdateResult::none()
        }

        Message::ClearSearch => {
            state.list.set_search_term("");
            UpdateResult::none()
        }

        Message::OpenRegionMenu => {
            if state.ui_mode == UiMode::Browse {
                state
                    .region_menu
                    .focus(&state.list.query().selected_region);
                state.ui_mode = UiMode::RegionMenu;
            }
            UpdateResult::none()
        }

        Message::CloseRegionMenu => {
            if state.ui_mode == UiMode::RegionMenu {
                state.ui_mode = UiMode::Browse;
            }
            UpdateResult::none()
        }

        Message::RegionMenuNext => {
            state.region_menu.next();
            UpdateResult::none()
        }

        Message::RegionMenuPrevious => {
            state.region_menu.previous();
            UpdateResult::none()
        }

        Message::ConfirmRegion => {
            let region = state.region_menu.highlighted_region();
            UpdateResult::message(Message::SelectRegion(region.to_string()))
        }

        Message::SelectRegion(region) => {
            state.list.select_region(&region);
            if state.ui_mode == UiMode::RegionMenu {
                state.ui_mode = UiMode::Browse;
            }
            UpdateResult::none()
        }

        Message::ClearFilters => {
            state.list.clear_filters();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // List selection
        // ─────────────────────────────────────────────────────────
        Message::SelectNext => {
            state.list.select_next();
            UpdateResult::none()
        }
        Message::SelectPrevious => {
            state.list.select_previous();
            UpdateResult::none()
        }
        Message::SelectFirst => {
            state.list.select_first();
            UpdateResult::none()
        }
        Message::SelectLast => {
            state.list.select_last();
            UpdateResult::none()
        }
        Message::PageUp => {
            state.list.page_up(PAGE_SIZE);
            UpdateResult::none()
        }
        Message::PageDown => {
            state.list.page_down(PAGE_SIZE);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Detail route
        // ─────────────────────────────────────────────────────────
        Message::OpenSelected => match state.list.selected_country() {
            Some(country) => UpdateResult::message(Message::OpenDetail {
                name: country.name.clone(),
            }),
            None => UpdateResult::none(),
        },

        Message::OpenDetail { name } => {
            let token = state.detail.open(name.clone());
            state.ui_mode = UiMode::Detail;
            UpdateResult::action(UpdateAction::FetchCountry { token, name })
        }

        Message::ReloadDetail => match state.detail.route() {
            Some(name) => UpdateResult::message(Message::OpenDetail {
                name: name.to_string(),
            }),
            None => UpdateResult::none(),
        },

        Message::CloseDetail => {
            state.detail.close();
            state.ui_mode = UiMode::Browse;
            UpdateResult::none()
        }

        Message::DetailLoaded { token, country } => {
            state.detail.apply_fetch(token, Ok(*country));
            UpdateResult::none()
        }

        Message::DetailLoadFailed { token, error } => {
            if !state.detail.apply_fetch(token, Err(error)) {
                trace!("Ignored failure for superseded lookup {}", token);
            }
            UpdateResult::none()
        }
    }
}
