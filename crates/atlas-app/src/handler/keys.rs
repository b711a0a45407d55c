//! Key event handlers for different UI modes

use atlas_core::REGIONS;

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, UiMode};

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::CharCtrl('c') => return Some(Message::Quit),
        InputKey::CharCtrl('t') => return Some(Message::ToggleTheme),
        _ => {}
    }

    match state.ui_mode {
        UiMode::Browse => handle_key_browse(state, key),
        UiMode::SearchInput => handle_key_search_input(key),
        UiMode::RegionMenu => handle_key_region_menu(key),
        UiMode::Detail => handle_key_detail(key),
    }
}

fn region_for_digit(key: &InputKey) -> Option<Message> {
    key.digit_index()
        .and_then(|i| REGIONS.get(i))
        .map(|region| Message::SelectRegion(region.to_string()))
}

/// Handle key events on the catalog list
fn handle_key_browse(state: &AppState, key: InputKey) -> Option<Message> {
    if let Some(msg) = region_for_digit(&key) {
        return Some(msg);
    }

    match key {
        InputKey::Char('q') => Some(Message::Quit),
        // Esc backs out of active filters first
        InputKey::Esc if !state.list.query().is_empty() => Some(Message::ClearFilters),
        InputKey::Esc => Some(Message::Quit),

        InputKey::Char('/' | 's') => Some(Message::StartSearch),
        InputKey::Char('f') => Some(Message::OpenRegionMenu),
        InputKey::Char('x') => Some(Message::ClearFilters),
        InputKey::Char('r') => Some(Message::LoadCatalog),
        InputKey::Char('t') => Some(Message::ToggleTheme),

        InputKey::Down | InputKey::Char('j') => Some(Message::SelectNext),
        InputKey::Up | InputKey::Char('k') => Some(Message::SelectPrevious),
        InputKey::Home | InputKey::Char('g') => Some(Message::SelectFirst),
        InputKey::End | InputKey::Char('G') => Some(Message::SelectLast),
        InputKey::PageUp => Some(Message::PageUp),
        InputKey::PageDown => Some(Message::PageDown),

        InputKey::Enter => Some(Message::OpenSelected),
        _ => None,
    }
}

/// Handle key events in search input mode
fn handle_key_search_input(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter | InputKey::Esc | InputKey::Down | InputKey::Tab => {
            Some(Message::EndSearch)
        }
        InputKey::Backspace => Some(Message::SearchBackspace),
        InputKey::CharCtrl('u') => Some(Message::ClearSearch),
        InputKey::Char(c) => Some(Message::SearchInput(c)),
        _ => None,
    }
}

/// Handle key events while the region menu is open
fn handle_key_region_menu(key: InputKey) -> Option<Message> {
    if let Some(msg) = region_for_digit(&key) {
        return Some(msg);
    }

    match key {
        InputKey::Down | InputKey::Char('j') | InputKey::Tab => Some(Message::RegionMenuNext),
        InputKey::Up | InputKey::Char('k') | InputKey::BackTab => {
            Some(Message::RegionMenuPrevious)
        }
        InputKey::Enter | InputKey::Char(' ') => Some(Message::ConfirmRegion),
        InputKey::Esc | InputKey::Char('f' | 'q') => Some(Message::CloseRegionMenu),
        _ => None,
    }
}

/// Handle key events on the detail screen
fn handle_key_detail(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc
        | InputKey::Backspace
        | InputKey::Left
        | InputKey::Char('b' | 'h') => Some(Message::CloseDetail),
        InputKey::Char('r') => Some(Message::ReloadDetail),
        InputKey::Char('t') => Some(Message::ToggleTheme),
        InputKey::Char('q') => Some(Message::Quit),
        _ => None,
    }
}
