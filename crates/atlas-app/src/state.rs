//! Application state (Model in TEA pattern)

use atlas_core::REGIONS;

use crate::config::Settings;
use crate::detail_view::DetailViewController;
use crate::list_view::ListViewController;
use crate::theme::ThemeStore;

/// Current UI mode/screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Catalog list with filters
    #[default]
    Browse,

    /// Search input mode - capturing text for the search term
    SearchInput,

    /// Region menu is open over the list
    RegionMenu,

    /// Detail route for a single country
    Detail,
}

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Highlight position inside the region menu
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegionMenuState {
    pub highlighted: usize,
}

impl RegionMenuState {
    pub fn next(&mut self) {
        self.highlighted = (self.highlighted + 1) % REGIONS.len();
    }

    pub fn previous(&mut self) {
        self.highlighted = (self.highlighted + REGIONS.len() - 1) % REGIONS.len();
    }

    pub fn highlighted_region(&self) -> &'static str {
        REGIONS[self.highlighted.min(REGIONS.len() - 1)]
    }

    /// Start the highlight on `region` when it is one of the menu entries
    pub fn focus(&mut self, region: &str) {
        self.highlighted = REGIONS.iter().position(|r| *r == region).unwrap_or(0);
    }
}

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    pub ui_mode: UiMode,
    pub phase: AppPhase,

    pub list: ListViewController,
    pub detail: DetailViewController,
    pub region_menu: RegionMenuState,

    /// Shared light/dark preference, injected at construction
    pub theme: ThemeStore,

    pub settings: Settings,

    /// Spinner frame for loading placeholders
    pub loading_frame: usize,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Settings::default(), ThemeStore::default())
    }
}

impl AppState {
    pub fn new(settings: Settings, theme: ThemeStore) -> Self {
        Self {
            ui_mode: UiMode::default(),
            phase: AppPhase::default(),
            list: ListViewController::new(),
            detail: DetailViewController::new(),
            region_menu: RegionMenuState::default(),
            theme,
            settings,
            loading_frame: 0,
        }
    }

    pub fn request_quit(&mut self) {
        self.phase = AppPhase::Quitting;
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    /// True while the screen being shown waits on a fetch
    pub fn is_waiting(&self) -> bool {
        match self.ui_mode {
            UiMode::Detail => self.detail.fetch_state().is_loading(),
            _ => self.list.is_loading(),
        }
    }

    pub fn tick_loading_animation(&mut self) {
        if self.is_waiting() {
            self.loading_frame = self.loading_frame.wrapping_add(1);
        }
    }
}
