//! Message types for the application (TEA pattern)

use atlas_core::{Country, FetchError};

use crate::input_key::InputKey;
use crate::request::RequestToken;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from the frontend
    Key(InputKey),

    /// Stop the application
    Quit,

    /// Animation tick
    Tick,

    // ─────────────────────────────────────────────────────────
    // Catalog fetch
    // ─────────────────────────────────────────────────────────
    /// Mount (or re-mount) the list: restart the catalog fetch
    LoadCatalog,

    CatalogLoaded {
        token: RequestToken,
        countries: Vec<Country>,
    },

    CatalogLoadFailed {
        token: RequestToken,
        error: FetchError,
    },

    // ─────────────────────────────────────────────────────────
    // Query inputs
    // ─────────────────────────────────────────────────────────
    /// Enter search input mode
    StartSearch,

    /// Leave search input mode, keeping the term
    EndSearch,

    /// Replace the search term
    SetSearch(String),

    SearchInput(char),

    SearchBackspace,

    ClearSearch,

    OpenRegionMenu,

    CloseRegionMenu,

    RegionMenuNext,

    RegionMenuPrevious,

    /// Select the highlighted region menu entry
    ConfirmRegion,

    /// Toggle `region` as the region filter
    SelectRegion(String),

    ClearFilters,

    // ─────────────────────────────────────────────────────────
    // List selection
    // ─────────────────────────────────────────────────────────
    SelectNext,
    SelectPrevious,
    SelectFirst,
    SelectLast,
    PageUp,
    PageDown,

    // ─────────────────────────────────────────────────────────
    // Detail route
    // ─────────────────────────────────────────────────────────
    /// Open the detail route for the selected list entry
    OpenSelected,

    /// Open the detail route for a display name
    OpenDetail { name: String },

    /// Re-issue the lookup for the current route
    ReloadDetail,

    /// Return to the list
    CloseDetail,

    DetailLoaded {
        token: RequestToken,
        country: Box<Country>,
    },

    DetailLoadFailed {
        token: RequestToken,
        error: FetchError,
    },

    ToggleTheme,
}
