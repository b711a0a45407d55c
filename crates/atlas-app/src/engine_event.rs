//! Domain events emitted by the Engine for external consumers
//!
//! Events are broadcast after each message processing cycle via
//! `Engine::subscribe()`. The headless runner turns them into NDJSON.

use atlas_core::Country;

#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    // ─────────────────────────────────────────────────────────
    // Catalog
    // ─────────────────────────────────────────────────────────
    /// The catalog fetch started (mount or reload)
    CatalogLoading,

    /// The catalog arrived; `visible` is the count after filtering
    CatalogLoaded { total: usize, visible: usize },

    /// The catalog fetch failed; `message` is the user-facing text
    CatalogFailed { message: String, cause: String },

    // ─────────────────────────────────────────────────────────
    // Detail route
    // ─────────────────────────────────────────────────────────
    DetailLoading { name: String },

    DetailLoaded { country: Box<Country> },

    DetailNotFound { name: String },

    DetailFailed { name: String, message: String },

    /// The engine is shutting down
    Shutdown,
}
