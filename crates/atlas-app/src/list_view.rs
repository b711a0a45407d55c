//! Catalog list controller
//!
//! Owns the catalog fetch lifecycle and the current [`QueryState`]. The
//! visible subset is never stored: it is recomputed through
//! [`atlas_core::filter`] against the last successfully fetched catalog every
//! time it is read.

use atlas_core::prelude::*;
use atlas_core::{filter, Country, FetchError, FetchState, QueryState};

use crate::request::{RequestGeneration, RequestToken};

/// Message shown in place of the list when the catalog fetch fails
pub const LIST_ERROR_MESSAGE: &str = "Failed to load countries. Please try again later.";

/// Message shown when the catalog is loaded but no record passes the filters
pub const NO_RESULTS_MESSAGE: &str = "No countries found matching your criteria.";

/// Consistent snapshot for rendering the list.
///
/// `is_loading` and `error_message` are never set together, and
/// `visible_records` is empty unless the catalog is ready.
#[derive(Debug, PartialEq)]
pub struct ListReadModel<'a> {
    pub is_loading: bool,
    pub error_message: Option<&'static str>,
    pub visible_records: Vec<&'a Country>,
}

#[derive(Debug, Default)]
pub struct ListViewController {
    fetch: FetchState<Vec<Country>>,
    query: QueryState,
    selected: usize,
    generation: RequestGeneration,
}

impl ListViewController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or restart) the catalog fetch.
    ///
    /// Any response for an earlier token is discarded once it arrives.
    pub fn begin_fetch(&mut self) -> RequestToken {
        let token = self.generation.issue();
        self.fetch.begin();
        self.selected = 0;
        debug!("Catalog fetch {} started", token);
        token
    }

    /// Apply a fetch outcome. Returns false when the response is stale.
    pub fn apply_fetch(
        &mut self,
        token: RequestToken,
        outcome: std::result::Result<Vec<Country>, FetchError>,
    ) -> bool {
        if !self.generation.is_current(token) {
            debug!("Discarding stale catalog response {}", token);
            return false;
        }

        match outcome {
            Ok(countries) => {
                info!("Catalog loaded: {} countries", countries.len());
                self.fetch.settle(Ok(countries));
            }
            Err(e) => {
                warn!("Catalog fetch failed: {}", e);
                self.fetch.settle(Err(e));
            }
        }
        self.selected = 0;
        true
    }

    pub fn fetch_state(&self) -> &FetchState<Vec<Country>> {
        &self.fetch
    }

    pub fn query(&self) -> &QueryState {
        &self.query
    }

    /// The full catalog, present only once a fetch has succeeded
    pub fn catalog(&self) -> &[Country] {
        self.fetch.data().map(Vec::as_slice).unwrap_or_default()
    }

    pub fn is_loading(&self) -> bool {
        self.fetch.is_loading()
    }

    // ─────────────────────────────────────────────────────────
    // Query inputs
    // ─────────────────────────────────────────────────────────

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.query.search_term = term.into();
        self.query_changed();
    }

    pub fn push_search_char(&mut self, c: char) {
        self.query.search_term.push(c);
        self.query_changed();
    }

    pub fn pop_search_char(&mut self) {
        if self.query.search_term.pop().is_some() {
            self.query_changed();
        }
    }

    /// Select `region`, or clear the selection if it is already active
    pub fn select_region(&mut self, region: &str) {
        self.query.toggle_region(region);
        debug!("Region filter: {:?}", self.query.selected_region);
        self.query_changed();
    }

    pub fn clear_filters(&mut self) {
        self.query.clear();
        self.query_changed();
    }

    fn query_changed(&mut self) {
        self.selected = 0;
    }

    // ─────────────────────────────────────────────────────────
    // Read model
    // ─────────────────────────────────────────────────────────

    /// Records passing the current query; empty unless the catalog is ready
    pub fn visible_records(&self) -> Vec<&Country> {
        match self.fetch.data() {
            Some(catalog) => filter::apply(
                catalog,
                &self.query.selected_region,
                &self.query.search_term,
            ),
            None => Vec::new(),
        }
    }

    pub fn read_model(&self) -> ListReadModel<'_> {
        ListReadModel {
            is_loading: self.fetch.is_loading(),
            error_message: self.fetch.error().map(|_| LIST_ERROR_MESSAGE),
            visible_records: self.visible_records(),
        }
    }

    /// Ready, but the filters leave nothing to show
    pub fn is_empty_result(&self) -> bool {
        self.fetch.is_ready() && self.visible_records().is_empty()
    }

    // ─────────────────────────────────────────────────────────
    // Selection
    // ─────────────────────────────────────────────────────────

    /// Selected position, clamped to the visible records
    pub fn selected_index(&self) -> usize {
        let len = self.visible_records().len();
        self.selected.min(len.saturating_sub(1))
    }

    pub fn selected_country(&self) -> Option<&Country> {
        let index = self.selected_index();
        self.visible_records().get(index).copied()
    }

    pub fn select_next(&mut self) {
        self.move_selection(1);
    }

    pub fn select_previous(&mut self) {
        self.move_selection(-1);
    }

    pub fn page_down(&mut self, page: usize) {
        self.move_selection(page.max(1) as isize);
    }

    pub fn page_up(&mut self, page: usize) {
        self.move_selection(-(page.max(1) as isize));
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.visible_records().len().saturating_sub(1);
    }

    fn move_selection(&mut self, delta: isize) {
        let len = self.visible_records().len();
        if len == 0 {
            self.selected = 0;
            return;
        }
        let current = self.selected.min(len - 1) as isize;
        self.selected = (current + delta).clamp(0, len as isize - 1) as usize;
    }
}
