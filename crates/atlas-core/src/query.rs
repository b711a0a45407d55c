//! Query inputs for the catalog list

use serde::Serialize;

/// Current filter inputs for the list view.
///
/// An empty string means "no filter" for both fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QueryState {
    pub search_term: String,
    pub selected_region: String,
}

impl QueryState {
    pub fn new(search_term: impl Into<String>, selected_region: impl Into<String>) -> Self {
        Self {
            search_term: search_term.into(),
            selected_region: selected_region.into(),
        }
    }

    /// Select a region, or clear it when it is already the active one.
    pub fn toggle_region(&mut self, region: &str) {
        if self.selected_region == region {
            self.selected_region.clear();
        } else {
            self.selected_region = region.to_string();
        }
    }

    /// True when neither input narrows the catalog
    pub fn is_empty(&self) -> bool {
        self.search_term.is_empty() && self.selected_region.is_empty()
    }

    pub fn clear(&mut self) {
        self.search_term.clear();
        self.selected_region.clear();
    }

    /// Label for the region selector
    pub fn region_label(&self) -> &str {
        if self.selected_region.is_empty() {
            "Filter by Region"
        } else {
            &self.selected_region
        }
    }
}
