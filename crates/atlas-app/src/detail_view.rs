//! Single-country controller for the detail route
//!
//! The route parameter is the country's display name, used verbatim. The
//! provider resolves it by its own matching rules and the first match is
//! taken as canonical, so duplicate or ambiguous names are not
//! disambiguated.
//!
//! A lookup with no match is exposed as [`DetailReadModel::NotFound`] and a
//! transport or decoding failure as [`DetailReadModel::Error`], rather than
//! leaving the view on its loading placeholder.

use atlas_core::prelude::*;
use atlas_core::{Country, FetchError, FetchErrorKind, FetchState};

use crate::request::{RequestGeneration, RequestToken};

/// What the detail view should show
#[derive(Debug, PartialEq)]
pub enum DetailReadModel<'a> {
    /// No route is open
    Idle,
    Loading { name: &'a str },
    NotFound { name: &'a str },
    Error { name: &'a str, message: &'a str },
    Ready(&'a Country),
}

#[derive(Debug, Default)]
pub struct DetailViewController {
    route: Option<String>,
    fetch: FetchState<Country>,
    generation: RequestGeneration,
}

impl DetailViewController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter the route for `name`, restarting at Loading
    pub fn open(&mut self, name: impl Into<String>) -> RequestToken {
        let name = name.into();
        let token = self.generation.issue();
        debug!("Detail lookup {} for {:?}", token, name);
        self.route = Some(name);
        self.fetch.begin();
        token
    }

    /// Leave the route; any in-flight lookup becomes stale
    pub fn close(&mut self) {
        self.generation.invalidate();
        self.route = None;
        self.fetch = FetchState::Idle;
    }

    /// Apply a lookup outcome. Returns false when the response is stale.
    pub fn apply_fetch(
        &mut self,
        token: RequestToken,
        outcome: std::result::Result<Country, FetchError>,
    ) -> bool {
        if !self.generation.is_current(token) {
            debug!("Discarding stale detail response {}", token);
            return false;
        }

        if let Err(e) = &outcome {
            match e.kind {
                FetchErrorKind::NotFound => info!("No country matches {:?}", self.route),
                _ => warn!("Detail lookup failed: {}", e),
            }
        }
        self.fetch.settle(outcome);
        true
    }

    pub fn route(&self) -> Option<&str> {
        self.route.as_deref()
    }

    pub fn fetch_state(&self) -> &FetchState<Country> {
        &self.fetch
    }

    pub fn country(&self) -> Option<&Country> {
        self.fetch.data()
    }

    pub fn read_model(&self) -> DetailReadModel<'_> {
        let Some(name) = self.route.as_deref() else {
            return DetailReadModel::Idle;
        };

        match &self.fetch {
            FetchState::Idle | FetchState::Loading => DetailReadModel::Loading { name },
            FetchState::Ready(country) => DetailReadModel::Ready(country),
            FetchState::Error(e) if e.is_not_found() => DetailReadModel::NotFound { name },
            FetchState::Error(e) => DetailReadModel::Error {
                name,
                message: &e.message,
            },
        }
    }
}
