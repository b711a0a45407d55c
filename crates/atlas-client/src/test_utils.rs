//! Test utilities for catalog consumers
//!
//! Provides an in-memory [`CatalogProvider`] with per-name latency so that
//! application tests can reproduce out-of-order responses without a network.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use atlas_core::prelude::*;
use atlas_core::Country;

use crate::provider::CatalogProvider;

/// Creates a test country with a single capital.
pub fn test_country(name: &str, region: &str, capital: &str) -> Country {
    Country::new(name, region).with_capitals([capital])
}

/// The three-country catalog used throughout the query pipeline tests.
pub fn sample_catalog() -> Vec<Country> {
    vec![
        test_country("France", "Europe", "Paris"),
        test_country("Germany", "Europe", "Berlin"),
        test_country("Japan", "Asia", "Tokyo"),
    ]
}

/// In-memory catalog provider.
///
/// Name lookups follow the provider's substring rule (case-insensitive) and
/// return the first match. Every call is recorded.
#[derive(Debug, Clone, Default)]
pub struct MockCatalog {
    countries: Vec<Country>,
    fail_all_status: Option<u16>,
    all_delay: Option<Duration>,
    name_delays: HashMap<String, Duration>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockCatalog {
    pub fn new(countries: Vec<Country>) -> Self {
        Self {
            countries,
            ..Self::default()
        }
    }

    /// Make `fetch_all` fail with the given HTTP status
    pub fn failing_all(mut self, status: u16) -> Self {
        self.fail_all_status = Some(status);
        self
    }

    /// Delay `fetch_all` responses
    pub fn with_all_delay(mut self, delay: Duration) -> Self {
        self.all_delay = Some(delay);
        self
    }

    /// Delay the lookup for `name`
    pub fn with_name_delay(mut self, name: &str, delay: Duration) -> Self {
        self.name_delays.insert(name.to_string(), delay);
        self
    }

    /// Calls made so far, as `"all"` or `"name:<name>"`
    pub fn calls(&self) -> Vec<String> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }

    fn record(&self, call: String) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
    }
}

impl CatalogProvider for MockCatalog {
    async fn fetch_all(&self) -> Result<Vec<Country>> {
        self.record("all".to_string());
        if let Some(delay) = self.all_delay {
            tokio::time::sleep(delay).await;
        }
        match self.fail_all_status {
            Some(status) => Err(Error::http_status(status, "mock://all")),
            None => Ok(self.countries.clone()),
        }
    }

    async fn fetch_by_name(&self, name: &str) -> Result<Country> {
        self.record(format!("name:{name}"));
        if let Some(delay) = self.name_delays.get(name).copied() {
            tokio::time::sleep(delay).await;
        }
        let needle = name.to_lowercase();
        self.countries
            .iter()
            .find(|c| c.name.to_lowercase().contains(&needle))
            .cloned()
            .ok_or_else(|| Error::not_found(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_catalog_lookup_and_calls() {
        let mock = MockCatalog::new(sample_catalog());

        let all = mock.fetch_all().await.unwrap();
        assert_eq!(all.len(), 3);

        let germany = mock.fetch_by_name("germ").await.unwrap();
        assert_eq!(germany.name, "Germany");

        let missing = mock.fetch_by_name("Atlantis").await.unwrap_err();
        assert!(matches!(missing, Error::NotFound { .. }));

        assert_eq!(mock.calls(), vec!["all", "name:germ", "name:Atlantis"]);
    }

    #[tokio::test]
    async fn test_mock_catalog_failing_all() {
        let mock = MockCatalog::new(sample_catalog()).failing_all(500);
        let err = mock.fetch_all().await.unwrap_err();
        assert!(matches!(err, Error::HttpStatus { status: 500, .. }));
    }
}
