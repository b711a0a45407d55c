//! # atlas-client - Remote Country Catalog
//!
//! Performs the two read operations against the public country provider and
//! normalizes their failures into [`atlas_core::Error`].
//!
//! Depends on [`atlas_core`] for domain types and error handling.
//!
//! ## Public API
//!
//! ### Provider Seam
//! - [`CatalogProvider`] - Async trait with `fetch_all` and `fetch_by_name`
//!
//! ### HTTP Implementation
//! - [`HttpCatalogClient`] - reqwest-backed client for the REST endpoints
//! - [`parse_countries()`] - Decode a provider JSON array into [`Country`] values
//! - [`encode_name()`] - Percent-encode a display name for the lookup path
//!
//! No retries and, unless configured, no timeout: a failure is surfaced once.

pub mod http;
pub mod provider;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use http::{
    encode_name, parse_countries, HttpCatalogClient, DEFAULT_BASE_URL, DEFAULT_LIST_FIELDS,
};
pub use provider::{CatalogProvider, LocalCatalogProvider};

/// Re-exported from `atlas_core` for convenience. Canonical import: `atlas_core::Country`.
pub use atlas_core::Country;
