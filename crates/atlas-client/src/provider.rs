//! Catalog provider trait
//!
//! The application layer only talks to the remote data source through this
//! trait, so the TEA loop can be driven by the HTTP client in production and
//! by an in-memory catalog in tests.

use atlas_core::prelude::*;
use atlas_core::Country;

/// Read operations offered by the remote country provider.
///
/// `CatalogProvider` is the `Send` variant used by spawned tasks.
#[trait_variant::make(CatalogProvider: Send)]
pub trait LocalCatalogProvider {
    /// Fetch the full catalog.
    ///
    /// Fails with a network error on transport failure or a non-success
    /// status, and with a malformed-response error when the body is not a
    /// JSON array of country records.
    async fn fetch_all(&self) -> Result<Vec<Country>>;

    /// Resolve a single country by display name.
    ///
    /// Matching follows the provider's own rules; the first returned match is
    /// canonical. Fails with [`Error::NotFound`] when nothing matches.
    async fn fetch_by_name(&self, name: &str) -> Result<Country>;
}
