//! # atlas-core - Core Domain Types
//!
//! Foundation crate for Atlas Explorer. Provides the country record model,
//! the client-side query pipeline, fetch lifecycle types and error handling.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, indexmap, tracing).
//!
//! ## Public API
//!
//! ### Country Records (`country`)
//! - [`RawCountry`] - Partial record exactly as the remote provider returns it
//! - [`Country`] - Normalized record with display sentinels applied once
//! - [`REGIONS`] - The fixed region labels offered for filtering
//!
//! ### Query Pipeline (`query`, `filter`)
//! - [`QueryState`] - Search term and selected region (empty = no filter)
//! - [`filter::apply()`] - Derive the visible subset from a catalog
//!
//! ### Fetch Lifecycle (`fetch`)
//! - [`FetchState`] - Idle / Loading / Error / Ready
//! - [`FetchError`], [`FetchErrorKind`] - Cloneable failure summary
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use atlas_core::prelude::*;
//! ```

pub mod country;
pub mod error;
pub mod fetch;
pub mod filter;
pub mod logging;
pub mod query;

/// Prelude for common imports used throughout all Atlas Explorer crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use country::{
    Country, CountryDetails, Flags, RawCountry, RawCurrency, RawFlags, RawName, RawNativeName,
    NOT_AVAILABLE, REGIONS,
};
pub use error::{Error, Result, ResultExt};
pub use fetch::{FetchError, FetchErrorKind, FetchState};
pub use query::QueryState;
