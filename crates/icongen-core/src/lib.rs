//! # icongen-core - Core Domain Types
//!
//! Foundation crate for icongen. Provides the icon catalog, the Java-source
//! icon extractor, source discovery, error handling and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on
//! external crates (base64, thiserror, regex, tracing).
//!
//! ## Public API
//!
//! ### Catalog (`catalog`)
//! - [`IconCatalog`] - Immutable name -> base64 payload mapping with
//!   `get`/`decode`/`names` accessors
//! - [`CatalogBuilder`] - Construction-time validation (unique names,
//!   decodable payloads)
//! - [`builtin`] - The two built-in constant groups
//!
//! ### Extraction (`extract`)
//! - [`extract_icons()`] - Pull qualifying `public final` base64 string
//!   constants out of Java source text
//! - [`ParsedIcon`] - One extracted constant with its declaring class
//!
//! ### Discovery (`discovery`)
//! - [`discover_icon_sources()`] - Find `*Icons.java` files under a root
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
//! use icongen_core::prelude::*;
//! ```

pub mod builtin;
pub mod catalog;
pub mod discovery;
pub mod error;
pub mod extract;
pub mod logging;

/// Prelude for common imports used throughout all icongen crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use catalog::{CatalogBuilder, IconCatalog, IconEntry};
pub use discovery::{
    discover_icon_sources, is_icon_source, DiscoveryResult, DEFAULT_MAX_DEPTH,
    DEFAULT_SOURCE_SUFFIX,
};
pub use error::{Error, Result, ResultExt};
pub use extract::{extract_icons, extract_icons_from_file, ParsedIcon};
