//! Parameter catalog access
//!
//! The [`Catalog`] trait is the seam between the selection core and
//! whatever serves telemetry parameters: [`RestCatalog`] speaks the
//! Yamcs-style HTTP API, [`MemoryCatalog`] serves an in-process list.

pub mod memory;
pub mod rest;
pub mod types;

// Re-export public types
pub use memory::MemoryCatalog;
pub use rest::RestCatalog;
pub use types::{
    Dictionary, EngineeringType, ParameterMetadata, ParameterPage, ParameterSummary,
    ParameterTypeInfo,
};

use thiserror::Error;

/// Errors that can occur while talking to a parameter catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Transport-level failure reaching the catalog service
    #[error("catalog request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Catalog service answered with a non-success status
    #[error("catalog returned HTTP {code}: {message}")]
    Status { code: u16, message: String },

    /// Catalog file could not be read
    #[error("cannot read catalog file: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog data did not decode
    #[error("invalid catalog data: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Asynchronous parameter catalog.
///
/// `search_parameters` answers incremental queries under a result limit;
/// `load_dictionary` hands back the full parameter dictionary for
/// qualified-name lookups. A missing parameter is not an error: lookups on
/// the returned [`Dictionary`] yield `None`.
#[allow(async_fn_in_trait)]
pub trait Catalog {
    async fn search_parameters(&self, q: &str, limit: usize)
    -> Result<ParameterPage, CatalogError>;

    async fn load_dictionary(&self) -> Result<Dictionary, CatalogError>;
}
