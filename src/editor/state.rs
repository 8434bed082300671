//! Metadata lifecycle for the selected parameter
//!
//! The editor reacts to parameter changes by issuing metadata fetches and
//! applying whichever response settles. Fetches are described as values
//! so the single-threaded host decides where to await them.

use crate::catalog::{Catalog, CatalogError, ParameterMetadata};

use super::ParameterQueryEditor;
use super::query::Query;

/// Lifecycle of the selected parameter's metadata
#[derive(Debug, Clone, PartialEq)]
pub enum MetadataState {
    /// No parameter selected
    Idle,
    /// Parameter selected, metadata fetch in flight
    Loading,
    /// Fetch settled; `None` means the dictionary has no such parameter
    Ready(Option<ParameterMetadata>),
}

/// A metadata fetch the host must run against the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataRequest {
    pub request_id: u64,
    pub qualified_name: String,
}

/// A settled fetch, still tagged with the request that started it
#[derive(Debug, Clone, PartialEq)]
pub struct MetadataResponse {
    pub request_id: u64,
    pub metadata: Option<ParameterMetadata>,
}

/// Run one metadata fetch: load the dictionary, then look the name up.
///
/// A missing entry settles as `metadata: None`; only the dictionary load
/// itself can fail, and that failure propagates untouched.
pub async fn fetch_metadata<C: Catalog>(
    catalog: &C,
    request: &MetadataRequest,
) -> Result<MetadataResponse, CatalogError> {
    let dictionary = catalog.load_dictionary().await?;
    let metadata = dictionary.get_parameter_info(&request.qualified_name).cloned();
    if metadata.is_none() {
        log::debug!("no dictionary entry for {}", request.qualified_name);
    }
    Ok(MetadataResponse {
        request_id: request.request_id,
        metadata,
    })
}

impl<R> ParameterQueryEditor<R> {
    /// Diff the externally owned query against the last observed one and
    /// transition accordingly.
    ///
    /// A cleared parameter (absent or empty) settles to idle. A new
    /// non-empty parameter moves to loading and returns the fetch to run;
    /// an unchanged parameter returns nothing. Starting a new fetch does
    /// not abort one already in flight, it only supersedes the interest
    /// in it.
    pub fn sync(&mut self, query: &Query) -> Option<MetadataRequest> {
        let parameter = query.parameter.clone().filter(|p| !p.is_empty());
        let changed = self.observed.as_ref() != Some(&parameter);
        self.observed = Some(parameter.clone());
        if !changed {
            return None;
        }
        match parameter {
            None => {
                self.state = MetadataState::Idle;
                None
            }
            Some(qualified_name) => {
                self.state = MetadataState::Loading;
                self.next_request_id += 1;
                let request_id = self.next_request_id;
                self.latest_request_id = Some(request_id);
                log::debug!("fetching metadata for {qualified_name} (request {request_id})");
                Some(MetadataRequest {
                    request_id,
                    qualified_name,
                })
            }
        }
    }

    /// Apply a settled fetch.
    ///
    /// Whichever response resolves last wins, regardless of the order the
    /// requests were issued in; an application for a superseded request is
    /// logged but not suppressed.
    pub fn apply_metadata(&mut self, response: MetadataResponse) {
        if self.latest_request_id != Some(response.request_id) {
            log::debug!(
                "applying metadata from superseded request {}",
                response.request_id
            );
        }
        self.state = MetadataState::Ready(response.metadata);
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;
