//! Parameter query editor core
//!
//! Owns the metadata lifecycle for the currently selected parameter and
//! the reconciliation of requested statistics against its capabilities.
//! The host panel drives it: after every query update it calls
//! [`ParameterQueryEditor::sync`], runs any returned fetch through
//! [`fetch_metadata`], and feeds the settled response back via
//! [`ParameterQueryEditor::apply_metadata`]. Explicit user selections go
//! through [`ParameterQueryEditor::select_parameter`] and
//! [`ParameterQueryEditor::select_stats`], which commit an updated query
//! and request a run as one paired notification.

pub mod query;
pub mod reconcile;
pub mod state;

// Re-export public types
pub use query::{ParseQueryTypeError, Query, QueryType};
pub use reconcile::EditorHost;
pub use state::{MetadataRequest, MetadataResponse, MetadataState, fetch_metadata};

use crate::catalog::ParameterMetadata;

/// Selection state machine for one query editor.
///
/// Generic over the capability registry deciding stat validity.
pub struct ParameterQueryEditor<R> {
    registry: R,
    state: MetadataState,
    /// Parameter seen at the previous sync; `None` until the first sync
    observed: Option<Option<String>>,
    next_request_id: u64,
    /// Most recently issued fetch, for stale-application logging
    latest_request_id: Option<u64>,
}

impl<R> ParameterQueryEditor<R> {
    /// A fresh editor reports loading until the first sync settles it,
    /// matching a widget that mounts before its metadata arrives.
    pub fn new(registry: R) -> Self {
        ParameterQueryEditor {
            registry,
            state: MetadataState::Loading,
            observed: None,
            next_request_id: 0,
            latest_request_id: None,
        }
    }

    pub fn state(&self) -> &MetadataState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, MetadataState::Loading)
    }

    /// Metadata of the selected parameter, when a fetch has settled on
    /// some.
    pub fn current_metadata(&self) -> Option<&ParameterMetadata> {
        match &self.state {
            MetadataState::Ready(Some(info)) => Some(info),
            _ => None,
        }
    }
}
