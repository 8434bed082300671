//! Explicit selections and stat reconciliation

use crate::stats::{StatKind, StatRegistry};

use super::ParameterQueryEditor;
use super::query::Query;

/// Host-panel callbacks.
///
/// The editor always pairs the two: every committed query is followed by
/// exactly one run request.
pub trait EditorHost {
    fn commit_query(&mut self, query: Query);
    fn run_query(&mut self);
}

impl<R: StatRegistry> ParameterQueryEditor<R> {
    /// Commit an explicit parameter selection from the input widget.
    ///
    /// An empty selection counts as cleared. For samples queries with a
    /// parameter set, the requested stats are filtered to what the
    /// parameter supports when its metadata is known (unknown metadata
    /// leaves them untouched), and repaired to the registry default when
    /// nothing survives.
    pub fn select_parameter(
        &self,
        parameter: Option<String>,
        query: &Query,
        host: &mut impl EditorHost,
    ) {
        let mut update = query.clone();
        update.parameter = parameter.filter(|p| !p.is_empty());
        if update.query_type.wants_samples() && update.parameter.is_some() {
            let info = self.current_metadata();
            let stats = update.stats.get_or_insert_with(Vec::new);
            if let Some(info) = info {
                stats.retain(|kind| self.registry.is_valid(*kind, info));
            }
            if stats.is_empty() {
                let fallback = self.registry.default_stat(info);
                log::debug!("selection left no valid stats, repairing to {fallback}");
                stats.push(fallback);
            }
        }
        host.commit_query(update);
        host.run_query();
    }

    /// Commit an explicit stats selection.
    ///
    /// Direct user intent is trusted: the sequence replaces the query's
    /// stats verbatim, with no validity filtering.
    pub fn select_stats(&self, stats: Vec<StatKind>, query: &Query, host: &mut impl EditorHost) {
        let mut update = query.clone();
        update.stats = Some(stats);
        host.commit_query(update);
        host.run_query();
    }
}

#[cfg(test)]
#[path = "reconcile_tests.rs"]
mod reconcile_tests;
