//! Leading+trailing debounce for incremental search
//!
//! Fast typing must not produce one catalog request per keystroke. The
//! [`Debouncer`] is an explicit timer state machine driven by the host
//! event loop: it fires on the first call of a burst (leading edge) and,
//! when more calls arrive inside the window, once more after the burst
//! settles (trailing edge). [`DebouncedSearchSession`] wraps the options
//! search with that policy and keys every result by the input that
//! produced it, so callers can drop completions that no longer match.

use std::time::{Duration, Instant};

use crate::catalog::{Catalog, CatalogError};
use crate::suggest::{SelectableOption, SuggestionProvider};

/// Default quiet window between keystroke bursts
pub const DEFAULT_WINDOW: Duration = Duration::from_millis(300);

/// Explicit leading+trailing debounce timer.
///
/// `call` reports each raw invocation; `poll` must be pumped by the host
/// loop to collect the trailing fire. Each call inside the window restarts
/// the timer and replaces the pending trailing input, superseding it
/// rather than cancelling anything in flight.
#[derive(Debug)]
pub struct Debouncer {
    window: Duration,
    /// Most recent call; `None` while idle
    last_call: Option<Instant>,
    /// Candidate input for the trailing fire
    pending: Option<String>,
}

impl Debouncer {
    pub fn new(window: Duration) -> Self {
        Debouncer {
            window,
            last_call: None,
            pending: None,
        }
    }

    /// Report an invocation at `now`. Returns the input to run immediately
    /// when this is the first call of a quiet period.
    ///
    /// If the window elapsed without `poll` collecting the trailing input,
    /// that input is stale by construction and is dropped; the call starts
    /// a new burst.
    pub fn call(&mut self, input: &str, now: Instant) -> Option<String> {
        let idle = match self.last_call {
            None => true,
            Some(last) => now.duration_since(last) >= self.window,
        };
        self.last_call = Some(now);
        if idle {
            self.pending = None;
            log::debug!("debounce leading fire: {input:?}");
            Some(input.to_string())
        } else {
            self.pending = Some(input.to_string());
            None
        }
    }

    /// Collect the trailing fire once the window has elapsed since the
    /// last call. `None` while the burst is live, and when no call
    /// followed the leading fire.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        let last = self.last_call?;
        if now.duration_since(last) < self.window {
            return None;
        }
        let fired = self.pending.take();
        if let Some(input) = &fired {
            // Trailing fire closes the burst; the next call leads again
            self.last_call = None;
            log::debug!("debounce trailing fire: {input:?}");
        }
        fired
    }

    pub fn window(&self) -> Duration {
        self.window
    }
}

/// One debounced fire, keyed by the input that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    input: String,
}

impl SearchTicket {
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// Search results still keyed by their originating input
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    pub input: String,
    pub options: Vec<SelectableOption>,
}

/// Debounced options search for a selector widget.
///
/// The session tracks the live input text. A superseded fire is never
/// aborted; it just loses its audience: [`is_current`] tells the caller
/// whether an outcome still matches what the user sees, and stale
/// outcomes should be dropped instead of applied.
///
/// [`is_current`]: DebouncedSearchSession::is_current
pub struct DebouncedSearchSession<C> {
    provider: SuggestionProvider<C>,
    debouncer: Debouncer,
    live_input: String,
}

impl<C: Catalog> DebouncedSearchSession<C> {
    pub fn new(provider: SuggestionProvider<C>, window: Duration) -> Self {
        DebouncedSearchSession {
            provider,
            debouncer: Debouncer::new(window),
            live_input: String::new(),
        }
    }

    /// Record a keystroke at `now`; returns a ticket when the leading
    /// edge fires.
    pub fn input(&mut self, text: &str, now: Instant) -> Option<SearchTicket> {
        self.live_input = text.to_string();
        self.debouncer
            .call(text, now)
            .map(|input| SearchTicket { input })
    }

    /// Pump the trailing edge from the host loop.
    pub fn poll(&mut self, now: Instant) -> Option<SearchTicket> {
        self.debouncer
            .poll(now)
            .map(|input| SearchTicket { input })
    }

    /// Run the catalog search for a fired ticket.
    pub async fn search(&self, ticket: &SearchTicket) -> Result<SearchOutcome, CatalogError> {
        let options = self.provider.options(&ticket.input).await?;
        Ok(SearchOutcome {
            input: ticket.input.clone(),
            options,
        })
    }

    /// Whether an outcome still matches the live input. Stale outcomes
    /// must not overwrite newer ones.
    pub fn is_current(&self, outcome: &SearchOutcome) -> bool {
        outcome.input == self.live_input
    }
}

#[cfg(test)]
#[path = "debounce_tests.rs"]
mod debounce_tests;
