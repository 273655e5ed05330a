// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The page session: one query, one result set, one selection.
//!
//! ```text
//!            submit(q ≠ "")               response ok, ≥1 result
//!   Idle ───────────────────▶ Loading ─────────────────────────▶ Ready
//!    ▲                         │  ▲                                │
//!    │                         │  └──── submit / set_vertical ─────┤
//!    │ clear / submit("")      │ failure or 0 results              │
//!    └──────── (any) ──────────┴──────────▶ Empty ◀────────────────┘
//!                                                  (via Loading)
//! ```
//!
//! The fetch happens outside. [`SearchSession::submit`] hands back a
//! [`SearchRequest`] carrying a fresh [`RequestToken`]; the caller performs the
//! request and reports back through [`SearchSession::apply_response`] with the
//! same token. Only the most recently issued token is accepted. A late answer
//! to a superseded query is dropped and touches nothing, so it can't clobber
//! newer results or reset a selection the user has already started editing.
//!
//! Every selection edit recomputes the visible subset exactly once. The facet
//! domain is only recomputed when a new result set is applied.

use crate::error::RetrievalError;
use crate::facets::{
    derive_facets, filter_indices, FacetDomain, FilterSelection, YearRange,
};
use crate::contracts::check_no_empty_restriction;
use crate::types::{Article, SearchResponse, Vertical};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies one outbound search request. Monotonically increasing per session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn from_raw(raw: u64) -> RequestToken {
        RequestToken(raw)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RequestToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What the caller must fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchRequest {
    pub token: RequestToken,
    /// Query as sent to the backend (lowercased).
    pub query: String,
    pub vertical: Vertical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SessionState {
    /// No query.
    Idle,
    /// A request is in flight.
    Loading,
    /// Results, domain and selection are established.
    Ready,
    /// The last request failed or returned nothing.
    Empty,
}

/// Result of [`SearchSession::apply_response`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// The response was current and the session moved to this state.
    Applied(SessionState),
    /// The token did not match the active request; nothing changed.
    Stale,
}

/// What the page should render right now.
#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum PageView<'a> {
    /// No query: landing content.
    Home,
    /// Request in flight.
    Loading,
    /// Nothing to show, either because nothing came back or because the
    /// selection filtered everything out.
    #[serde(rename_all = "camelCase")]
    NoResults {
        /// Facet controls stay visible when the user filtered everything out,
        /// so they can widen the selection again.
        domain: Option<&'a FacetDomain>,
        /// The selection that emptied the page, alongside `domain`.
        selection: Option<&'a FilterSelection>,
    },
    #[serde(rename_all = "camelCase")]
    Results {
        query_id: &'a str,
        domain: &'a FacetDomain,
        selection: &'a FilterSelection,
        visible: Vec<&'a Article>,
    },
}

/// Session state for one results page.
#[derive(Debug, Clone)]
pub struct SearchSession {
    query: String,
    vertical: Vertical,
    state: SessionState,
    last_token: u64,
    active: Option<RequestToken>,
    query_id: String,
    results: Vec<Article>,
    domain: FacetDomain,
    selection: FilterSelection,
    visible: Vec<usize>,
}

impl Default for SearchSession {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchSession {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            vertical: Vertical::default(),
            state: SessionState::Idle,
            last_token: 0,
            active: None,
            query_id: String::new(),
            results: Vec::new(),
            domain: FacetDomain::default(),
            selection: FilterSelection::default(),
            visible: Vec::new(),
        }
    }

    // ------------------------------------------------------------------
    // Query lifecycle
    // ------------------------------------------------------------------

    /// Make `query` on `vertical` the active search.
    ///
    /// An empty query returns the session to `Idle` and yields no request.
    /// Otherwise any in-flight request is superseded, the current results are
    /// dropped, and the returned request must be fetched by the caller.
    pub fn submit(&mut self, query: &str, vertical: Vertical) -> Option<SearchRequest> {
        self.query = query.to_string();
        self.vertical = vertical;

        if query.is_empty() {
            self.clear();
            return None;
        }

        self.last_token += 1;
        let token = RequestToken(self.last_token);
        if let Some(previous) = self.active.replace(token) {
            tracing::debug!(%previous, %token, "superseding in-flight request");
        }
        self.reset_results();
        self.transition(SessionState::Loading);

        Some(SearchRequest {
            token,
            query: query.to_lowercase(),
            vertical,
        })
    }

    /// Switch collections, re-running the current query if there is one.
    pub fn set_vertical(&mut self, vertical: Vertical) -> Option<SearchRequest> {
        let query = std::mem::take(&mut self.query);
        self.submit(&query, vertical)
    }

    /// Forget the query entirely.
    pub fn clear(&mut self) {
        self.query.clear();
        if let Some(token) = self.active.take() {
            tracing::debug!(%token, "abandoning in-flight request");
        }
        self.reset_results();
        self.transition(SessionState::Idle);
    }

    /// Apply the outcome of the fetch identified by `token`.
    ///
    /// A token other than the active one is stale: it is logged and ignored.
    /// A failure or a response with zero results moves to `Empty`. Anything
    /// else derives a fresh domain, resets the selection to unrestricted, and
    /// moves to `Ready`.
    pub fn apply_response(
        &mut self,
        token: RequestToken,
        outcome: Result<SearchResponse, RetrievalError>,
    ) -> ApplyOutcome {
        if self.active != Some(token) {
            tracing::warn!(
                %token,
                active = ?self.active.map(RequestToken::get),
                "discarding stale search response"
            );
            return ApplyOutcome::Stale;
        }
        self.active = None;

        match outcome {
            Ok(response) if !response.response.is_empty() => {
                self.query_id = response.query_id;
                self.results = response.response;
                self.domain = derive_facets(&self.results);
                self.selection = FilterSelection::unrestricted(&self.domain);
                self.refilter();
                tracing::info!(
                    %token,
                    results = self.results.len(),
                    authors = self.domain.authors.len(),
                    journals = self.domain.journals.len(),
                    sources = self.domain.sources.len(),
                    "search results ready"
                );
                self.transition(SessionState::Ready);
            }
            Ok(response) => {
                self.reset_results();
                self.query_id = response.query_id;
                tracing::info!(%token, "search returned no results");
                self.transition(SessionState::Empty);
            }
            Err(err) => {
                self.reset_results();
                tracing::warn!(%token, error = %err, "search request failed");
                self.transition(SessionState::Empty);
            }
        }
        ApplyOutcome::Applied(self.state)
    }

    fn reset_results(&mut self) {
        self.query_id.clear();
        self.results.clear();
        self.domain = FacetDomain::default();
        self.selection = FilterSelection::unrestricted(&self.domain);
        self.visible.clear();
    }

    fn transition(&mut self, next: SessionState) {
        if self.state != next {
            tracing::debug!(from = ?self.state, to = ?next, "session transition");
        }
        self.state = next;
    }

    // ------------------------------------------------------------------
    // Selection editing
    // ------------------------------------------------------------------

    /// Restrict to years `[a, b]` (inclusive, either order).
    pub fn set_year_range(&mut self, a: i32, b: i32) {
        self.selection.year_range = YearRange::new(a, b);
        self.refilter();
    }

    /// Returns whether `author` is selected afterwards.
    pub fn toggle_author(&mut self, author: &str) -> bool {
        let selected = self.selection.authors.toggle(author);
        self.refilter();
        selected
    }

    /// Returns whether `journal` is selected afterwards.
    pub fn toggle_journal(&mut self, journal: &str) -> bool {
        let selected = self.selection.journals.toggle(journal);
        self.refilter();
        selected
    }

    /// Returns whether `source` is selected afterwards.
    pub fn toggle_source(&mut self, source: &str) -> bool {
        let selected = self.selection.sources.toggle(source);
        self.refilter();
        selected
    }

    pub fn clear_authors(&mut self) {
        self.selection.authors.clear();
        self.refilter();
    }

    pub fn clear_journals(&mut self) {
        self.selection.journals.clear();
        self.refilter();
    }

    pub fn clear_sources(&mut self) {
        self.selection.sources.clear();
        self.refilter();
    }

    /// Replace the whole selection at once. Empty restrictions are read as
    /// unrestricted.
    pub fn set_selection(&mut self, selection: FilterSelection) {
        self.selection = selection.normalized();
        self.refilter();
    }

    /// Back to the unrestricted selection for the current domain.
    pub fn reset_selection(&mut self) {
        self.selection = FilterSelection::unrestricted(&self.domain);
        self.refilter();
    }

    fn refilter(&mut self) {
        check_no_empty_restriction(&self.selection);
        self.visible = filter_indices(&self.results, &self.selection);
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn vertical(&self) -> Vertical {
        self.vertical
    }

    /// Token of the request currently in flight, if any.
    pub fn active_request(&self) -> Option<RequestToken> {
        self.active
    }

    pub fn query_id(&self) -> &str {
        &self.query_id
    }

    /// The full, unfiltered result set.
    pub fn results(&self) -> &[Article] {
        &self.results
    }

    pub fn domain(&self) -> &FacetDomain {
        &self.domain
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    /// Results passing the current selection, in original order.
    pub fn visible(&self) -> impl Iterator<Item = &Article> {
        self.visible.iter().map(|&i| &self.results[i])
    }

    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    /// Map the session to what the page renders.
    pub fn view(&self) -> PageView<'_> {
        match self.state {
            SessionState::Idle => PageView::Home,
            SessionState::Loading => PageView::Loading,
            SessionState::Empty => PageView::NoResults {
                domain: None,
                selection: None,
            },
            SessionState::Ready if self.visible.is_empty() => PageView::NoResults {
                domain: Some(&self.domain),
                selection: Some(&self.selection),
            },
            SessionState::Ready => PageView::Results {
                query_id: &self.query_id,
                domain: &self.domain,
                selection: &self.selection,
                visible: self.visible().collect(),
            },
        }
    }
}
