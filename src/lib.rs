// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Faceted refinement of search result sets.
//!
//! A results page gets one fully-materialized result set per query. This crate
//! derives what the user can filter on from that set, filters it on every
//! selection change, and keeps a session that only ever shows the answer to
//! the latest query.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌───────────────────┐     ┌──────────────────┐
//! │  types.rs   │────▶│ facets::derive    │────▶│ facets::filter   │
//! │ (Article,   │     │ (FacetDomain,     │     │ (FilterSelection,│
//! │  Response)  │     │  YearBounds)      │     │  CategoryFilter) │
//! └─────────────┘     └───────────────────┘     └──────────────────┘
//!        │                     │                         │
//!        ▼                     ▼                         ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                          session.rs                             │
//! │   (SearchSession: Idle → Loading → Ready | Empty, RequestToken) │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use refine::{ApplyOutcome, SearchResponse, SearchSession, SessionState, Vertical};
//!
//! let mut session = SearchSession::new();
//! let request = session.submit("masks", Vertical::Cord19).unwrap();
//!
//! // ... fetch `request.query` from the backend ...
//! let response: SearchResponse = serde_json::from_str(
//!     r#"{"query_id": "q1", "response": [
//!         {"id": "a", "authors": ["Ada"], "publish_time": "2020-04-01"},
//!         {"id": "b", "authors": ["Bo"], "publish_time": "2019-01-01"}
//!     ]}"#,
//! ).unwrap();
//!
//! assert_eq!(
//!     session.apply_response(request.token, Ok(response)),
//!     ApplyOutcome::Applied(SessionState::Ready)
//! );
//!
//! session.toggle_author("Bo");
//! let ids: Vec<_> = session.visible().map(|a| a.id.as_str()).collect();
//! assert_eq!(ids, vec!["b"]);
//! ```

pub mod contracts;
pub mod error;
mod facets;
pub mod load;
mod session;
pub mod testing;
mod types;

#[cfg(feature = "wasm")]
mod wasm;

// Re-exports for public API
pub use error::{LoadError, RetrievalError};
#[cfg(feature = "parallel")]
pub use facets::{derive_facets_parallel, PARALLEL_THRESHOLD};
pub use facets::{
    derive_facets, filter_indices, filter_results, visible, CategoryFilter, FacetAccumulator,
    FacetDomain, FilterSelection, YearBounds, YearRange,
};
pub use load::{load_response, parse_response};
pub use session::{
    ApplyOutcome, PageView, RequestToken, SearchRequest, SearchSession, SessionState,
};
pub use types::{parse_year, Article, SearchResponse, UnknownVertical, Vertical};

#[cfg(feature = "wasm")]
pub use wasm::RefineSession;
