// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The facet engine: what can be filtered, and what survives the filter.
//!
//! Two pure functions carry everything. [`derive_facets`] reads a result set
//! once and reports the year bounds and the distinct authors, journals and
//! sources in it. [`filter_results`] takes the same result set plus the user's
//! [`FilterSelection`] and returns the visible subsequence.
//!
//! The one contract worth memorizing: an empty categorical selection means
//! "no restriction". [`CategoryFilter`] makes that a type instead of a
//! convention, so there is no way to ask for "authors in {}" and get nothing.

mod derive;
mod domain;
mod filter;
mod selection;

pub use derive::*;
pub use domain::*;
pub use filter::*;
pub use selection::*;
