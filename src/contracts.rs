// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the facet engine.
//!
//! Debug-mode assertions for the properties the engine promises its callers:
//!
//! 1. **Zero-cost in release builds** (`debug_assert!` only)
//! 2. **Early failure** during development and under `cargo test`
//!
//! | Contract Function             | Property                                      |
//! |-------------------------------|-----------------------------------------------|
//! | `check_domain_well_formed`    | No empty strings in facet sets, bounds shape  |
//! | `check_strictly_increasing`   | Filter output is an in-order subsequence      |
//! | `check_no_empty_restriction`  | An empty categorical selection is unrepresentable |
//!
//! # Usage
//!
//! ```ignore
//! use refine::contracts::*;
//!
//! // In debug builds, this panics if the invariant is violated
//! check_strictly_increasing(&indices, results.len());
//! ```

use crate::facets::{CategoryFilter, FacetDomain, FilterSelection, YearBounds};

// ============================================================================
// DOMAIN CONTRACTS
// ============================================================================

/// Check that a derived domain is well-formed.
///
/// # Panics (debug builds only)
/// Panics if any facet set contains the empty string, or if the year bounds
/// are inverted without being the no-parseable-year sentinel.
#[inline]
pub fn check_domain_well_formed(domain: &FacetDomain) {
    debug_assert!(
        !domain.authors.contains(""),
        "INVARIANT VIOLATED: empty author in facet domain"
    );
    debug_assert!(
        !domain.journals.contains(""),
        "INVARIANT VIOLATED: empty journal in facet domain"
    );
    debug_assert!(
        !domain.sources.contains(""),
        "INVARIANT VIOLATED: empty source in facet domain"
    );
    debug_assert!(
        domain.year_bounds.is_usable() || domain.year_bounds == YearBounds::NONE_PARSED,
        "INVARIANT VIOLATED: year bounds {:?} inverted but not the sentinel",
        domain.year_bounds
    );
}

// ============================================================================
// FILTER CONTRACTS
// ============================================================================

/// Check that filter output indices form an in-order subsequence of `0..len`.
///
/// Strictly increasing rules out reordering and duplicates; the upper bound
/// rules out insertions.
///
/// # Panics (debug builds only)
#[inline]
pub fn check_strictly_increasing(indices: &[usize], len: usize) {
    debug_assert!(
        indices.windows(2).all(|w| w[0] < w[1]),
        "INVARIANT VIOLATED: filter output not strictly increasing: {:?}",
        indices
    );
    debug_assert!(
        indices.last().map_or(true, |&last| last < len),
        "INVARIANT VIOLATED: filter index {:?} out of bounds for {} results",
        indices.last(),
        len
    );
}

// ============================================================================
// SELECTION CONTRACTS
// ============================================================================

/// Check that no categorical facet holds an empty restriction.
///
/// # Panics (debug builds only)
#[inline]
pub fn check_no_empty_restriction(selection: &FilterSelection) {
    for (name, filter) in [
        ("authors", &selection.authors),
        ("journals", &selection.journals),
        ("sources", &selection.sources),
    ] {
        debug_assert!(
            !matches!(filter, CategoryFilter::RestrictedTo(set) if set.is_empty()),
            "INVARIANT VIOLATED: empty restriction on {}",
            name
        );
    }
}
