// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Facet derivation: one pass over the results, four accumulators.
//!
//! A result with a malformed `publish_time` still counts for authors, journal
//! and source. It just doesn't move the year bounds.

use super::domain::{FacetDomain, YearBounds};
use crate::contracts::check_domain_well_formed;
use crate::types::Article;
use std::collections::BTreeSet;

/// Result sets at least this large are derived on the rayon pool.
///
/// Page-sized responses (tens to low hundreds) are faster single-threaded.
#[cfg(feature = "parallel")]
pub const PARALLEL_THRESHOLD: usize = 4096;

/// Running state of a facet derivation.
///
/// Accumulators merge associatively, which is what lets the parallel path
/// fold chunks independently and reduce them in any order.
#[derive(Debug, Clone)]
pub struct FacetAccumulator {
    year_bounds: YearBounds,
    authors: BTreeSet<String>,
    journals: BTreeSet<String>,
    sources: BTreeSet<String>,
}

impl FacetAccumulator {
    pub fn new() -> Self {
        Self {
            year_bounds: YearBounds::NONE_PARSED,
            authors: BTreeSet::new(),
            journals: BTreeSet::new(),
            sources: BTreeSet::new(),
        }
    }

    /// Fold one result into the running facets.
    pub fn observe(&mut self, article: &Article) {
        if let Some(year) = article.year() {
            self.year_bounds.include(year);
        }

        for author in article.authors.iter().filter(|a| !a.is_empty()) {
            // Lookup first so repeated names don't allocate
            if !self.authors.contains(author) {
                self.authors.insert(author.clone());
            }
        }
        insert_non_empty(&mut self.journals, article.journal.as_deref());
        insert_non_empty(&mut self.sources, article.source.as_deref());
    }

    /// Combine two partial derivations.
    pub fn merge(mut self, other: FacetAccumulator) -> FacetAccumulator {
        self.year_bounds = self.year_bounds.merge(other.year_bounds);
        self.authors.extend(other.authors);
        self.journals.extend(other.journals);
        self.sources.extend(other.sources);
        self
    }

    pub fn finish(self) -> FacetDomain {
        FacetDomain {
            year_bounds: self.year_bounds,
            authors: self.authors,
            journals: self.journals,
            sources: self.sources,
        }
    }
}

impl Default for FacetAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

fn insert_non_empty(set: &mut BTreeSet<String>, value: Option<&str>) {
    if let Some(value) = value.filter(|v| !v.is_empty()) {
        // Same as above: only allocate for unseen values
        if !set.contains(value) {
            set.insert(value.to_string());
        }
    }
}

/// Derive the facet domain of a result set.
///
/// An empty input yields [`FacetDomain::default`], whose year bounds are
/// `(0, 0)`. A non-empty input where no result has a parseable year yields
/// [`YearBounds::NONE_PARSED`] instead. The two cases are deliberately
/// distinct; callers can tell "nothing came back" from "nothing was dated".
///
/// # Example
///
/// ```
/// use refine::{derive_facets, Article, YearBounds};
///
/// let results = vec![
///     Article {
///         publish_time: Some("2020-01-01".into()),
///         authors: vec!["A".into()],
///         journal: Some("J1".into()),
///         ..Article::default()
///     },
///     Article {
///         publish_time: Some("2019-06-01".into()),
///         authors: vec!["B".into()],
///         journal: Some("J2".into()),
///         ..Article::default()
///     },
/// ];
///
/// let domain = derive_facets(&results);
/// assert_eq!(domain.year_bounds, YearBounds { min: 2019, max: 2020 });
/// assert_eq!(domain.authors.len(), 2);
/// assert!(domain.sources.is_empty());
/// ```
pub fn derive_facets(results: &[Article]) -> FacetDomain {
    if results.is_empty() {
        return FacetDomain::default();
    }

    #[cfg(feature = "parallel")]
    if results.len() >= PARALLEL_THRESHOLD {
        return derive_facets_parallel(results);
    }

    let mut acc = FacetAccumulator::new();
    for article in results {
        acc.observe(article);
    }
    let domain = acc.finish();
    check_domain_well_formed(&domain);
    domain
}

/// [`derive_facets`] on the rayon pool. Same output, any input size.
#[cfg(feature = "parallel")]
pub fn derive_facets_parallel(results: &[Article]) -> FacetDomain {
    use rayon::prelude::*;

    if results.is_empty() {
        return FacetDomain::default();
    }

    let domain = results
        .par_iter()
        .fold(FacetAccumulator::new, |mut acc, article| {
            acc.observe(article);
            acc
        })
        .reduce(FacetAccumulator::new, FacetAccumulator::merge)
        .finish();
    check_domain_well_formed(&domain);
    domain
}
