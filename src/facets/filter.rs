// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result filtering: a stable, pure predicate pass.
//!
//! Nothing is re-sorted and nothing is cached. The filter is cheap enough to
//! rerun on every selection change, and being a plain function of
//! `(results, selection)` makes it idempotent for free.

use super::selection::FilterSelection;
use crate::contracts::check_strictly_increasing;
use crate::types::Article;

/// Indices of the results that pass `selection`, ascending.
pub fn filter_indices(results: &[Article], selection: &FilterSelection) -> Vec<usize> {
    let indices: Vec<usize> = results
        .iter()
        .enumerate()
        .filter(|(_, article)| selection.matches(article))
        .map(|(i, _)| i)
        .collect();
    check_strictly_increasing(&indices, results.len());
    indices
}

/// Borrowing view of the results that pass `selection`, in input order.
pub fn visible<'a>(
    results: &'a [Article],
    selection: &'a FilterSelection,
) -> impl Iterator<Item = &'a Article> + 'a {
    results.iter().filter(move |article| selection.matches(article))
}

/// The results that pass `selection`, in input order.
///
/// # Example
///
/// ```
/// use refine::{derive_facets, filter_results, Article, FilterSelection, YearRange};
///
/// let results = vec![
///     Article { id: "a".into(), publish_time: Some("2020-01-01".into()), ..Article::default() },
///     Article { id: "b".into(), publish_time: Some("2019-06-01".into()), ..Article::default() },
/// ];
///
/// // Freshly reset selection shows everything
/// let selection = FilterSelection::unrestricted(&derive_facets(&results));
/// assert_eq!(filter_results(&results, &selection), results);
///
/// let only_2020 = FilterSelection { year_range: YearRange::new(2020, 2020), ..selection };
/// let visible = filter_results(&results, &only_2020);
/// assert_eq!(visible.len(), 1);
/// assert_eq!(visible[0].id, "a");
/// ```
pub fn filter_results(results: &[Article], selection: &FilterSelection) -> Vec<Article> {
    filter_indices(results, selection)
        .into_iter()
        .map(|i| results[i].clone())
        .collect()
}
