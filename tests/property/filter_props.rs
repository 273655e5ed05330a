//! Properties of result filtering.

use super::{name_strategy, results_strategy};
use proptest::prelude::*;
use refine::{
    derive_facets, filter_indices, filter_results, CategoryFilter, FilterSelection, YearRange,
};

/// A selection built from random subsets of the pools the results use.
fn selection_strategy() -> impl Strategy<Value = FilterSelection> {
    (
        prop::option::of((1985i32..2030, 1985i32..2030)),
        prop::collection::vec(name_strategy(), 0..3),
        prop::collection::vec(
            prop::sample::select(vec!["Nature", "The Lancet", "NEJM"]),
            0..2,
        ),
        prop::collection::vec(prop::sample::select(vec!["PMC", "WHO"]), 0..2),
    )
        .prop_map(|(years, authors, journals, sources)| FilterSelection {
            year_range: years.map_or(YearRange::ANY, |(a, b)| YearRange::new(a, b)),
            authors: CategoryFilter::from_values(authors.into_iter().filter(|a| !a.is_empty())),
            journals: CategoryFilter::from_values(journals),
            sources: CategoryFilter::from_values(sources),
        })
}

proptest! {
    #[test]
    fn prop_unrestricted_keeps_everything(results in results_strategy()) {
        let domain = derive_facets(&results);
        let selection = FilterSelection::unrestricted(&domain);
        prop_assert_eq!(filter_results(&results, &selection), results);
    }

    #[test]
    fn prop_filter_is_ordered_subsequence(
        results in results_strategy(),
        selection in selection_strategy(),
    ) {
        let indices = filter_indices(&results, &selection);
        prop_assert!(indices.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(indices.iter().all(|&i| i < results.len()));

        let visible = filter_results(&results, &selection);
        prop_assert_eq!(visible.len(), indices.len());
        for (article, &i) in visible.iter().zip(&indices) {
            prop_assert_eq!(article, &results[i]);
        }
    }

    #[test]
    fn prop_filter_is_idempotent(
        results in results_strategy(),
        selection in selection_strategy(),
    ) {
        let once = filter_results(&results, &selection);
        let twice = filter_results(&once, &selection);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_kept_iff_matches(
        results in results_strategy(),
        selection in selection_strategy(),
    ) {
        let indices = filter_indices(&results, &selection);
        for (i, article) in results.iter().enumerate() {
            prop_assert_eq!(indices.contains(&i), selection.matches(article));
        }
    }

    #[test]
    fn prop_undated_never_excluded_by_years(
        results in results_strategy(),
        a in 1985i32..2030,
        b in 1985i32..2030,
    ) {
        let selection = FilterSelection {
            year_range: YearRange::new(a, b),
            ..FilterSelection::default()
        };
        let visible = filter_results(&results, &selection);
        let lo = a.min(b);
        let hi = a.max(b);

        for article in &results {
            let kept = visible.contains(article);
            match article.year() {
                None => prop_assert!(kept),
                Some(y) => prop_assert_eq!(kept, lo <= y && y <= hi),
            }
        }
    }

    #[test]
    fn prop_restricting_authors_excludes_authorless(
        results in results_strategy(),
        author in name_strategy().prop_filter("non-empty", |a| !a.is_empty()),
    ) {
        let selection = FilterSelection {
            authors: CategoryFilter::from_values([author.clone()]),
            ..FilterSelection::default()
        };
        for article in filter_results(&results, &selection) {
            prop_assert!(article.authors.contains(&author));
        }
    }

    #[test]
    fn prop_adding_a_journal_restriction_never_grows(
        results in results_strategy(),
        selection in selection_strategy(),
    ) {
        let mut open = selection;
        open.journals = CategoryFilter::Unrestricted;
        let mut narrowed = open.clone();
        narrowed.journals = CategoryFilter::from_values(["Nature"]);

        let wide = filter_indices(&results, &open);
        let narrow = filter_indices(&results, &narrowed);
        prop_assert!(narrow.iter().all(|i| wide.contains(i)));
    }
}
