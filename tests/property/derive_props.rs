//! Properties of facet derivation.

use super::results_strategy;
use proptest::prelude::*;
use refine::{derive_facets, parse_year, FacetAccumulator, YearBounds};

proptest! {
    #[test]
    fn prop_derivation_ignores_order(results in results_strategy(), seed in any::<u64>()) {
        let mut shuffled = results.clone();
        // Deterministic rotation plus reversal stands in for a shuffle
        if !shuffled.is_empty() {
            let k = (seed as usize) % shuffled.len();
            shuffled.rotate_left(k);
        }
        shuffled.reverse();
        prop_assert_eq!(derive_facets(&results), derive_facets(&shuffled));
    }

    #[test]
    fn prop_year_bounds_cover_every_parsed_year(results in results_strategy()) {
        let domain = derive_facets(&results);
        let years: Vec<i32> = results.iter().filter_map(|a| a.year()).collect();

        if results.is_empty() {
            prop_assert_eq!(domain.year_bounds, YearBounds::DEFAULT);
        } else if years.is_empty() {
            prop_assert_eq!(domain.year_bounds, YearBounds::NONE_PARSED);
        } else {
            prop_assert_eq!(domain.year_bounds.min, *years.iter().min().unwrap());
            prop_assert_eq!(domain.year_bounds.max, *years.iter().max().unwrap());
        }
    }

    #[test]
    fn prop_categories_are_exactly_the_nonempty_values(results in results_strategy()) {
        let domain = derive_facets(&results);

        for article in &results {
            for author in article.authors.iter().filter(|a| !a.is_empty()) {
                prop_assert!(domain.authors.contains(author));
            }
            if let Some(journal) = article.journal.as_ref().filter(|j| !j.is_empty()) {
                prop_assert!(domain.journals.contains(journal));
            }
        }
        prop_assert!(!domain.authors.contains(""));
        prop_assert!(!domain.journals.contains(""));
        prop_assert!(!domain.sources.contains(""));
        for source in &domain.sources {
            prop_assert!(results.iter().any(|a| a.source.as_ref() == Some(source)));
        }
    }

    #[test]
    fn prop_split_and_merge_equals_whole(results in results_strategy(), cut in any::<prop::sample::Index>()) {
        let at = if results.is_empty() { 0 } else { cut.index(results.len() + 1) };
        let (left, right) = results.split_at(at);

        let mut a = FacetAccumulator::new();
        left.iter().for_each(|r| a.observe(r));
        let mut b = FacetAccumulator::new();
        right.iter().for_each(|r| b.observe(r));

        let merged = a.merge(b).finish();
        if !results.is_empty() {
            prop_assert_eq!(merged, derive_facets(&results));
        }
    }

    #[test]
    fn prop_parse_year_reads_four_leading_digits(year in 0i32..10000, tail in "[-0-9A-Za-z ]{0,6}") {
        let text = format!("{:04}{}", year, tail);
        prop_assert_eq!(parse_year(Some(&text)), Some(year));
    }

    #[test]
    fn prop_parse_year_rejects_non_digit_prefix(text in "[^0-9]{1,2}[0-9]{0,6}") {
        prop_assert_eq!(parse_year(Some(&text)), None);
    }
}
