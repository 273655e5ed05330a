//! Filtering a result page by a selection.

use crate::common::{ids, make_article, make_full_article, make_undated_article, sample_results};
use refine::{
    derive_facets, filter_indices, filter_results, visible, CategoryFilter, FilterSelection,
    YearRange,
};
use std::collections::BTreeSet;

#[test]
fn test_year_and_author_conjunction() {
    let results = vec![
        make_article("A", "2019", &["Smith"]),
        make_article("B", "2021", &["Lee"]),
        make_article("C", "2020", &["Smith", "Lee"]),
    ];
    let selection = FilterSelection {
        year_range: YearRange::new(2020, 2021),
        authors: CategoryFilter::from_values(["Smith"]),
        ..FilterSelection::default()
    };

    assert_eq!(ids(&filter_results(&results, &selection)), vec!["C"]);
    assert_eq!(filter_indices(&results, &selection), vec![2]);
}

#[test]
fn test_unrestricted_selection_keeps_everything() {
    let results = sample_results();
    let domain = derive_facets(&results);
    let selection = FilterSelection::unrestricted(&domain);

    assert_eq!(filter_results(&results, &selection), results);
}

#[test]
fn test_undated_articles_survive_year_restriction() {
    let results = sample_results();
    let selection = FilterSelection {
        year_range: YearRange::new(2021, 2021),
        ..FilterSelection::default()
    };

    // r2 ("unknown") and r5 (no date) have no year
    assert_eq!(ids(visible(&results, &selection)), vec!["r2", "r4", "r5"]);
}

#[test]
fn test_author_restriction_excludes_authorless() {
    let results = vec![
        make_undated_article("none", &[]),
        make_undated_article("blank", &[""]),
        make_undated_article("li", &["Li, Q."]),
    ];
    let selection = FilterSelection {
        authors: CategoryFilter::from_values(["Li, Q."]),
        ..FilterSelection::default()
    };
    assert_eq!(ids(&filter_results(&results, &selection)), vec!["li"]);
}

#[test]
fn test_journal_restriction_excludes_missing_journal() {
    let results = sample_results();
    let selection = FilterSelection {
        journals: CategoryFilter::from_values(["Nature", "NEJM"]),
        ..FilterSelection::default()
    };
    assert_eq!(ids(&filter_results(&results, &selection)), vec!["r0", "r4", "r5"]);
}

#[test]
fn test_source_restriction_excludes_missing_source() {
    let results = sample_results();
    let selection = FilterSelection {
        sources: CategoryFilter::from_values(["PMC"]),
        ..FilterSelection::default()
    };
    assert_eq!(ids(&filter_results(&results, &selection)), vec!["r0", "r3"]);
}

#[test]
fn test_all_criteria_compose() {
    let results = sample_results();
    let selection = FilterSelection {
        year_range: YearRange::new(2019, 2020),
        authors: CategoryFilter::from_values(["Huang, C.", "Zhou, P."]),
        journals: CategoryFilter::from_values(["Nature"]),
        sources: CategoryFilter::from_values(["PMC"]),
    };
    assert_eq!(ids(&filter_results(&results, &selection)), vec!["r0"]);
}

#[test]
fn test_value_outside_domain_matches_nothing() {
    let results = sample_results();
    let selection = FilterSelection {
        authors: CategoryFilter::from_values(["Nobody"]),
        ..FilterSelection::default()
    };
    assert!(filter_results(&results, &selection).is_empty());
}

#[test]
fn test_year_range_is_inclusive_at_both_ends() {
    let results = vec![
        make_full_article("lo", Some("2019-01-01"), &[], None, None),
        make_full_article("mid", Some("2020-06-01"), &[], None, None),
        make_full_article("hi", Some("2021-12-31"), &[], None, None),
        make_full_article("out", Some("2022-01-01"), &[], None, None),
    ];
    let selection = FilterSelection {
        year_range: YearRange::new(2021, 2019),
        ..FilterSelection::default()
    };
    assert_eq!(ids(&filter_results(&results, &selection)), vec!["lo", "mid", "hi"]);
}

#[test]
fn test_hand_built_empty_restriction_keeps_everything() {
    let results = sample_results();
    let selection = FilterSelection {
        authors: CategoryFilter::RestrictedTo(BTreeSet::new()),
        ..FilterSelection::default()
    };
    assert_eq!(filter_results(&results, &selection).len(), results.len());
    assert!(selection.is_categorically_unrestricted());
}
