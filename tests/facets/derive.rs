//! Facet domain derivation.

use crate::common::{
    assert_domain_well_formed, make_article, make_full_article, make_undated_article,
    sample_results,
};
use refine::{derive_facets, FacetDomain, FilterSelection, YearBounds, YearRange};

fn set(values: &[&str]) -> std::collections::BTreeSet<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[test]
fn test_two_dated_articles() {
    let results = vec![
        make_article("A", "2019-05-01", &["Smith", "Lee"]),
        make_article("B", "2021-02-03", &["Lee"]),
    ];

    let domain = derive_facets(&results);
    assert_eq!(domain.year_bounds, YearBounds { min: 2019, max: 2021 });
    assert_eq!(domain.authors, set(&["Lee", "Smith"]));
    assert_domain_well_formed(&domain);
}

#[test]
fn test_no_year_parses() {
    let results = vec![
        make_article("A", "unknown", &["X"]),
        make_undated_article("B", &[]),
    ];

    let domain = derive_facets(&results);
    assert_eq!(domain.year_bounds, YearBounds::NONE_PARSED);
    assert!(!domain.year_bounds.is_usable());
    assert_eq!(domain.authors, set(&["X"]));

    // Year criterion must not exclude anything when bounds are unusable
    let selection = FilterSelection::unrestricted(&domain);
    assert_eq!(selection.year_range, YearRange::ANY);
}

#[test]
fn test_empty_results_give_default_domain() {
    let domain = derive_facets(&[]);
    assert_eq!(domain, FacetDomain::default());
    assert_eq!(domain.year_bounds, YearBounds::DEFAULT);
    assert!(domain.has_no_categories());
}

#[test]
fn test_sample_page() {
    let domain = derive_facets(&sample_results());

    assert_eq!(domain.year_bounds, YearBounds { min: 2018, max: 2021 });
    assert_eq!(
        domain.authors,
        set(&["Huang, C.", "Li, Q.", "Yang, X.", "Zhou, P."])
    );
    assert_eq!(domain.journals, set(&["NEJM", "Nature", "The Lancet"]));
    assert_eq!(domain.sources, set(&["Elsevier", "Medline", "PMC", "WHO"]));
    assert_domain_well_formed(&domain);
}

#[test]
fn test_order_does_not_matter() {
    let mut results = sample_results();
    let forward = derive_facets(&results);
    results.reverse();
    assert_eq!(derive_facets(&results), forward);
}

#[test]
fn test_short_and_padded_dates_are_ignored() {
    let results = vec![
        make_article("A", "99", &[]),
        make_article("B", " 2020", &[]),
        make_article("C", "2017x", &[]),
    ];
    let domain = derive_facets(&results);
    assert_eq!(domain.year_bounds, YearBounds { min: 2017, max: 2017 });
}

#[test]
fn test_missing_and_empty_categories_contribute_nothing() {
    let results = vec![
        make_full_article("A", Some("2020"), &[""], Some(""), None),
        make_full_article("B", Some("2020"), &[], None, Some("")),
    ];
    let domain = derive_facets(&results);
    assert!(domain.has_no_categories());
    assert_eq!(domain.year_bounds, YearBounds { min: 2020, max: 2020 });
}

#[cfg(feature = "parallel")]
#[test]
fn test_large_page_matches_sequential_fold() {
    use refine::{derive_facets_parallel, FacetAccumulator, PARALLEL_THRESHOLD};

    let results: Vec<_> = (0..PARALLEL_THRESHOLD + 17)
        .map(|i| {
            let year = format!("{}-01-01", 1990 + (i % 33));
            let author = format!("Author {}", i % 101);
            make_full_article(
                &i.to_string(),
                Some(&year),
                &[&author],
                Some(&format!("Journal {}", i % 7)),
                None,
            )
        })
        .collect();

    let mut acc = FacetAccumulator::new();
    for article in &results {
        acc.observe(article);
    }
    let sequential = acc.finish();

    assert_eq!(derive_facets(&results), sequential);
    assert_eq!(derive_facets_parallel(&results), sequential);
    assert_eq!(sequential.year_bounds, YearBounds { min: 1990, max: 2022 });
    assert_eq!(sequential.authors.len(), 101);
}
