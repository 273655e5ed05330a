//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::types::{Article, SearchResponse};

/// Create a dated test article with the given authors.
///
/// This is the canonical implementation used across all tests.
pub fn make_article(id: &str, publish_time: &str, authors: &[&str]) -> Article {
    Article {
        id: id.to_string(),
        title: format!("Article {}", id),
        publish_time: Some(publish_time.to_string()),
        authors: authors.iter().map(|a| a.to_string()).collect(),
        ..Article::default()
    }
}

/// Create a test article with no `publish_time` at all.
pub fn make_undated_article(id: &str, authors: &[&str]) -> Article {
    Article {
        id: id.to_string(),
        title: format!("Article {}", id),
        publish_time: None,
        authors: authors.iter().map(|a| a.to_string()).collect(),
        ..Article::default()
    }
}

/// Create a fully populated test article.
pub fn make_full_article(
    id: &str,
    publish_time: Option<&str>,
    authors: &[&str],
    journal: Option<&str>,
    source: Option<&str>,
) -> Article {
    Article {
        id: id.to_string(),
        title: format!("Article {}", id),
        publish_time: publish_time.map(str::to_string),
        authors: authors.iter().map(|a| a.to_string()).collect(),
        journal: journal.map(str::to_string),
        source: source.map(str::to_string),
        ..Article::default()
    }
}

/// A small, realistic result page.
///
/// Years 2018..=2021 plus one `"unknown"` date; one article has no authors,
/// one has no journal, and one lists an empty author string.
pub fn sample_results() -> Vec<Article> {
    vec![
        make_full_article(
            "r0",
            Some("2020-03-17"),
            &["Zhou, P.", "Yang, X."],
            Some("Nature"),
            Some("PMC"),
        ),
        make_full_article(
            "r1",
            Some("2019-11-02"),
            &["Huang, C."],
            Some("The Lancet"),
            Some("Elsevier"),
        ),
        make_full_article("r2", Some("unknown"), &[], Some("The Lancet"), Some("WHO")),
        make_full_article(
            "r3",
            Some("2018"),
            &["Yang, X.", ""],
            None,
            Some("PMC"),
        ),
        make_full_article(
            "r4",
            Some("2021-01-05"),
            &["Li, Q."],
            Some("NEJM"),
            Some("Medline"),
        ),
        make_full_article("r5", None, &["Huang, C.", "Li, Q."], Some("Nature"), None),
    ]
}

/// Wrap results in a backend response.
pub fn make_response(query_id: &str, results: Vec<Article>) -> SearchResponse {
    SearchResponse {
        query_id: query_id.to_string(),
        response: results,
    }
}
