//! Shared test utilities and fixtures.

#![allow(dead_code)]

use refine::{Article, FacetDomain, SearchSession, SessionState, Vertical};

// Re-export canonical test utilities from refine::testing
pub use refine::testing::{
    make_article, make_full_article, make_response, make_undated_article, sample_results,
};

// ============================================================================
// FIXTURES
// ============================================================================

/// Directory containing saved search responses.
pub const FIXTURES_DIR: &str = "data/fixtures";

/// A saved CORD-19 response for the query "masks".
pub const MASKS_FIXTURE: &str = "data/fixtures/cord19-masks.json";

// ============================================================================
// HELPERS
// ============================================================================

/// Ids of `articles`, in order.
pub fn ids<'a, I>(articles: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a Article>,
{
    articles.into_iter().map(|a| a.id.clone()).collect()
}

/// A session that has received `results` for the query "coronavirus".
pub fn session_with(results: Vec<Article>) -> SearchSession {
    let mut session = SearchSession::new();
    let request = session
        .submit("coronavirus", Vertical::Cord19)
        .expect("non-empty query should start a request");
    session.apply_response(request.token, Ok(make_response("q-test", results)));
    session
}

/// Assert that a session is showing results.
pub fn assert_ready(session: &SearchSession) {
    assert_eq!(session.state(), SessionState::Ready);
    assert!(!session.results().is_empty());
}

/// Assert every category value in `domain` is non-empty and sorted.
pub fn assert_domain_well_formed(domain: &FacetDomain) {
    for set in [&domain.authors, &domain.journals, &domain.sources] {
        assert!(set.iter().all(|v| !v.is_empty()), "empty value in {:?}", set);
        let as_vec: Vec<_> = set.iter().collect();
        let mut sorted = as_vec.clone();
        sorted.sort();
        assert_eq!(as_vec, sorted);
    }
}
