//! Reading saved search responses.
//!
//! Accepts either the backend's envelope (`{"query_id": ..., "response": [...]}`)
//! or a bare JSON array of articles, which is what people usually paste out
//! of the browser's network tab.

use crate::error::LoadError;
use crate::types::{Article, SearchResponse};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Deserialize)]
#[serde(untagged)]
enum ResponseFile {
    Envelope(SearchResponse),
    Bare(Vec<Article>),
}

/// Parse a search response from JSON text.
pub fn parse_response(json: &str) -> Result<SearchResponse, serde_json::Error> {
    Ok(match serde_json::from_str::<ResponseFile>(json)? {
        ResponseFile::Envelope(response) => response,
        ResponseFile::Bare(response) => SearchResponse {
            query_id: String::new(),
            response,
        },
    })
}

/// Load a search response from a JSON file.
pub fn load_response(path: &Path) -> Result<SearchResponse, LoadError> {
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let response = parse_response(&content).map_err(|source| LoadError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(
        path = %path.display(),
        results = response.response.len(),
        query_id = %response.query_id,
        "loaded search response"
    );
    Ok(response)
}
