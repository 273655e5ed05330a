//! Error types at the engine's edges.
//!
//! The engine itself never fails: malformed years, empty result sets and
//! failed fetches all degrade to a defined state. Errors only exist where the
//! crate touches the outside world, the fetch boundary and the filesystem.

use std::path::PathBuf;
use thiserror::Error;

/// Why the external search collaborator could not deliver a result set.
///
/// The session treats every variant the same way, as "no results". The
/// variants exist for logging.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RetrievalError {
    /// Request never completed (connection refused, DNS, abort).
    #[error("network error: {0}")]
    Network(String),

    /// Backend answered with a non-success status.
    #[error("backend returned HTTP {0}")]
    Status(u16),

    /// Response body was not a valid search response.
    #[error("could not decode search response: {0}")]
    Decode(String),
}

/// Errors reading a saved search response from disk.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Failed to read the file.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File is not a search response or a list of articles.
    #[error("invalid search response JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
