use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by protosearch.
///
/// A choice that does not match the query is not an error: it scores 0.
#[derive(Debug, Error)]
pub enum Error {
    /// Query or choice bytes are not valid UTF-8
    #[error("input is not valid UTF-8: {0}")]
    InvalidInput(#[from] std::str::Utf8Error),
    /// A route without a domain
    #[error("invalid route {0:?}")]
    InvalidRoute(String),
    /// A protocol document could not be parsed
    #[error("invalid protocol document: {0}")]
    Parse(#[from] serde_json::Error),
    /// A protocol file could not be read
    #[error("error reading {}: {source}", .path.display())]
    Io {
        /// The file being read
        path: PathBuf,
        /// The underlying error
        source: std::io::Error,
    },
    /// A protocol file could not be parsed
    #[error("error parsing {}: {source}", .path.display())]
    Json {
        /// The file being parsed
        path: PathBuf,
        /// The underlying error
        source: serde_json::Error,
    },
}
