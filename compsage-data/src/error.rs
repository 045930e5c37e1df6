//! Error types raised while fetching and validating the dataset.
#![forbid(unsafe_code)]

use camino::Utf8PathBuf;
use compsage_core::DatasetIntegrityError;
use thiserror::Error;

/// Transport-level errors encountered while retrieving the dataset.
///
/// These are retryable by the caller; the data itself has not been
/// judged yet.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TransportError {
    /// The server returned an HTTP error status.
    #[error("request to {url} failed with status {status}: {message}")]
    Http {
        /// Fully qualified request URL.
        url: String,
        /// HTTP status code.
        status: u16,
        /// Short error description supplied by the server.
        message: String,
    },
    /// The request failed due to an I/O error.
    #[error("network error contacting {url}: {source}")]
    Network {
        /// Fully qualified request URL.
        url: String,
        /// I/O error reported by the transport.
        #[source]
        source: std::io::Error,
    },
    /// Reading a local dataset file failed.
    #[error("failed to read dataset file {path}: {source}")]
    File {
        /// Path of the unreadable file.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// A single structural problem found in the dataset document.
///
/// Collected exhaustively so a diagnostic UI can render every issue at
/// once instead of one per reload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaViolation {
    /// Path into the document, e.g. `comps[2].units[0].championId`.
    pub path: String,
    /// What is wrong at that path.
    pub message: String,
}

impl SchemaViolation {
    /// Construct a violation at an explicit document path.
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Construct a violation at the document root, used when the
    /// document cannot be parsed at all.
    pub fn at_root(message: impl Into<String>) -> Self {
        Self::new("$", message)
    }
}

impl std::fmt::Display for SchemaViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// Errors raised while loading the dataset.
///
/// The three data failures are terminal for the affected load attempt;
/// `NotLoaded` marks a call-sequencing bug rather than bad data.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DatasetError {
    /// The dataset could not be retrieved; retry after the transport
    /// recovers.
    #[error("failed to fetch dataset: {source}")]
    Fetch {
        /// Transport failure details.
        #[source]
        source: TransportError,
    },
    /// The document's shape is wrong; fix the source data.
    #[error("dataset failed schema validation with {n} violation(s)", n = .violations.len())]
    Schema {
        /// Every structural problem found, with document paths.
        violations: Vec<SchemaViolation>,
    },
    /// The document's shape is fine but its cross-references are not;
    /// fix the source data.
    #[error("dataset failed referential validation: {source}")]
    Referential {
        /// The first integrity failure, naming the offending comp.
        #[source]
        source: DatasetIntegrityError,
    },
    /// The cache was read before a successful load. A programming
    /// error, not a user-facing condition.
    #[error("dataset not loaded; call DatasetCache::load first")]
    NotLoaded,
}
