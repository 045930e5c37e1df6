//! Dataset loading and validation for the Compsage engine.
//!
//! The pipeline runs in three gated stages, each only on the previous
//! stage's success:
//!
//! 1. **Fetch** — the raw JSON document is retrieved through a
//!    [`DatasetSource`]; this is the only asynchronous step.
//! 2. **Schema validation** — `serde` parsing plus a structural pass
//!    that collects every range and non-empty violation with its
//!    document path.
//! 3. **Referential validation** — [`Dataset::new`] verifies every
//!    champion/item reference and board-cell uniqueness, stopping at
//!    the first failing comp.
//!
//! There is no partial acceptance: either the whole document becomes a
//! [`Dataset`], or a single [`DatasetError`] explains why nothing was
//! cached.
//!
//! # Examples
//!
//! ```no_run
//! use compsage_data::{DatasetCache, HttpDatasetSource};
//!
//! # async fn demo() -> Result<(), compsage_data::DatasetError> {
//! let cache = DatasetCache::new();
//! let source = HttpDatasetSource::new("https://example.org/data/comps.json");
//! let dataset = cache.load(&source).await?;
//! println!("{} comps available", dataset.comps().len());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

use compsage_core::Dataset;

mod cache;
mod error;
mod schema;
mod source;
mod test_support;

pub use cache::DatasetCache;
pub use error::{DatasetError, SchemaViolation, TransportError};
pub use schema::{DatasetDocument, check_document};
pub use source::{DEFAULT_USER_AGENT, DatasetSource, FileDatasetSource, HttpDatasetSource};
pub use test_support::StubSource;

/// Fetch and validate the dataset without caching it.
///
/// # Errors
/// Returns [`DatasetError::Fetch`] when the source fails, and
/// propagates [`parse_dataset`] failures otherwise.
pub async fn load_dataset(source: &dyn DatasetSource) -> Result<Dataset, DatasetError> {
    let body = source
        .fetch()
        .await
        .map_err(|source| DatasetError::Fetch { source })?;
    parse_dataset(&body)
}

/// Validate a raw JSON dataset document.
///
/// # Errors
/// Returns [`DatasetError::Schema`] when the document cannot be parsed
/// or fails the structural pass, and [`DatasetError::Referential`]
/// when a cross-reference is dangling or a board cell is reused.
pub fn parse_dataset(body: &str) -> Result<Dataset, DatasetError> {
    let document: DatasetDocument = serde_json::from_str(body).map_err(|err| {
        DatasetError::Schema {
            violations: vec![SchemaViolation::at_root(err.to_string())],
        }
    })?;

    let violations = check_document(&document);
    if !violations.is_empty() {
        return Err(DatasetError::Schema { violations });
    }

    Dataset::new(document.champions, document.items, document.comps)
        .map_err(|source| DatasetError::Referential { source })
}
