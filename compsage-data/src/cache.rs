//! Process-wide dataset cache with explicit ownership.
//!
//! Rather than hidden global state, the cache is an explicit handle
//! constructed once at startup and threaded to whoever needs the
//! dataset. Population happens exactly once; `clear` exists for
//! reloads and tests.
#![forbid(unsafe_code)]

use std::sync::{Arc, PoisonError, RwLock};

use compsage_core::Dataset;
use log::debug;

use crate::error::DatasetError;
use crate::source::DatasetSource;

/// Lazily populated, idempotent holder of the validated dataset.
///
/// # Examples
///
/// ```
/// use compsage_data::DatasetCache;
///
/// let cache = DatasetCache::new();
/// assert!(!cache.is_loaded());
/// assert!(cache.get().is_err());
/// ```
#[derive(Debug, Default)]
pub struct DatasetCache {
    slot: RwLock<Option<Arc<Dataset>>>,
}

impl DatasetCache {
    /// Construct an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load, validate, and cache the dataset.
    ///
    /// Idempotent: once a load has succeeded, later calls return the
    /// cached dataset without re-fetching or re-validating. A failed
    /// load caches nothing, so the caller may simply retry.
    ///
    /// # Errors
    /// Propagates [`DatasetError`] from the fetch and validation
    /// pipeline.
    pub async fn load(
        &self,
        source: &dyn DatasetSource,
    ) -> Result<Arc<Dataset>, DatasetError> {
        if let Some(dataset) = self.peek() {
            debug!("dataset cache hit; skipping fetch from {}", source.origin());
            return Ok(dataset);
        }

        let dataset = Arc::new(crate::load_dataset(source).await?);

        let mut slot = self
            .slot
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        // Keep the first successful load if a concurrent call won.
        if let Some(existing) = slot.as_ref() {
            return Ok(Arc::clone(existing));
        }
        debug!(
            "dataset loaded from {}: {} champions, {} items, {} comps",
            source.origin(),
            dataset.champions().len(),
            dataset.items().len(),
            dataset.comps().len()
        );
        *slot = Some(Arc::clone(&dataset));
        Ok(dataset)
    }

    /// Return the cached dataset.
    ///
    /// # Errors
    /// Returns [`DatasetError::NotLoaded`] before the first successful
    /// [`load`](Self::load); that is a call-sequencing bug in the
    /// consumer, not bad data.
    pub fn get(&self) -> Result<Arc<Dataset>, DatasetError> {
        self.peek().ok_or(DatasetError::NotLoaded)
    }

    /// Whether a dataset is currently cached.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.peek().is_some()
    }

    /// Drop the cached dataset so the next [`load`](Self::load)
    /// re-fetches and re-validates.
    pub fn clear(&self) {
        let mut slot = self
            .slot
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *slot = None;
    }

    fn peek(&self) -> Option<Arc<Dataset>> {
        self.slot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
