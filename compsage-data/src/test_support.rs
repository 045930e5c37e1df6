//! Shared fixtures for dataset-loading tests.
#![forbid(unsafe_code)]

use std::cell::Cell;

use async_trait::async_trait;

use crate::error::TransportError;
use crate::source::DatasetSource;

/// Stub [`DatasetSource`] backed by an in-memory document, counting
/// how often it is fetched so idempotence is observable.
#[derive(Debug)]
pub struct StubSource {
    body: Option<String>,
    fetches: Cell<usize>,
}

impl StubSource {
    /// Construct a stub returning the given document body.
    #[must_use]
    pub fn with_body(body: impl Into<String>) -> Self {
        Self {
            body: Some(body.into()),
            fetches: Cell::new(0),
        }
    }

    /// Construct a stub whose fetch always fails.
    #[must_use]
    pub fn failing() -> Self {
        Self {
            body: None,
            fetches: Cell::new(0),
        }
    }

    /// Number of times `fetch` has been called.
    #[must_use]
    pub fn fetches(&self) -> usize {
        self.fetches.get()
    }
}

#[async_trait(?Send)]
impl DatasetSource for StubSource {
    fn origin(&self) -> &str {
        "stub://dataset"
    }

    async fn fetch(&self) -> Result<String, TransportError> {
        self.fetches.set(self.fetches.get() + 1);
        self.body.clone().ok_or_else(|| TransportError::Http {
            url: "stub://dataset".to_owned(),
            status: 503,
            message: "stubbed outage".to_owned(),
        })
    }
}
