//! Dataset acquisition: where the raw JSON document comes from.
//!
//! The [`DatasetSource`] trait is the only asynchronous seam in the
//! system; everything after the fetch is synchronous and pure.
#![forbid(unsafe_code)]

use std::time::Duration;

use async_trait::async_trait;
use camino::Utf8PathBuf;
use reqwest::Client;
use reqwest::header::USER_AGENT;

use crate::error::TransportError;

/// Default user agent sent with HTTP dataset requests.
pub const DEFAULT_USER_AGENT: &str = "compsage-dataset/0.1";

const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Supplier of the raw dataset document.
#[async_trait(?Send)]
pub trait DatasetSource {
    /// Human-readable origin of the data, used in diagnostics.
    fn origin(&self) -> &str;

    /// Fetch the raw JSON text of the dataset.
    ///
    /// # Errors
    /// Returns [`TransportError`] when the document cannot be
    /// retrieved; the content is not inspected here.
    async fn fetch(&self) -> Result<String, TransportError>;
}

/// HTTP implementation of [`DatasetSource`].
#[derive(Debug, Clone)]
pub struct HttpDatasetSource {
    client: Client,
    url: String,
    user_agent: String,
}

impl HttpDatasetSource {
    /// Construct an HTTP-backed source for the given URL.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }

    /// Override the default user agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

#[async_trait(?Send)]
impl DatasetSource for HttpDatasetSource {
    fn origin(&self) -> &str {
        &self.url
    }

    async fn fetch(&self) -> Result<String, TransportError> {
        let response = self
            .client
            .get(&self.url)
            .timeout(FETCH_TIMEOUT)
            .header(USER_AGENT, self.user_agent.as_str())
            .send()
            .await
            .map_err(|err| convert_reqwest_error(err, &self.url))?
            .error_for_status()
            .map_err(|err| convert_reqwest_error(err, &self.url))?;
        response
            .text()
            .await
            .map_err(|err| convert_reqwest_error(err, &self.url))
    }
}

/// Local-file implementation of [`DatasetSource`], mainly for tests
/// and offline tooling.
#[derive(Debug, Clone)]
pub struct FileDatasetSource {
    path: Utf8PathBuf,
}

impl FileDatasetSource {
    /// Construct a source reading from the given UTF-8 path.
    #[must_use]
    pub fn new(path: impl Into<Utf8PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait(?Send)]
impl DatasetSource for FileDatasetSource {
    fn origin(&self) -> &str {
        self.path.as_str()
    }

    async fn fetch(&self) -> Result<String, TransportError> {
        tokio::fs::read_to_string(self.path.as_std_path())
            .await
            .map_err(|source| TransportError::File {
                path: self.path.clone(),
                source,
            })
    }
}

fn convert_reqwest_error(err: reqwest::Error, url: &str) -> TransportError {
    err.status().map_or_else(
        || TransportError::Network {
            url: url.to_owned(),
            source: std::io::Error::other(err.to_string()),
        },
        |status| TransportError::Http {
            url: url.to_owned(),
            status: status.as_u16(),
            message: status
                .canonical_reason()
                .unwrap_or("unknown status")
                .to_owned(),
        },
    )
}
