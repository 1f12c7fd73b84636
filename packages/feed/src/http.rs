//! HTTP implementation of [`BatchSource`].
//!
//! One fetch is one `GET` against a fixed URL: read the whole body,
//! check the status, decode the JSON envelope, and flatten the records
//! into rows. No pagination parameters, no retries, no caching between
//! calls.

use roster_feed_models::{Envelope, Record, Row};

use crate::{BatchSource, FeedError};

/// Fetches record batches from a JSON endpoint over HTTP.
#[derive(Debug, Clone)]
pub struct HttpBatchSource {
    /// The HTTP client used for requests.
    client: reqwest::Client,
    /// The endpoint URL, queried as-is on every fetch.
    url: String,
}

impl HttpBatchSource {
    /// Creates a new `HttpBatchSource` for the given URL with a default
    /// client.
    #[must_use]
    pub fn new(url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.to_owned(),
        }
    }

    /// Replaces the HTTP client, e.g. one with custom timeouts or
    /// headers.
    #[must_use]
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    /// Returns the endpoint URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl BatchSource for HttpBatchSource {
    async fn fetch_batch(&self) -> Result<Vec<Row>, FeedError> {
        log::debug!("Fetching batch from {}", self.url);

        let response = self.client.get(&self.url).send().await?;
        let status = response.status();

        // Drain the body before the status check so a failure message
        // can include it. Dropping the drained response releases the
        // connection.
        let body = response.text().await?;

        if status.as_u16() >= 300 {
            return Err(FeedError::Status {
                code: status.as_u16(),
                body,
            });
        }

        let envelope: Envelope = serde_json::from_str(&body)?;

        if envelope.results.is_empty() {
            return Err(FeedError::EmptyBatch);
        }

        log::debug!("Decoded {} records", envelope.results.len());

        Ok(envelope.results.into_iter().map(Record::into_row).collect())
    }
}
