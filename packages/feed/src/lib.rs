#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Record feed fetching and row accumulation.
//!
//! Fetches JSON record batches from a remote endpoint via the
//! [`BatchSource`] trait (HTTP implementation in [`http`]) and
//! accumulates flattened rows with [`collect_rows`] until a requested
//! record count is reached. [`get_data`] is the convenience entry point
//! that wires the two together.

pub mod http;

pub use roster_feed_models::{ROW_WIDTH, Row};

/// Errors that can occur while fetching or accumulating record batches.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    /// The HTTP request or body read failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status code.
    #[error("response failed with status code {code} and body: {body}")]
    Status {
        /// The HTTP status code of the response.
        code: u16,
        /// The raw response body, kept for diagnosis.
        body: String,
    },

    /// The response body was not valid JSON in the expected shape.
    #[error("JSON decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// The envelope decoded cleanly but contained zero records.
    #[error("can't get data from empty record set")]
    EmptyBatch,
}

/// Trait for fetching one batch of flattened rows from a record source.
///
/// The HTTP implementation is [`http::HttpBatchSource`]; tests substitute
/// in-memory sources to exercise the accumulation loop without a network.
pub trait BatchSource: Send + Sync {
    /// Fetches a single batch of rows, preserving source order.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError`] if the fetch or decoding fails, or if the
    /// source returned zero records.
    fn fetch_batch(&self) -> impl std::future::Future<Output = Result<Vec<Row>, FeedError>> + Send;
}

/// Accumulates rows from `source` until at least `record_count` rows
/// have been gathered, then truncates to exactly `record_count`.
///
/// Batches are appended whole, in call order; a batch is never sliced
/// mid-loop. For `record_count == 0` no fetch occurs. There is no cap
/// on the number of fetches: a source that keeps returning short
/// batches without erroring is fetched indefinitely.
///
/// # Errors
///
/// Returns the first [`FeedError`] a fetch produces; rows gathered from
/// earlier batches are discarded.
pub async fn collect_rows(
    source: &(impl BatchSource + ?Sized),
    record_count: usize,
) -> Result<Vec<Row>, FeedError> {
    let mut rows: Vec<Row> = Vec::new();

    while rows.len() < record_count {
        log::debug!(
            "Fetching batch ({} of {record_count} rows so far)",
            rows.len()
        );
        let batch = source.fetch_batch().await?;
        rows.extend(batch);
    }

    rows.truncate(record_count);

    log::debug!("Accumulated {} rows", rows.len());
    Ok(rows)
}

/// Fetches exactly `record_count` rows from the JSON feed at `location`.
///
/// This is the sole top-level entry point: it builds an
/// [`http::HttpBatchSource`] for `location` and accumulates batches via
/// [`collect_rows`].
///
/// # Errors
///
/// Returns [`FeedError`] if any fetch fails; no partial results are
/// returned.
pub async fn get_data(location: &str, record_count: usize) -> Result<Vec<Row>, FeedError> {
    let source = http::HttpBatchSource::new(location);
    collect_rows(&source, record_count).await
}
