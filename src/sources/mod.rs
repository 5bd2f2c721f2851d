//! Job board clients behind a trait-based seam.
//!
//! This module defines the [`JobSource`] trait that concrete job-board
//! clients implement, the shared [`SourceError`] taxonomy, and the JSearch
//! implementation. The fallback cascade in [`crate::search`] only talks to
//! the trait, so tests drive it with the scripted [`MockSource`].

mod jsearch;
pub mod mock;
mod normalize;

pub use jsearch::JSearchSource;
pub use mock::MockSource;
pub use normalize::normalize_response;

use async_trait::async_trait;

/// Interface for an external job-search API client.
///
/// One call fetches one page of raw results. Implementations perform no
/// retries and no result interpretation; turning the body into postings is
/// [`normalize_response`]'s job.
#[async_trait]
pub trait JobSource: Send + Sync + std::fmt::Debug {
    /// Unique identifier for this source (e.g. "jsearch")
    fn id(&self) -> &str;

    /// Human-readable name of this source
    fn name(&self) -> &str;

    /// Execute one search request and return the raw response body.
    ///
    /// `page` and `num_pages` are clamped to a minimum of 1 by the
    /// implementation before the request is issued.
    async fn fetch_page(
        &self,
        query: &str,
        page: u32,
        num_pages: u32,
    ) -> Result<String, SourceError>;
}

/// Errors that can occur when searching a job source.
///
/// "No postings found" is never an error; it is an empty result set. The
/// variants below all mean the search itself failed, and none of them are
/// retried automatically.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// Missing or blank credential; raised before any network I/O
    #[error("configuration error: {0}")]
    Config(String),

    /// Non-2xx response from the external API, status and body preserved
    #[error("external API error: {status} - {body}")]
    Api { status: u16, body: String },

    /// Transport-level failure reaching the external API
    #[error("failed to reach external jobs API: {0}")]
    Network(#[from] reqwest::Error),

    /// Malformed response body
    #[error("failed to parse external jobs response: {0}")]
    Parse(#[from] serde_json::Error),

    /// Invalid caller-supplied parameters
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}
