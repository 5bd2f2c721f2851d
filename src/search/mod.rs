//! Tiered fallback search over a job source.
//!
//! Tiers are an ordered widening of result scope, not a resilience
//! mechanism: there is no retry within a tier and no backoff between tiers.
//! Each tier issues exactly one request, so a search costs at most three.

use tracing::debug;

use crate::models::{JobPosting, SearchCriteria};
use crate::query::{build_query, QueryTier};
use crate::sources::{normalize_response, JobSource, SourceError};

/// Drives a [`JobSource`] through the fallback cascade.
#[derive(Debug)]
pub struct FallbackSearch<S> {
    source: S,
}

impl<S: JobSource> FallbackSearch<S> {
    /// Create a new fallback search over the given source.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// The underlying source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Search with up to three successively broader queries.
    ///
    /// The first tier that yields at least one posting wins and later tiers
    /// are never attempted. When every tier comes back empty, the final
    /// (empty) result is returned without error. Errors from any tier
    /// propagate immediately; a failed tier is not papered over by a broader
    /// one.
    pub async fn search(&self, criteria: &SearchCriteria) -> Result<Vec<JobPosting>, SourceError> {
        if criteria.trimmed_keyword().is_empty() {
            return Err(SourceError::InvalidRequest(
                "search keyword must not be blank".to_string(),
            ));
        }

        let mut postings = Vec::new();
        for tier in QueryTier::CASCADE {
            let query = build_query(criteria, tier);
            debug!(source = self.source.id(), ?tier, %query, "executing search tier");

            let body = self
                .source
                .fetch_page(&query, criteria.page, criteria.num_pages)
                .await?;
            postings = normalize_response(&body)?;

            if !postings.is_empty() {
                debug!(?tier, count = postings.len(), "tier yielded postings");
                return Ok(postings);
            }
        }

        debug!("all tiers exhausted without postings");
        Ok(postings)
    }

    /// Single keyword-only search with no fallback cascade.
    ///
    /// Issues exactly one request, the same query the cascade would use as
    /// its last resort.
    pub async fn search_keyword(&self, keyword: &str) -> Result<Vec<JobPosting>, SourceError> {
        let criteria = SearchCriteria::new(keyword);
        if criteria.trimmed_keyword().is_empty() {
            return Err(SourceError::InvalidRequest(
                "search keyword must not be blank".to_string(),
            ));
        }

        let query = build_query(&criteria, QueryTier::KeywordOnly);
        let body = self
            .source
            .fetch_page(&query, criteria.page, criteria.num_pages)
            .await?;
        normalize_response(&body)
    }
}
