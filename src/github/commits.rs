//! Recent commit retrieval for a single repository.

use std::sync::Arc;

use super::error::ActivityError;
use super::locator::{AccountName, commits_path};
use super::models::{CommitRecord, map_commit};
use super::transport::UpstreamTransport;

/// Largest page GitHub serves for the commit listing.
const MAX_COMMITS_PER_PAGE: u8 = 100;

/// Fetches the most recent commits of one repository.
#[derive(Clone)]
pub struct CommitFetcher {
    transport: Arc<dyn UpstreamTransport>,
}

impl CommitFetcher {
    /// Creates a fetcher over the given transport.
    #[must_use]
    pub fn new(transport: Arc<dyn UpstreamTransport>) -> Self {
        Self { transport }
    }

    /// Returns at most `limit` commits, newest first.
    ///
    /// Only one page is requested, sized `limit` clamped to `1..=100`. A
    /// repository without commits yields an empty list.
    ///
    /// # Errors
    ///
    /// Propagates every transport error except the empty repository conflict.
    pub async fn fetch_recent(
        &self,
        owner: &AccountName,
        repository: &str,
        limit: usize,
    ) -> Result<Vec<CommitRecord>, ActivityError> {
        let per_page = u8::try_from(limit)
            .unwrap_or(MAX_COMMITS_PER_PAGE)
            .clamp(1, MAX_COMMITS_PER_PAGE);
        let target = commits_path(owner, repository, per_page);

        let response = match self.transport.get(&target).await {
            Ok(response) => response,
            Err(error) if error.is_empty_repository() => {
                tracing::debug!("{owner}/{repository} has no commits");
                return Ok(Vec::new());
            }
            Err(error) => return Err(error),
        };

        let commits: Vec<CommitRecord> = response
            .items
            .into_iter()
            .take(limit)
            .map(map_commit)
            .collect();
        tracing::debug!("{owner}/{repository}: {} commits", commits.len());
        Ok(commits)
    }
}
