//! High-level activity intake facade.
//!
//! `ActivityIntake` composes namespace resolution, re-pagination and commit
//! aggregation into the flows the CLI exposes.

use std::sync::Arc;

use crate::github::{
    AccountName, ActivityError, CommitFetcher, NamespaceResolver, RepositoryActivity,
    RepositoryPage, RepositorySummary, UpstreamPager, UpstreamTransport,
};

use super::aggregator::ActivityAggregator;
use super::page::{PageResult, slice};
use super::pool::WorkerPool;

/// Aggregates repository activity for GitHub accounts.
///
/// # Example
///
/// ```ignore
/// use std::sync::Arc;
/// use repo_pulse::{ActivityIntake, OctocrabTransport, WorkerPool};
///
/// let transport = OctocrabTransport::for_api_base("https://api.github.com", None)?;
/// let intake = ActivityIntake::new(Arc::new(transport), WorkerPool::new(10));
/// let page = intake.fetch_activity_page("octocat", 5, 0, 20).await?;
/// ```
#[derive(Clone)]
pub struct ActivityIntake {
    resolver: NamespaceResolver,
    aggregator: ActivityAggregator,
}

impl ActivityIntake {
    /// Builds the intake over a transport and a shared worker pool.
    #[must_use]
    pub fn new(transport: Arc<dyn UpstreamTransport>, pool: WorkerPool) -> Self {
        let resolver = NamespaceResolver::new(UpstreamPager::new(Arc::clone(&transport)));
        let aggregator = ActivityAggregator::new(CommitFetcher::new(transport), pool);
        Self {
            resolver,
            aggregator,
        }
    }

    /// Fetches commits for every repository of the account.
    ///
    /// # Errors
    ///
    /// Returns `ActivityError::MissingIdentifier` for a blank identifier and
    /// propagates upstream failures.
    pub async fn fetch_activity(
        &self,
        identifier: &str,
        limit: usize,
    ) -> Result<Vec<RepositoryActivity>, ActivityError> {
        let account = AccountName::new(identifier)?;
        tracing::info!("fetching activity for {account} with commit limit {limit}");

        let repositories = self.resolver.resolve_all(&account).await?;
        tracing::debug!("fetched {} repositories for {account}", repositories.len());

        let activity = self
            .aggregator
            .aggregate(&account, repositories, limit)
            .await?;
        tracing::info!(
            "fetched activity for {} repositories of {account}",
            activity.len()
        );
        Ok(activity)
    }

    /// Fetches commits for one zero-indexed page of the account's
    /// repositories. Only the repositories on that page are queried for
    /// commits; an out-of-range page queries none.
    ///
    /// # Errors
    ///
    /// Returns `ActivityError::MissingIdentifier` for a blank identifier and
    /// propagates upstream failures.
    pub async fn fetch_activity_page(
        &self,
        identifier: &str,
        limit: usize,
        page: usize,
        size: usize,
    ) -> Result<PageResult<RepositoryActivity>, ActivityError> {
        let account = AccountName::new(identifier)?;
        tracing::info!(
            "fetching activity page {page} (size {size}) for {account} with commit limit {limit}"
        );

        let repositories = self.resolver.resolve_all(&account).await?;
        let selected = slice(&repositories, page, size);
        if selected.content().is_empty() {
            if selected.total_elements() > 0 {
                tracing::warn!(
                    "requested page {page} is out of bounds for {} repositories",
                    selected.total_elements()
                );
            }
            return Ok(selected.map_content(Vec::new()));
        }

        let page_repositories = selected.content().to_vec();
        let activity = self
            .aggregator
            .aggregate(&account, page_repositories, limit)
            .await?;
        tracing::info!(
            "fetched activity for {} repositories of {account} (page {page} of {})",
            activity.len(),
            selected.total_pages()
        );
        Ok(selected.map_content(activity))
    }

    /// Fetches one upstream page of repositories, without commits.
    ///
    /// # Errors
    ///
    /// Returns `ActivityError::MissingIdentifier` for a blank identifier and
    /// propagates upstream failures.
    pub async fn fetch_repository_page(
        &self,
        identifier: &str,
        page: u32,
        per_page: u8,
    ) -> Result<RepositoryPage, ActivityError> {
        let account = AccountName::new(identifier)?;
        tracing::info!("fetching repository page {page} ({per_page} per page) for {account}");
        self.resolver.resolve_page(&account, page, per_page).await
    }

    /// Lists every repository of the account, without commits.
    ///
    /// # Errors
    ///
    /// Returns `ActivityError::MissingIdentifier` for a blank identifier and
    /// propagates upstream failures.
    pub async fn fetch_repositories(
        &self,
        identifier: &str,
    ) -> Result<Vec<RepositorySummary>, ActivityError> {
        let account = AccountName::new(identifier)?;
        tracing::info!("listing repositories for {account}");
        self.resolver.resolve_all(&account).await
    }

    /// Lists every repository of the account at `per_page` and reports the
    /// position of the last page walked.
    ///
    /// # Errors
    ///
    /// Returns `ActivityError::MissingIdentifier` for a blank identifier and
    /// propagates upstream failures.
    pub async fn fetch_repositories_with_info(
        &self,
        identifier: &str,
        per_page: u8,
    ) -> Result<RepositoryPage, ActivityError> {
        let account = AccountName::new(identifier)?;
        tracing::info!("listing repositories for {account} ({per_page} per page)");
        self.resolver
            .resolve_all_with_info(&account, per_page)
            .await
    }
}
