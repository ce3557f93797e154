//! Repository listing with the user to organization fallback.
//!
//! An identifier is first listed as a user. When that yields no
//! repositories the identical request is repeated once against the
//! organization namespace. A user without repositories and an organization
//! cannot be told apart, so the fallback fires for both.

use super::error::ActivityError;
use super::locator::{AccountName, Namespace};
use super::models::{RepositoryPage, RepositorySummary, map_repository};
use super::pager::{EXHAUSTIVE_PAGE_SIZE, UpstreamPager};

/// Lists an account's repositories, falling back to the organization
/// namespace.
#[derive(Clone)]
pub struct NamespaceResolver {
    pager: UpstreamPager,
}

impl NamespaceResolver {
    /// Creates a resolver on top of a pager.
    #[must_use]
    pub const fn new(pager: UpstreamPager) -> Self {
        Self { pager }
    }

    /// Lists every repository of the account.
    ///
    /// # Errors
    ///
    /// Propagates pager errors from either namespace.
    pub async fn resolve_all(
        &self,
        account: &AccountName,
    ) -> Result<Vec<RepositorySummary>, ActivityError> {
        let users = self.list_all(Namespace::User, account).await?;
        if !users.is_empty() {
            return Ok(users);
        }

        tracing::debug!("no user repositories for {account}; trying organization");
        self.list_all(Namespace::Organization, account).await
    }

    /// Lists every repository of the account at `per_page`, reporting the
    /// position of the last page walked.
    ///
    /// # Errors
    ///
    /// Propagates pager errors from either namespace.
    pub async fn resolve_all_with_info(
        &self,
        account: &AccountName,
        per_page: u8,
    ) -> Result<RepositoryPage, ActivityError> {
        let users = self
            .list_all_with_info(Namespace::User, account, per_page)
            .await?;
        if !users.is_empty() {
            return Ok(users);
        }

        tracing::debug!("no user repositories for {account}; trying organization");
        self.list_all_with_info(Namespace::Organization, account, per_page)
            .await
    }

    /// Lists one upstream page of the account's repositories.
    ///
    /// # Errors
    ///
    /// Propagates pager errors from either namespace.
    pub async fn resolve_page(
        &self,
        account: &AccountName,
        page: u32,
        per_page: u8,
    ) -> Result<RepositoryPage, ActivityError> {
        let users = self
            .list_page(Namespace::User, account, page, per_page)
            .await?;
        if !users.is_empty() {
            return Ok(users);
        }

        tracing::debug!("user page {page} empty for {account}; trying organization");
        self.list_page(Namespace::Organization, account, page, per_page)
            .await
    }

    async fn list_all(
        &self,
        namespace: Namespace,
        account: &AccountName,
    ) -> Result<Vec<RepositorySummary>, ActivityError> {
        let first = namespace.repositories_path(account, 1, EXHAUSTIVE_PAGE_SIZE);
        let repositories = self.pager.fetch_all(&first, map_repository).await?;
        tracing::debug!(
            "{namespace} listing for {account} returned {} repositories",
            repositories.len()
        );
        Ok(repositories)
    }

    async fn list_all_with_info(
        &self,
        namespace: Namespace,
        account: &AccountName,
        per_page: u8,
    ) -> Result<RepositoryPage, ActivityError> {
        let first = namespace.repositories_path(account, 1, per_page);
        self.pager
            .fetch_all_with_info(&first, per_page, map_repository)
            .await
    }

    async fn list_page(
        &self,
        namespace: Namespace,
        account: &AccountName,
        page: u32,
        per_page: u8,
    ) -> Result<RepositoryPage, ActivityError> {
        let target = namespace.repositories_path(account, page, per_page);
        self.pager
            .fetch_page(&target, page, per_page, map_repository)
            .await
    }
}
