//! GitHub repository and commit listing.
//!
//! This module walks GitHub's paged REST listings through a pluggable
//! transport, resolves an identifier to a user or organization namespace and
//! fetches recent commits per repository. Errors are mapped into
//! [`ActivityError`] variants so that callers can distinguish rate limiting
//! from other upstream failures without seeing Octocrab internals.

pub mod commits;
pub mod error;
pub mod link_header;
pub mod locator;
pub mod models;
pub mod namespace;
pub mod pager;
pub mod pagination;
pub mod rate_limit;
pub mod transport;

pub use commits::CommitFetcher;
pub use error::ActivityError;
pub use link_header::{LinkRelations, PageCursor};
pub use locator::{AccountName, DEFAULT_API_BASE, Namespace, PersonalAccessToken};
pub use models::{CommitRecord, RepositoryActivity, RepositoryPage, RepositorySummary};
pub use namespace::NamespaceResolver;
pub use pager::UpstreamPager;
pub use pagination::{PageInfo, UpstreamPage};
pub use rate_limit::RateLimitInfo;
pub use transport::{OctocrabTransport, UpstreamResponse, UpstreamTransport};

#[cfg(test)]
pub use transport::MockUpstreamTransport;
