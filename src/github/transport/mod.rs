//! HTTP access to GitHub's paged REST listings.
//!
//! The [`UpstreamTransport`] trait is the seam between the pagination and
//! aggregation logic and the network. The Octocrab implementation performs
//! raw `GET` requests so that the `Link` and rate limit headers stay
//! available, while tests substitute a mock.

mod client;
mod error_mapping;
mod http_utils;
mod rest;

pub use rest::OctocrabTransport;

use async_trait::async_trait;
use serde_json::Value;

use super::error::ActivityError;
use super::link_header::PageCursor;
use super::rate_limit::RateLimitInfo;

/// A successful listing response.
///
/// Error statuses never reach this type; transports map them to
/// [`ActivityError`] variants instead.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpstreamResponse {
    /// Raw `Link` header, verbatim.
    pub link: Option<String>,
    /// Rate limit state reported alongside the response.
    pub rate_limit: Option<RateLimitInfo>,
    /// JSON array elements of the body. Empty for an empty or `null` body.
    pub items: Vec<Value>,
}

impl UpstreamResponse {
    /// Builds a response from a body and an optional `Link` header.
    #[must_use]
    pub const fn new(items: Vec<Value>, link: Option<String>) -> Self {
        Self {
            link,
            rate_limit: None,
            items,
        }
    }

    /// Pagination cursor derived from the `Link` header.
    #[must_use]
    pub fn cursor(&self) -> PageCursor {
        PageCursor::from_link_header(self.link.as_deref())
    }
}

/// Transport able to perform a `GET` against a GitHub listing endpoint.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UpstreamTransport: Send + Sync {
    /// Fetches `target`, which is either a route relative to the API base
    /// (`/users/octo/repos?page=1`) or an absolute URL taken from a `Link`
    /// header.
    async fn get(&self, target: &str) -> Result<UpstreamResponse, ActivityError>;
}
