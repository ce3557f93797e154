//! Error types exposed by the activity aggregation layer.

use thiserror::Error;

use super::rate_limit::RateLimitInfo;

/// Body marker GitHub returns with a 409 when a repository has no commits.
pub const EMPTY_REPOSITORY_MARKER: &str = "Git Repository is empty";

/// Errors surfaced while talking to GitHub or assembling activity.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ActivityError {
    /// No account identifier was supplied.
    #[error("a GitHub username or organization is required")]
    MissingIdentifier,

    /// The API base URL or an upstream link could not be parsed.
    #[error("URL is invalid: {0}")]
    InvalidUrl(String),

    /// The requested namespace or resource does not exist (HTTP 404).
    #[error("GitHub resource not found: {message}")]
    NotFound {
        /// Response message from GitHub.
        message: String,
    },

    /// GitHub reported a conflict (HTTP 409) other than an empty repository.
    #[error("GitHub reported a conflict: {message}")]
    Conflict {
        /// Response body from GitHub.
        message: String,
    },

    /// The authentication token was rejected by GitHub.
    #[error("GitHub rejected the token: {message}")]
    Authentication {
        /// GitHub error message returned with the 401/403 response.
        message: String,
    },

    /// Rate limit exceeded (HTTP 429, or 403 with a rate limit message).
    #[error("GitHub API rate limit exceeded: {message}")]
    RateLimited {
        /// Seconds the caller should wait, from the `Retry-After` header.
        retry_after: Option<u64>,
        /// Rate limit info if available from response headers.
        rate_limit: Option<RateLimitInfo>,
        /// Error message from GitHub.
        message: String,
    },

    /// GitHub returned a client error that has no dedicated variant.
    #[error("GitHub API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response message from GitHub.
        message: String,
    },

    /// GitHub failed with a server error (HTTP 5xx).
    #[error("GitHub server error ({status}): {message}")]
    UpstreamServer {
        /// HTTP status code.
        status: u16,
        /// Response message from GitHub.
        message: String,
    },

    /// Networking failed while calling GitHub.
    #[error("network error talking to GitHub: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// A successful response did not carry the expected JSON array.
    #[error("malformed GitHub response: {message}")]
    MalformedResponse {
        /// Decoder error detail.
        message: String,
    },

    /// A concurrent fetch task failed to complete.
    #[error("worker pool failure: {message}")]
    WorkerPool {
        /// Join or scheduling error detail.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },

    /// Configuration could not be loaded or is out of range.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },
}

impl ActivityError {
    /// Returns true for a 404 from GitHub.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns true when GitHub reported a repository without any commits.
    #[must_use]
    pub fn is_empty_repository(&self) -> bool {
        matches!(self, Self::Conflict { message } if message.contains(EMPTY_REPOSITORY_MARKER))
    }

    /// Returns true when the request was throttled.
    #[must_use]
    pub const fn is_rate_limited(&self) -> bool {
        matches!(self, Self::RateLimited { .. })
    }

    /// Returns true for errors that originate from GitHub or the network.
    #[must_use]
    pub const fn is_upstream(&self) -> bool {
        matches!(
            self,
            Self::NotFound { .. }
                | Self::Conflict { .. }
                | Self::Authentication { .. }
                | Self::RateLimited { .. }
                | Self::Api { .. }
                | Self::UpstreamServer { .. }
                | Self::Network { .. }
                | Self::MalformedResponse { .. }
        )
    }
}
