//! Rate limit information from GitHub API responses.
//!
//! GitHub attaches `X-RateLimit-*` headers to every REST response and a
//! `Retry-After` header to throttled ones. Both are captured here so that a
//! rate limited error can carry enough detail for the caller to back off.

use std::time::{SystemTime, UNIX_EPOCH};

use http::header::{HeaderMap, RETRY_AFTER};

/// Header carrying the request quota for the current window.
pub const RATE_LIMIT_LIMIT: &str = "x-ratelimit-limit";
/// Header carrying the remaining requests in the current window.
pub const RATE_LIMIT_REMAINING: &str = "x-ratelimit-remaining";
/// Header carrying the Unix timestamp at which the window resets.
pub const RATE_LIMIT_RESET: &str = "x-ratelimit-reset";

/// Rate limit information extracted from GitHub API response headers.
///
/// # Example
///
/// ```
/// use repo_pulse::github::RateLimitInfo;
///
/// let info = RateLimitInfo::new(5000, 4999, 1700000000);
/// assert!(!info.is_exhausted());
/// assert_eq!(info.remaining(), 4999);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitInfo {
    limit: u32,
    remaining: u32,
    reset_at: u64,
}

impl RateLimitInfo {
    /// Creates a new rate limit info instance.
    #[must_use]
    pub const fn new(limit: u32, remaining: u32, reset_at: u64) -> Self {
        Self {
            limit,
            remaining,
            reset_at,
        }
    }

    /// Reads the `X-RateLimit-*` headers, returning `None` unless all three
    /// are present and numeric.
    #[must_use]
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        let limit = header_number::<u32>(headers, RATE_LIMIT_LIMIT)?;
        let remaining = header_number::<u32>(headers, RATE_LIMIT_REMAINING)?;
        let reset_at = header_number::<u64>(headers, RATE_LIMIT_RESET)?;
        Some(Self::new(limit, remaining, reset_at))
    }

    /// Returns the maximum requests allowed in the current window.
    #[must_use]
    pub const fn limit(&self) -> u32 {
        self.limit
    }

    /// Returns the remaining requests in the current window.
    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Returns the Unix timestamp when the rate limit resets.
    #[must_use]
    pub const fn reset_at(&self) -> u64 {
        self.reset_at
    }

    /// Returns true if the rate limit has been exhausted.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }

    /// Calculates seconds until the rate limit resets.
    ///
    /// Returns 0 if the reset time has already passed or if the system time
    /// cannot be determined.
    #[must_use]
    pub fn seconds_until_reset(&self) -> u64 {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|duration| duration.as_secs())
            .unwrap_or(0);

        self.reset_at.saturating_sub(now)
    }
}

/// Reads `Retry-After` as a number of seconds.
///
/// GitHub only sends the delta-seconds form, so HTTP dates are ignored.
#[must_use]
pub fn retry_after_seconds(headers: &HeaderMap) -> Option<u64> {
    header_number::<u64>(headers, RETRY_AFTER.as_str())
}

fn header_number<T: std::str::FromStr>(headers: &HeaderMap, name: &str) -> Option<T> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .and_then(|raw| raw.trim().parse::<T>().ok())
}
