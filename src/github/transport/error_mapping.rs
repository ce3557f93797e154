//! Maps failed upstream responses onto [`ActivityError`] variants.

use http::{HeaderMap, StatusCode};

use crate::github::error::ActivityError;
use crate::github::rate_limit::{RateLimitInfo, retry_after_seconds};

/// Checks if a GitHub error status indicates an authentication failure.
const fn is_auth_failure(status: StatusCode) -> bool {
    matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN)
}

/// Checks whether a response represents a rate limit error.
///
/// 429 always does. GitHub reports primary and secondary limits with a 403,
/// recognisable by an exhausted quota or the wording of the message.
fn is_rate_limit_response(
    status: StatusCode,
    rate_limit: Option<&RateLimitInfo>,
    message: &str,
) -> bool {
    if status == StatusCode::TOO_MANY_REQUESTS {
        return true;
    }

    status == StatusCode::FORBIDDEN
        && (rate_limit.is_some_and(RateLimitInfo::is_exhausted)
            || message.to_lowercase().contains("rate limit"))
}

/// Maps a non-success response onto an error variant.
///
/// 409 keeps the raw body so that the empty repository marker can be
/// detected by the commit fetcher.
pub(super) fn map_http_error(
    operation: &str,
    status: StatusCode,
    headers: &HeaderMap,
    body: &str,
    maybe_message: Option<String>,
) -> ActivityError {
    let message = maybe_message.unwrap_or_else(|| {
        status
            .canonical_reason()
            .unwrap_or("unknown error")
            .to_owned()
    });
    let rate_limit = RateLimitInfo::from_headers(headers);

    if is_rate_limit_response(status, rate_limit.as_ref(), &message) {
        return ActivityError::RateLimited {
            retry_after: retry_after_seconds(headers),
            rate_limit,
            message: format!("{operation} failed: {message}"),
        };
    }

    match status {
        StatusCode::NOT_FOUND => ActivityError::NotFound {
            message: format!("{operation}: {message}"),
        },
        StatusCode::CONFLICT => ActivityError::Conflict {
            message: if body.is_empty() {
                message
            } else {
                body.to_owned()
            },
        },
        code if is_auth_failure(code) => ActivityError::Authentication {
            message: format!("{operation} failed: GitHub returned {code} {message}"),
        },
        code if code.is_server_error() => ActivityError::UpstreamServer {
            status: code.as_u16(),
            message: format!("{operation} failed: {message}"),
        },
        code => ActivityError::Api {
            status: code.as_u16(),
            message: format!("{operation} failed with status {code}: {message}"),
        },
    }
}

/// Maps an Octocrab transport failure.
pub(super) fn map_octocrab_error(operation: &str, error: &octocrab::Error) -> ActivityError {
    ActivityError::Network {
        message: format!("{operation} failed: {error}"),
    }
}
