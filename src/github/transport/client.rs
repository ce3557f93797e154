//! Octocrab client construction.

use http::header::{ACCEPT, HeaderMap, HeaderName, HeaderValue};
use http::Uri;
use octocrab::Octocrab;
use url::Url;

use crate::github::error::ActivityError;
use crate::github::locator::PersonalAccessToken;

const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";
const API_VERSION_HEADER: &str = "x-github-api-version";
const API_VERSION: &str = "2022-11-28";

/// Builds an Octocrab client for the API base URL, authenticated when a
/// token is supplied.
///
/// # Errors
///
/// Returns `ActivityError::InvalidUrl` when the base URI cannot be parsed or
/// `ActivityError::Configuration` when Octocrab fails to construct a client.
pub(super) fn build_octocrab_client(
    token: Option<&PersonalAccessToken>,
    api_base: &Url,
) -> Result<Octocrab, ActivityError> {
    let base_uri: Uri = api_base
        .as_str()
        .parse::<Uri>()
        .map_err(|error| ActivityError::InvalidUrl(error.to_string()))?;

    let mut builder = Octocrab::builder();
    if let Some(value) = token {
        builder = builder.personal_token(value.value());
    }

    builder
        .base_uri(base_uri)
        .map_err(|error| ActivityError::InvalidUrl(error.to_string()))?
        .build()
        .map_err(|error| ActivityError::Configuration {
            message: format!("build GitHub client failed: {error}"),
        })
}

/// Media type and API version headers for raw requests. Headers added on the
/// Octocrab builder are not applied to `_get_with_headers`.
pub(super) fn github_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_MEDIA_TYPE));
    headers.insert(
        HeaderName::from_static(API_VERSION_HEADER),
        HeaderValue::from_static(API_VERSION),
    );
    headers
}
