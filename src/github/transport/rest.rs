//! Octocrab-backed transport performing raw `GET` requests.

use async_trait::async_trait;
use http::header::LINK;
use http::Uri;
use octocrab::Octocrab;
use url::Url;

use crate::github::error::ActivityError;
use crate::github::locator::{PersonalAccessToken, parse_api_base, resolve_target};
use crate::github::rate_limit::RateLimitInfo;

use super::client::{build_octocrab_client, github_headers};
use super::error_mapping::{map_http_error, map_octocrab_error};
use super::http_utils::{decode_items, extract_github_message, header_to_string};
use super::{UpstreamResponse, UpstreamTransport};

/// Transport that talks to the GitHub REST API through Octocrab.
#[derive(Debug, Clone)]
pub struct OctocrabTransport {
    client: Octocrab,
    api_base: Url,
}

impl OctocrabTransport {
    /// Wraps an existing Octocrab client.
    #[must_use]
    pub const fn new(client: Octocrab, api_base: Url) -> Self {
        Self { client, api_base }
    }

    /// Builds a transport for the API base URL, authenticated when a token
    /// is supplied.
    ///
    /// Must be called from within a Tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns `ActivityError::InvalidUrl` when the base URL cannot be parsed
    /// or `ActivityError::Configuration` when Octocrab fails to construct a
    /// client.
    pub fn for_api_base(
        api_base: &str,
        token: Option<&PersonalAccessToken>,
    ) -> Result<Self, ActivityError> {
        let base = parse_api_base(api_base)?;
        let client = build_octocrab_client(token, &base)?;
        Ok(Self::new(client, base))
    }
}

#[async_trait]
impl UpstreamTransport for OctocrabTransport {
    #[tracing::instrument(level = "debug", skip(self))]
    async fn get(&self, target: &str) -> Result<UpstreamResponse, ActivityError> {
        let url = resolve_target(&self.api_base, target)?;
        let uri: Uri = url
            .as_str()
            .parse::<Uri>()
            .map_err(|error| ActivityError::InvalidUrl(error.to_string()))?;
        let operation = format!("GET {}", url.path());

        let response = self
            .client
            ._get_with_headers(uri, Some(github_headers()))
            .await
            .map_err(|error| map_octocrab_error(&operation, &error))?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = self
            .client
            .body_to_string(response)
            .await
            .map_err(|error| ActivityError::Network {
                message: format!("{operation} response body could not be read: {error}"),
            })?;

        if !status.is_success() {
            tracing::debug!("{operation} returned {status}");
            return Err(map_http_error(
                &operation,
                status,
                &headers,
                &body,
                extract_github_message(&body),
            ));
        }

        let items = decode_items(&body)?;
        Ok(UpstreamResponse {
            link: header_to_string(headers.get(LINK)),
            rate_limit: RateLimitInfo::from_headers(&headers),
            items,
        })
    }
}
