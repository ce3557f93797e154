//! Identity wrappers and upstream route builders.

use std::fmt;

use url::Url;

use super::error::ActivityError;

/// Default GitHub REST API base URL.
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Personal access token wrapper enforcing presence.
#[derive(Clone, PartialEq, Eq)]
pub struct PersonalAccessToken(String);

impl PersonalAccessToken {
    /// Validates that the token is non-empty and trims whitespace.
    ///
    /// # Errors
    ///
    /// Returns `ActivityError::Configuration` when the supplied string is
    /// blank.
    pub fn new(token: impl AsRef<str>) -> Result<Self, ActivityError> {
        let trimmed = token.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ActivityError::Configuration {
                message: "GitHub token must not be blank".to_owned(),
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the token value.
    #[must_use]
    pub const fn value(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for PersonalAccessToken {
    fn as_ref(&self) -> &str {
        self.value()
    }
}

impl fmt::Debug for PersonalAccessToken {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("PersonalAccessToken(***)")
    }
}

/// GitHub user or organization login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountName(String);

impl AccountName {
    /// Trims and validates an account identifier.
    ///
    /// The login becomes a single path segment, so separators, dot segments
    /// and characters that would start a query, a fragment or an escape are
    /// rejected.
    ///
    /// # Errors
    ///
    /// Returns `ActivityError::MissingIdentifier` when the value is blank and
    /// `ActivityError::Configuration` when it is not a single path segment.
    pub fn new(value: impl AsRef<str>) -> Result<Self, ActivityError> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ActivityError::MissingIdentifier);
        }

        let forbidden = |character: char| {
            matches!(character, '/' | '\\' | '?' | '#' | '%') || character.is_whitespace()
        };
        if trimmed.contains(forbidden) || matches!(trimmed, "." | "..") {
            return Err(ActivityError::Configuration {
                message: format!("account name `{trimmed}` is not a valid GitHub login"),
            });
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the login.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for AccountName {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

/// Upstream namespace a repository listing is requested from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Namespace {
    /// `/users/{login}/repos`.
    User,
    /// `/orgs/{login}/repos`.
    Organization,
}

impl Namespace {
    const fn segment(self) -> &'static str {
        match self {
            Self::User => "users",
            Self::Organization => "orgs",
        }
    }

    /// Route of one repository listing page, sorted by last update.
    #[must_use]
    pub fn repositories_path(self, account: &AccountName, page: u32, per_page: u8) -> String {
        format!(
            "/{}/{}/repos?per_page={per_page}&page={page}&sort=updated",
            self.segment(),
            account.as_str()
        )
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User => formatter.write_str("user"),
            Self::Organization => formatter.write_str("organization"),
        }
    }
}

/// Route of the most recent commits of one repository.
#[must_use]
pub fn commits_path(owner: &AccountName, repository: &str, per_page: u8) -> String {
    format!(
        "/repos/{}/{repository}/commits?per_page={per_page}",
        owner.as_str()
    )
}

/// Parses the configured API base URL.
///
/// # Errors
///
/// Returns `ActivityError::InvalidUrl` when the value is not an absolute
/// HTTP(S) URL.
pub fn parse_api_base(raw: &str) -> Result<Url, ActivityError> {
    let parsed = Url::parse(raw.trim())
        .map_err(|error| ActivityError::InvalidUrl(format!("{raw}: {error}")))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ActivityError::InvalidUrl(format!(
            "{raw}: expected an http or https URL"
        )));
    }
    Ok(parsed)
}

/// Resolves a route or an absolute URL against the API base.
///
/// Absolute URLs (as found in `Link` headers) are returned verbatim; routes
/// are appended to the base path so that GitHub Enterprise prefixes such as
/// `/api/v3` are kept.
///
/// # Errors
///
/// Returns `ActivityError::InvalidUrl` when the result is not a valid URL.
pub fn resolve_target(api_base: &Url, target: &str) -> Result<Url, ActivityError> {
    if let Ok(absolute) = Url::parse(target) {
        return Ok(absolute);
    }

    let base_path = api_base.path().trim_end_matches('/');
    let route = target.trim_start_matches('/');
    let mut joined = api_base.clone();
    joined.set_query(None);
    joined.set_path(&format!("{base_path}/"));
    joined
        .join(route)
        .map_err(|error| ActivityError::InvalidUrl(format!("{target}: {error}")))
}
