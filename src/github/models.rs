//! Data models for repositories, commits and aggregated activity.
//!
//! The `Api*` structs mirror the subset of GitHub's JSON payloads the crate
//! reads. Every field is optional so that mapping never fails: missing keys
//! become empty strings, `false` or `None`.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::pagination::UpstreamPage;

/// Summary of one repository as listed by GitHub.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RepositorySummary {
    /// Short repository name.
    pub name: String,
    /// `owner/name` form.
    pub full_name: String,
    /// Whether the repository is private.
    pub is_private: bool,
    /// Whether the repository is a fork.
    pub is_fork: bool,
    /// Browser URL of the repository.
    pub html_url: String,
    /// Name of the default branch.
    pub default_branch: String,
}

/// A single commit as returned by the commit listing endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CommitRecord {
    /// Commit SHA.
    pub sha: String,
    /// Full commit message.
    pub message: String,
    /// Git author name.
    pub author_name: String,
    /// Git author email.
    pub author_email: String,
    /// Author date, when present and parseable.
    pub timestamp: Option<DateTime<FixedOffset>>,
    /// Browser URL of the commit.
    pub html_url: String,
}

impl CommitRecord {
    /// First line of the commit message.
    #[must_use]
    pub fn summary(&self) -> &str {
        self.message.lines().next().unwrap_or_default()
    }
}

/// One repository paired with its most recent commits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepositoryActivity {
    /// Repository the commits belong to.
    pub repository: RepositorySummary,
    /// Commits in upstream (newest first) order.
    pub commits: Vec<CommitRecord>,
}

/// One upstream page of repositories.
pub type RepositoryPage = UpstreamPage<RepositorySummary>;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ApiRepository {
    name: Option<String>,
    full_name: Option<String>,
    private: Option<bool>,
    fork: Option<bool>,
    html_url: Option<String>,
    default_branch: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ApiCommit {
    sha: Option<String>,
    html_url: Option<String>,
    commit: Option<ApiCommitDetail>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ApiCommitDetail {
    message: Option<String>,
    author: Option<ApiCommitAuthor>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ApiCommitAuthor {
    name: Option<String>,
    email: Option<String>,
    date: Option<String>,
}

impl From<ApiRepository> for RepositorySummary {
    fn from(value: ApiRepository) -> Self {
        Self {
            name: value.name.unwrap_or_default(),
            full_name: value.full_name.unwrap_or_default(),
            is_private: value.private.unwrap_or_default(),
            is_fork: value.fork.unwrap_or_default(),
            html_url: value.html_url.unwrap_or_default(),
            default_branch: value.default_branch.unwrap_or_default(),
        }
    }
}

impl From<ApiCommit> for CommitRecord {
    fn from(value: ApiCommit) -> Self {
        let detail = value.commit.unwrap_or_default();
        let author = detail.author.unwrap_or_default();
        Self {
            sha: value.sha.unwrap_or_default(),
            message: detail.message.unwrap_or_default(),
            author_name: author.name.unwrap_or_default(),
            author_email: author.email.unwrap_or_default(),
            timestamp: author
                .date
                .as_deref()
                .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok()),
            html_url: value.html_url.unwrap_or_default(),
        }
    }
}

/// Maps a raw repository object. Never fails.
#[must_use]
pub fn map_repository(raw: Value) -> RepositorySummary {
    serde_json::from_value::<ApiRepository>(raw)
        .unwrap_or_default()
        .into()
}

/// Maps a raw commit object. Never fails.
#[must_use]
pub fn map_commit(raw: Value) -> CommitRecord {
    serde_json::from_value::<ApiCommit>(raw)
        .unwrap_or_default()
        .into()
}
