//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.repo-pulse.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `REPO_PULSE_USERNAME`, `REPO_PULSE_TOKEN`,
//!    or legacy `GITHUB_TOKEN`
//! 4. **Command-line arguments** – `--username`/`-u`, `--token`/`-t`, ...
//!
//! # Configuration File
//!
//! ```toml
//! username = "octocat"
//! token = "ghp_example"
//! limit = 10
//! size = 25
//! concurrency = 8
//! ```

use std::env;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::activity::DEFAULT_POOL_SIZE;
use crate::github::error::ActivityError;
use crate::github::locator::DEFAULT_API_BASE;

/// Largest value accepted for `limit`, `size` and `per_page`.
pub const MAX_PAGE_SIZE: usize = 100;

const DEFAULT_COMMIT_LIMIT: usize = 20;
const DEFAULT_ACTIVITY_PAGE_SIZE: usize = 20;
const DEFAULT_REPOSITORY_PER_PAGE: usize = 30;
const DEFAULT_LOG_LEVEL: &str = "warn";

/// Operation mode determined by configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationMode {
    /// One zero-indexed page of repositories with their commits.
    ActivityPage,
    /// Every repository with its commits, unpaginated.
    FullActivity,
    /// One upstream page of repositories, without commits.
    RepositoryPage,
}

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Environment Variables
///
/// - `REPO_PULSE_USERNAME` or `--username`: GitHub user or organization
/// - `REPO_PULSE_TOKEN`, `GITHUB_TOKEN`, or `--token`: Authentication token
/// - `REPO_PULSE_API_BASE` or `--api-base`: REST API base URL
/// - `REPO_PULSE_LIMIT` or `--limit`: Commits per repository
/// - `REPO_PULSE_CONCURRENCY` or `--concurrency`: Concurrent commit fetches
///
/// # Example
///
/// ```no_run
/// use ortho_config::OrthoConfig;
/// use repo_pulse::PulseConfig;
///
/// let config = PulseConfig::load().expect("failed to load configuration");
/// let username = config.require_username().expect("username required");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "REPO_PULSE",
    discovery(
        dotfile_name = ".repo-pulse.toml",
        config_file_name = "repo-pulse.toml",
        app_name = "repo-pulse"
    )
)]
pub struct PulseConfig {
    /// GitHub user or organization whose activity is listed.
    ///
    /// Can be provided via:
    /// - CLI: `--username <NAME>` or `-u <NAME>`
    /// - Environment: `REPO_PULSE_USERNAME`
    /// - Config file: `username = "..."`
    #[ortho_config(cli_short = 'u')]
    pub username: Option<String>,

    /// Personal access token for GitHub API authentication.
    ///
    /// Optional; anonymous requests are subject to a much lower rate limit.
    ///
    /// Can be provided via:
    /// - CLI: `--token <TOKEN>` or `-t <TOKEN>`
    /// - Environment: `REPO_PULSE_TOKEN` or `GITHUB_TOKEN` (legacy)
    /// - Config file: `token = "..."`
    #[ortho_config(cli_short = 't')]
    pub token: Option<String>,

    /// GitHub REST API base URL. Defaults to `https://api.github.com`.
    #[ortho_config()]
    pub api_base: String,

    /// Maximum commits listed per repository (1 to 100).
    #[ortho_config(cli_short = 'l')]
    pub limit: usize,

    /// Zero-based page of repositories in activity page mode.
    #[ortho_config(cli_short = 'p')]
    pub page: usize,

    /// Repositories per page in activity page mode (1 to 100).
    #[ortho_config(cli_short = 's')]
    pub size: usize,

    /// Repositories per upstream page in repository page mode (1 to 100).
    #[ortho_config()]
    pub per_page: usize,

    /// One-based upstream page to list. Selects repository page mode.
    #[ortho_config()]
    pub repo_page: Option<u32>,

    /// Lists every repository with its commits instead of a single page.
    ///
    /// Can be provided via:
    /// - CLI: `--all` or `-A`
    /// - Config file: `all = true`
    #[ortho_config()]
    pub all: bool,

    /// Number of commit fetches allowed to run at once.
    #[ortho_config()]
    pub concurrency: usize,

    /// Writes JSON instead of the text summary.
    #[ortho_config()]
    pub json: bool,

    /// Default log filter when `RUST_LOG` is unset.
    #[ortho_config()]
    pub log_level: String,

    /// Emits logs as JSON lines.
    #[ortho_config()]
    pub json_logs: bool,
}

impl Default for PulseConfig {
    fn default() -> Self {
        Self {
            username: None,
            token: None,
            api_base: DEFAULT_API_BASE.to_owned(),
            limit: DEFAULT_COMMIT_LIMIT,
            page: 0,
            size: DEFAULT_ACTIVITY_PAGE_SIZE,
            per_page: DEFAULT_REPOSITORY_PER_PAGE,
            repo_page: None,
            all: false,
            concurrency: DEFAULT_POOL_SIZE,
            json: false,
            log_level: DEFAULT_LOG_LEVEL.to_owned(),
            json_logs: false,
        }
    }
}

impl PulseConfig {
    /// Resolves the token from configuration or the legacy `GITHUB_TOKEN`
    /// environment variable. Blank values count as absent.
    #[must_use]
    pub fn resolve_token(&self) -> Option<String> {
        self.token
            .clone()
            .or_else(|| env::var("GITHUB_TOKEN").ok())
            .filter(|token| !token.trim().is_empty())
    }

    /// Returns the username or an error if missing.
    ///
    /// # Errors
    ///
    /// Returns [`ActivityError::MissingIdentifier`] when no non-blank
    /// username is configured.
    pub fn require_username(&self) -> Result<&str, ActivityError> {
        self.username
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .ok_or(ActivityError::MissingIdentifier)
    }

    /// Determines the operation mode.
    ///
    /// `repo_page` selects `RepositoryPage`, otherwise `all` selects
    /// `FullActivity`, otherwise `ActivityPage`.
    #[must_use]
    pub const fn operation_mode(&self) -> OperationMode {
        if self.repo_page.is_some() {
            OperationMode::RepositoryPage
        } else if self.all {
            OperationMode::FullActivity
        } else {
            OperationMode::ActivityPage
        }
    }

    /// Upstream page size as sent to GitHub.
    ///
    /// # Errors
    ///
    /// Returns [`ActivityError::Configuration`] when `per_page` is out of
    /// range.
    pub fn upstream_per_page(&self) -> Result<u8, ActivityError> {
        check_range("per_page", self.per_page)?;
        u8::try_from(self.per_page).map_err(|error| ActivityError::Configuration {
            message: format!("per_page: {error}"),
        })
    }

    /// Validates the presentation-layer bounds.
    ///
    /// # Errors
    ///
    /// Returns [`ActivityError::Configuration`] naming the first field out of
    /// range, or [`ActivityError::MissingIdentifier`] when no username is
    /// set.
    pub fn validate(&self) -> Result<(), ActivityError> {
        self.require_username()?;
        check_range("limit", self.limit)?;
        check_range("size", self.size)?;
        check_range("per_page", self.per_page)?;

        if self.repo_page == Some(0) {
            return Err(ActivityError::Configuration {
                message: "repo_page must be at least 1".to_owned(),
            });
        }

        if self.concurrency == 0 {
            return Err(ActivityError::Configuration {
                message: "concurrency must be at least 1".to_owned(),
            });
        }

        Ok(())
    }
}

fn check_range(field: &str, value: usize) -> Result<(), ActivityError> {
    if (1..=MAX_PAGE_SIZE).contains(&value) {
        Ok(())
    } else {
        Err(ActivityError::Configuration {
            message: format!("{field} must be between 1 and {MAX_PAGE_SIZE}, got {value}"),
        })
    }
}

#[cfg(test)]
mod tests;
