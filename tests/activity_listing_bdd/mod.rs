//! Support modules for the activity listing BDD tests.

pub(crate) mod domain;
pub(crate) mod fixtures;
#[path = "../support/runtime.rs"]
pub(crate) mod runtime;
pub(crate) mod state;

pub(crate) use domain::{CommitCount, PageCount, RepositoryCount};
pub(crate) use fixtures::{generate_commits, generate_repositories, link_header};
pub(crate) use runtime::mount;
pub(crate) use state::{ActivityState, ensure_runtime, run_activity_page, run_repository_listing};
