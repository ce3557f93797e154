//! repo-pulse library crate aggregating GitHub repository activity.
//!
//! The library lists every repository of a GitHub user or organization by
//! following `Link` pagination headers, fetches each repository's most recent
//! commits on a bounded worker pool and re-paginates the merged result in
//! memory. Upstream failures surface as [`ActivityError`] variants that keep
//! rate limiting distinguishable from other errors.

pub mod activity;
pub mod config;
pub mod github;

pub use activity::{ActivityAggregator, ActivityIntake, PageResult, WorkerPool};
pub use config::{OperationMode, PulseConfig};
pub use github::{
    ActivityError, CommitRecord, OctocrabTransport, PersonalAccessToken, RepositoryActivity,
    RepositoryPage, RepositorySummary, UpstreamTransport,
};
