//! Repository activity operations (paged and full).

use std::io::{self, Write};
use std::sync::Arc;

use repo_pulse::{ActivityError, ActivityIntake, PulseConfig, UpstreamTransport, WorkerPool};

use super::output::{write_activity_page_summary, write_activity_summary, write_json};

/// Lists one zero-indexed page of repositories with their recent commits.
///
/// # Errors
///
/// Returns [`ActivityError::MissingIdentifier`] when no username is
/// configured and propagates upstream failures.
pub async fn run_page(
    config: &PulseConfig,
    transport: Arc<dyn UpstreamTransport>,
    pool: WorkerPool,
) -> Result<(), ActivityError> {
    let mut stdout = io::stdout().lock();
    run_page_with_writer(config, transport, pool, &mut stdout).await
}

/// Lists every repository with its recent commits.
///
/// # Errors
///
/// Returns [`ActivityError::MissingIdentifier`] when no username is
/// configured and propagates upstream failures.
pub async fn run_full(
    config: &PulseConfig,
    transport: Arc<dyn UpstreamTransport>,
    pool: WorkerPool,
) -> Result<(), ActivityError> {
    let mut stdout = io::stdout().lock();
    run_full_with_writer(config, transport, pool, &mut stdout).await
}

/// Paged activity listing writing to a custom writer.
///
/// This function is exposed for testing with mock transports.
pub async fn run_page_with_writer<W: Write>(
    config: &PulseConfig,
    transport: Arc<dyn UpstreamTransport>,
    pool: WorkerPool,
    writer: &mut W,
) -> Result<(), ActivityError> {
    let username = config.require_username()?;
    let intake = ActivityIntake::new(transport, pool);

    let page = intake
        .fetch_activity_page(username, config.limit, config.page, config.size)
        .await?;

    if config.json {
        write_json(writer, &page)
    } else {
        write_activity_page_summary(writer, username, &page, config.limit)
    }
}

/// Full activity listing writing to a custom writer.
///
/// This function is exposed for testing with mock transports.
pub async fn run_full_with_writer<W: Write>(
    config: &PulseConfig,
    transport: Arc<dyn UpstreamTransport>,
    pool: WorkerPool,
    writer: &mut W,
) -> Result<(), ActivityError> {
    let username = config.require_username()?;
    let intake = ActivityIntake::new(transport, pool);

    let activity = intake.fetch_activity(username, config.limit).await?;

    if config.json {
        write_json(writer, &activity)
    } else {
        write_activity_summary(writer, username, &activity, config.limit)
    }
}
