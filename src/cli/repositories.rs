//! Single upstream page of repositories.

use std::io::{self, Write};
use std::sync::Arc;

use repo_pulse::{ActivityError, ActivityIntake, PulseConfig, UpstreamTransport, WorkerPool};

use super::output::{write_json, write_repository_page};

/// Lists one upstream page of repositories without fetching commits.
///
/// # Errors
///
/// Returns [`ActivityError::MissingIdentifier`] when no username is
/// configured and propagates upstream failures.
pub async fn run(
    config: &PulseConfig,
    transport: Arc<dyn UpstreamTransport>,
    pool: WorkerPool,
) -> Result<(), ActivityError> {
    let mut stdout = io::stdout().lock();
    run_with_writer(config, transport, pool, &mut stdout).await
}

/// Repository page listing writing to a custom writer.
///
/// This function is exposed for testing with mock transports.
pub async fn run_with_writer<W: Write>(
    config: &PulseConfig,
    transport: Arc<dyn UpstreamTransport>,
    pool: WorkerPool,
    writer: &mut W,
) -> Result<(), ActivityError> {
    let username = config.require_username()?;
    let page = config.repo_page.unwrap_or(1);
    let per_page = config.upstream_per_page()?;
    let intake = ActivityIntake::new(transport, pool);

    let result = intake
        .fetch_repository_page(username, page, per_page)
        .await?;

    if config.json {
        write_json(writer, &result)
    } else {
        write_repository_page(writer, username, &result)
    }
}
