//! Scenario state and runners for the activity listing BDD tests.

use std::sync::Arc;

use repo_pulse::{
    ActivityError, ActivityIntake, OctocrabTransport, PageResult, RepositoryActivity,
    RepositorySummary, WorkerPool,
};
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use wiremock::MockServer;

use super::runtime::{SharedRuntime, ensure_runtime_and_server};

#[derive(ScenarioState, Default)]
pub(crate) struct ActivityState {
    pub(crate) runtime: Slot<SharedRuntime>,
    pub(crate) server: Slot<MockServer>,
    pub(crate) repositories: Slot<Vec<RepositorySummary>>,
    pub(crate) page: Slot<PageResult<RepositoryActivity>>,
    pub(crate) error: Slot<ActivityError>,
}

impl ActivityState {
    /// Stores the outcome of a run, clearing whichever slot it replaces.
    pub(crate) fn record<T>(&self, slot: &Slot<T>, result: Result<T, ActivityError>) {
        match result {
            Ok(value) => {
                let _had_previous_error = self.error.take().is_some();
                slot.set(value);
            }
            Err(error) => {
                let _had_previous_result = slot.take().is_some();
                self.error.set(error);
            }
        }
    }

    pub(crate) fn server_uri(&self) -> String {
        self.server
            .with_ref(MockServer::uri)
            .unwrap_or_else(|| panic!("mock server URL missing"))
    }
}

/// Ensures the runtime and server are initialised in `ActivityState`.
pub(crate) fn ensure_runtime(state: &ActivityState) -> SharedRuntime {
    ensure_runtime_and_server(&state.runtime, &state.server)
        .unwrap_or_else(|error| panic!("failed to initialise runtime: {error}"))
}

/// Octocrab clients must be built inside the runtime.
fn intake(state: &ActivityState, concurrency: usize) -> Result<ActivityIntake, ActivityError> {
    let transport = OctocrabTransport::for_api_base(&state.server_uri(), None)?;
    Ok(ActivityIntake::new(
        Arc::new(transport),
        WorkerPool::new(concurrency),
    ))
}

pub(crate) fn run_repository_listing(
    state: &ActivityState,
    account: &str,
) -> Result<Vec<RepositorySummary>, ActivityError> {
    let runtime = ensure_runtime(state);

    runtime.block_on(async {
        let activity_intake = intake(state, 1)?;
        activity_intake.fetch_repositories(account).await
    })
}

pub(crate) fn run_activity_page(
    state: &ActivityState,
    account: &str,
    limit: usize,
    page: usize,
    size: usize,
) -> Result<PageResult<RepositoryActivity>, ActivityError> {
    let runtime = ensure_runtime(state);

    runtime.block_on(async {
        let activity_intake = intake(state, 2)?;
        activity_intake
            .fetch_activity_page(account, limit, page, size)
            .await
    })
}
