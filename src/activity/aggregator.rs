//! Concurrent fan-out of commit fetches with ordered fan-in.

use tokio::task::JoinSet;

use crate::github::{AccountName, ActivityError, CommitFetcher, RepositoryActivity, RepositorySummary};

use super::pool::WorkerPool;

type IndexedActivity = Result<(usize, RepositoryActivity), ActivityError>;

/// Fetches recent commits for many repositories on a bounded pool.
#[derive(Clone)]
pub struct ActivityAggregator {
    fetcher: CommitFetcher,
    pool: WorkerPool,
}

impl ActivityAggregator {
    /// Creates an aggregator that schedules fetches on `pool`.
    #[must_use]
    pub const fn new(fetcher: CommitFetcher, pool: WorkerPool) -> Self {
        Self { fetcher, pool }
    }

    /// Pairs every repository with at most `per_repository_limit` commits.
    ///
    /// One fetch per repository is spawned; at most the pool's capacity run
    /// at once. Results come back in input order regardless of completion
    /// order, and nothing is returned until every fetch has finished.
    ///
    /// # Errors
    ///
    /// Returns the first failure to complete. Every other fetch is aborted
    /// at that point and no partial result is produced.
    pub async fn aggregate(
        &self,
        owner: &AccountName,
        repositories: Vec<RepositorySummary>,
        per_repository_limit: usize,
    ) -> Result<Vec<RepositoryActivity>, ActivityError> {
        if repositories.is_empty() {
            return Ok(Vec::new());
        }

        let total = repositories.len();
        tracing::debug!(
            "aggregating {total} repositories for {owner} on {} workers",
            self.pool.capacity()
        );

        let mut tasks = JoinSet::new();
        for (index, repository) in repositories.into_iter().enumerate() {
            self.spawn_fetch(&mut tasks, index, owner.clone(), repository, per_repository_limit);
        }

        collect_in_order(tasks, total).await
    }

    fn spawn_fetch(
        &self,
        tasks: &mut JoinSet<IndexedActivity>,
        index: usize,
        owner: AccountName,
        repository: RepositorySummary,
        limit: usize,
    ) {
        let fetcher = self.fetcher.clone();
        let pool = self.pool.clone();

        tasks.spawn(async move {
            let _permit = pool.acquire().await?;
            let commits = fetcher
                .fetch_recent(&owner, &repository.name, limit)
                .await?;
            Ok((
                index,
                RepositoryActivity {
                    repository,
                    commits,
                },
            ))
        });
    }
}

/// Drains `tasks` as they complete, writing each result back into its input
/// slot. The first failure aborts everything still running.
async fn collect_in_order(
    mut tasks: JoinSet<IndexedActivity>,
    total: usize,
) -> Result<Vec<RepositoryActivity>, ActivityError> {
    let mut slots: Vec<Option<RepositoryActivity>> =
        std::iter::repeat_with(|| None).take(total).collect();

    while let Some(joined) = tasks.join_next().await {
        let outcome = joined.unwrap_or_else(|error| {
            Err(ActivityError::WorkerPool {
                message: format!("commit fetch task failed: {error}"),
            })
        });

        match outcome {
            Ok((index, activity)) => {
                if let Some(slot) = slots.get_mut(index) {
                    *slot = Some(activity);
                }
            }
            Err(error) => {
                tasks.abort_all();
                tracing::debug!("aggregation aborted: {error}");
                return Err(error);
            }
        }
    }

    Ok(slots.into_iter().flatten().collect())
}
