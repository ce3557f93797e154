//! Bounded worker pool shared by aggregation calls.

use std::sync::Arc;

use tokio::sync::{OwnedSemaphorePermit, Semaphore};

use crate::github::ActivityError;

/// Default number of concurrent upstream fetches.
pub const DEFAULT_POOL_SIZE: usize = 10;

/// Fixed-size pool of fetch slots.
///
/// Cloning the handle shares the slots, so every aggregation run that uses a
/// clone competes for the same capacity. Work beyond the capacity waits in
/// the semaphore queue.
#[derive(Debug, Clone)]
pub struct WorkerPool {
    permits: Arc<Semaphore>,
    capacity: usize,
}

impl WorkerPool {
    /// Creates a pool with `capacity` slots. A capacity of 0 is raised to 1.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let bounded = capacity.clamp(1, Semaphore::MAX_PERMITS);
        Self {
            permits: Arc::new(Semaphore::new(bounded)),
            capacity: bounded,
        }
    }

    /// Number of slots in the pool.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Slots not currently held by a running unit of work.
    #[must_use]
    pub fn available(&self) -> usize {
        self.permits.available_permits()
    }

    /// Waits for a free slot. The slot is released when the permit drops.
    ///
    /// # Errors
    ///
    /// Returns `ActivityError::WorkerPool` if the pool has been closed.
    pub async fn acquire(&self) -> Result<OwnedSemaphorePermit, ActivityError> {
        Arc::clone(&self.permits)
            .acquire_owned()
            .await
            .map_err(|error| ActivityError::WorkerPool {
                message: format!("worker pool closed: {error}"),
            })
    }
}

impl Default for WorkerPool {
    fn default() -> Self {
        Self::new(DEFAULT_POOL_SIZE)
    }
}
