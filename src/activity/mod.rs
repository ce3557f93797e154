//! Repository activity aggregation.
//!
//! Commit fetches fan out over a bounded [`WorkerPool`] and fan back in in
//! repository order. [`PageResult`] re-paginates the aggregated listing in
//! memory and [`ActivityIntake`] ties the flows together.

pub mod aggregator;
pub mod intake;
pub mod page;
pub mod pool;

pub use aggregator::ActivityAggregator;
pub use intake::ActivityIntake;
pub use page::{PageResult, slice};
pub use pool::{DEFAULT_POOL_SIZE, WorkerPool};
