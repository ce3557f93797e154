//! CLI operation mode handlers.
//!
//! This module contains the implementations for the operation modes:
//! - [`activity`]: Repositories with their recent commits, paged or in full
//! - [`repositories`]: One upstream page of repositories
//!
//! Output formatting utilities are in [`output`].

use repo_pulse::ActivityError;

pub mod activity;
pub mod output;
pub mod repositories;

#[cfg(test)]
pub mod test_utils;

/// Process exit code for a failed run.
///
/// Rate limiting exits with `3` so callers can retry later, other upstream
/// failures with `2`, configuration and input problems with `1`.
pub const fn exit_code(error: &ActivityError) -> u8 {
    if error.is_rate_limited() {
        3
    } else if error.is_upstream() {
        2
    } else {
        1
    }
}
