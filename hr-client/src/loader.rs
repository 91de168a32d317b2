//! Stale-response guard for overlapping permission fetches
//!
//! Selecting users in quick succession issues overlapping aggregated-view
//! fetches with no ordering guarantee between their responses. Each fetch is
//! tagged with a generation; a response whose generation is no longer
//! current is discarded rather than overwriting newer state.

use std::sync::atomic::{AtomicU64, Ordering};

use shared::client::UserPermissionsView;
use tracing::warn;

use crate::{ClientResult, HttpClient};

/// Monotonic generation counter
///
/// `begin` stamps a new fetch; `is_current` tells whether a stamped fetch is
/// still the latest one.
#[derive(Debug, Default)]
pub struct Generation {
    counter: AtomicU64,
}

impl Generation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stamp a new fetch, invalidating all earlier stamps
    pub fn begin(&self) -> u64 {
        self.counter.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Whether `stamp` is still the latest fetch
    pub fn is_current(&self, stamp: u64) -> bool {
        self.counter.load(Ordering::SeqCst) == stamp
    }
}

/// Loader for the aggregated permission view of the selected user
///
/// `load` resolves to `Ok(None)` when a newer selection superseded the fetch
/// while it was in flight; the caller keeps its current state in that case.
#[derive(Debug)]
pub struct PermissionLoader {
    client: HttpClient,
    generation: Generation,
}

impl PermissionLoader {
    pub fn new(client: HttpClient) -> Self {
        Self {
            client,
            generation: Generation::new(),
        }
    }

    /// Fetch the aggregated view for `user_id`, discarding stale responses
    pub async fn load(&self, user_id: &str) -> ClientResult<Option<UserPermissionsView>> {
        let stamp = self.generation.begin();

        let view = self.client.user_permissions(user_id).await?;

        if !self.generation.is_current(stamp) {
            warn!(user_id, "Discarding stale permission response");
            return Ok(None);
        }

        Ok(Some(view))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_stamp_is_current() {
        let generation = Generation::new();
        let first = generation.begin();
        assert!(generation.is_current(first));
    }

    #[test]
    fn test_newer_fetch_invalidates_older_stamp() {
        let generation = Generation::new();

        let first = generation.begin();
        let second = generation.begin();

        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));
    }

    #[test]
    fn test_stamps_are_strictly_increasing() {
        let generation = Generation::new();
        let a = generation.begin();
        let b = generation.begin();
        let c = generation.begin();
        assert!(a < b && b < c);
    }
}
