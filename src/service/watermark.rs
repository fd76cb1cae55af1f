//! The shared "last processed update" watermark.

use tokio::sync::{Mutex, MutexGuard};
use tracing::info;

use crate::error::Result;
use crate::port::Messaging;

/// Process-lifetime watermark over provider update IDs.
///
/// Monotonically non-decreasing; advanced only to the maximum `update_id`
/// observed across a fully processed poll. The mutex is held for the whole
/// read-poll-filter-advance sequence of the reply job, serializing reply
/// executions against each other without ever blocking the notify job.
pub struct Watermark {
    inner: Mutex<i64>,
}

impl Watermark {
    pub fn new(initial: i64) -> Self {
        Self {
            inner: Mutex::new(initial),
        }
    }

    /// Seed the watermark at startup from one offset-less poll, taking the
    /// maximum observed update ID, or zero when the backlog is empty.
    pub async fn seed(messaging: &dyn Messaging) -> Result<Self> {
        let updates = messaging.get_updates(0).await?;
        let initial = updates.iter().map(|u| u.update_id).max().unwrap_or(0);
        info!(watermark = initial, "watermark seeded");
        Ok(Self::new(initial))
    }

    /// Take the lock for a full poll cycle. Advances go through the guard.
    pub async fn lock(&self) -> MutexGuard<'_, i64> {
        self.inner.lock().await
    }
}

/// Advance the guarded watermark, never moving it backwards.
pub fn advance(guard: &mut MutexGuard<'_, i64>, candidate: i64) {
    if candidate > **guard {
        **guard = candidate;
    }
}
