//! Expiry Timer Task
//!
//! One-shot task per stored palindrome that removes it once its TTL elapses.

use std::sync::Weak;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::queue::{BoundedExpiringQueue, EntryId};

/// Spawns the timer that expires a single queue entry.
///
/// The task sleeps for `ttl`, then takes the write lock and removes the entry
/// with the given id. It holds only a weak reference, so a queue that has been
/// dropped is never kept alive by its timers; in that case the task just ends.
///
/// # Arguments
/// * `queue` - Weak handle to the shared queue
/// * `id` - Entry to remove
/// * `ttl` - Delay before removal
///
/// # Returns
/// A JoinHandle whose abort handle the queue keeps so the timer can be
/// cancelled when the entry is evicted first.
///
/// # Example
/// ```ignore
/// let weak = Arc::downgrade(&queue);
/// let mut guard = queue.write().await;
/// guard.try_insert(value, |id, ttl| spawn_expiry_timer(weak, id, ttl).abort_handle());
/// ```
pub fn spawn_expiry_timer(
    queue: Weak<RwLock<BoundedExpiringQueue>>,
    id: EntryId,
    ttl: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        tokio::time::sleep(ttl).await;

        let Some(queue) = queue.upgrade() else {
            debug!("Queue dropped before {} expired", id);
            return;
        };

        let removed = queue.write().await.expire_one(id);
        if removed {
            debug!("TTL expiry: removed {} after {:?}", id, ttl);
        } else {
            debug!("TTL expiry: {} already gone", id);
        }
    })
}
