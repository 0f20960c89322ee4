//! Queue Store Module
//!
//! Insertion-ordered store with a size bound and a per-entry time-to-live.

use std::collections::VecDeque;
use std::time::Duration;

use tokio::task::AbortHandle;
use tracing::debug;

use crate::queue::{EntryId, QueueEntry, QueueStats};

// == Bounded Expiring Queue ==
/// FIFO of accepted strings.
///
/// Invariants:
/// - `len() <= capacity` after every operation
/// - every entry owns exactly one pending timer until it leaves the queue,
///   and that timer is aborted whenever the entry leaves for another reason
#[derive(Debug)]
pub struct BoundedExpiringQueue {
    /// Live entries, oldest at the front
    entries: VecDeque<QueueEntry>,
    /// Maximum number of entries kept
    capacity: usize,
    /// Lifetime of every entry
    ttl: Duration,
    /// Next id to hand out
    next_id: u64,
    stats: QueueStats,
}

impl BoundedExpiringQueue {
    // == Constructor ==
    /// Creates an empty queue.
    ///
    /// # Arguments
    /// * `capacity` - Maximum number of entries kept at once
    /// * `ttl` - How long each entry lives before its timer removes it
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity.saturating_add(1)),
            capacity,
            ttl,
            next_id: 0,
            stats: QueueStats::new(),
        }
    }

    // == Try Insert ==
    /// Appends `value` and schedules its removal.
    ///
    /// `schedule` receives the new entry's id and the TTL and must start the
    /// task that will later call [`expire_one`](Self::expire_one) with that id.
    /// If the append pushes the queue over capacity, the oldest entry is
    /// dropped and its timer aborted.
    ///
    /// Insertion cannot fail, so this always returns `true`.
    pub fn try_insert<F>(&mut self, value: String, schedule: F) -> bool
    where
        F: FnOnce(EntryId, Duration) -> AbortHandle,
    {
        let id = EntryId(self.next_id);
        self.next_id += 1;

        let timer = schedule(id, self.ttl);
        self.entries.push_back(QueueEntry::new(id, value, self.ttl, timer));
        self.stats.record_accepted();

        if self.entries.len() > self.capacity {
            if let Some(mut evicted) = self.entries.pop_front() {
                evicted.cancel_timer();
                self.stats.record_eviction();
                debug!("Evicted {} to stay within capacity {}", evicted.id, self.capacity);
            }
        }

        self.stats.set_live_entries(self.entries.len());
        true
    }

    // == Expire One ==
    /// Removes the entry with the given id, if it is still queued.
    ///
    /// With a uniform TTL this is always the head, but the lookup is by
    /// identity so an entry that was already evicted is never confused with
    /// whichever entry now sits at the front.
    ///
    /// Returns false if no entry with that id is present.
    pub fn expire_one(&mut self, id: EntryId) -> bool {
        let position = self.entries.iter().position(|e| e.id == id);

        match position.and_then(|idx| self.entries.remove(idx)) {
            Some(mut expired) => {
                // The timer calling us is finishing anyway; just drop the handle
                expired.cancel_timer();
                self.stats.record_expiration();
                self.stats.set_live_entries(self.entries.len());
                debug!("Expired {}", expired.id);
                true
            }
            None => false,
        }
    }

    // == Snapshot ==
    /// Returns the live values, oldest first, as an owned copy.
    ///
    /// Entries past their deadline whose timer has not run yet are left out.
    pub fn snapshot(&self) -> Vec<String> {
        self.entries
            .iter()
            .filter(|e| !e.is_expired())
            .map(|e| e.value.clone())
            .collect()
    }

    // == Shutdown ==
    /// Aborts every pending timer and empties the queue.
    ///
    /// Returns the number of entries dropped.
    pub fn shutdown(&mut self) -> usize {
        let count = self.entries.len();
        for mut entry in self.entries.drain(..) {
            entry.cancel_timer();
        }
        self.stats.set_live_entries(0);
        count
    }

    // == Stats ==
    /// Returns current queue statistics.
    pub fn stats(&self) -> QueueStats {
        self.stats.clone()
    }

    /// Returns the current number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

impl Drop for BoundedExpiringQueue {
    fn drop(&mut self) {
        self.shutdown();
    }
}
