//! Queue Statistics Module
//!
//! Counts how entries enter and leave the queue.

// == Queue Stats ==
/// Lifetime counters for a single queue instance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueueStats {
    /// Number of strings appended
    pub accepted: u64,
    /// Number of entries removed because the queue overflowed
    pub evictions: u64,
    /// Number of entries removed by their own timer
    pub expirations: u64,
    /// Current number of entries in the queue
    pub live_entries: usize,
}

impl QueueStats {
    /// Creates a new QueueStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_accepted(&mut self) {
        self.accepted += 1;
    }

    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    pub fn record_expiration(&mut self) {
        self.expirations += 1;
    }

    pub fn set_live_entries(&mut self, count: usize) {
        self.live_entries = count;
    }
}
