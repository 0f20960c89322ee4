//! Queue Module
//!
//! Bounded, time-expiring FIFO holding the accepted palindromes.

mod entry;
mod stats;
mod store;


use std::sync::Arc;
use tokio::sync::RwLock;

// Re-export public types
pub use entry::{EntryId, QueueEntry};
pub use stats::QueueStats;
pub use store::BoundedExpiringQueue;

/// Queue handle shared between the HTTP handlers and the expiry timers.
pub type SharedQueue = Arc<RwLock<BoundedExpiringQueue>>;

// == Public Constants ==
/// Number of entries kept when no capacity is configured
pub const DEFAULT_CAPACITY: usize = 10;

/// Entry lifetime in milliseconds when none is configured (10 minutes)
pub const DEFAULT_TTL_MS: u64 = 10 * 60 * 1000;
