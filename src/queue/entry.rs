//! Queue Entry Module
//!
//! Defines a stored palindrome together with its expiry timer.

use std::fmt;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::task::AbortHandle;

// == Entry Id ==
/// Identity of an entry within a single queue instance.
///
/// Ids are handed out in insertion order and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntryId(pub u64);

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// == Queue Entry ==
/// A stored string and the timer that will remove it.
#[derive(Debug)]
pub struct QueueEntry {
    /// Identity used by the expiry timer
    pub id: EntryId,
    /// The submitted string, verbatim
    pub value: String,
    /// Insertion time
    pub created_at: DateTime<Utc>,
    /// Time at which the timer fires
    pub expires_at: DateTime<Utc>,
    /// Pending expiry task, None once cancelled
    timer: Option<AbortHandle>,
}

impl QueueEntry {
    // == Constructor ==
    /// Creates an entry expiring `ttl` from now.
    pub fn new(id: EntryId, value: String, ttl: Duration, timer: AbortHandle) -> Self {
        let created_at = Utc::now();
        let expires_at = chrono::Duration::from_std(ttl)
            .ok()
            .and_then(|ttl| created_at.checked_add_signed(ttl))
            .unwrap_or(DateTime::<Utc>::MAX_UTC);

        Self {
            id,
            value,
            created_at,
            expires_at,
            timer: Some(timer),
        }
    }

    // == Is Expired ==
    /// True once the wall clock has reached `expires_at`.
    ///
    /// The timer, not this check, removes the entry.
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }

    // == Cancel Timer ==
    /// Aborts the pending expiry task. Calling it again is a no-op.
    pub fn cancel_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}
