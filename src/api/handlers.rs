//! API Handlers
//!
//! HTTP request handlers for the palindrome endpoints.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    body::Bytes,
    extract::State,
    http::{header::CONTENT_TYPE, HeaderMap},
    Json,
};
use tracing::{debug, info};

use crate::config::Config;
use crate::error::{PalindromeError, Result};
use crate::palindrome::is_palindrome;
use crate::queue::{BoundedExpiringQueue, QueueStats, SharedQueue};
use crate::tasks::spawn_expiry_timer;

/// Media type accepted by `POST /palindromes`
pub const PLAIN_TEXT: &str = "text/plain";

/// Application state shared across all handlers.
///
/// Owns the queue; each `AppState` is an isolated store.
#[derive(Clone)]
pub struct AppState {
    /// Stored palindromes
    pub queue: SharedQueue,
}

impl AppState {
    /// Creates a new AppState around the given queue.
    pub fn new(queue: BoundedExpiringQueue) -> Self {
        Self {
            queue: Arc::new(RwLock::new(queue)),
        }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(BoundedExpiringQueue::new(config.capacity, config.ttl()))
    }

    /// Stores a value and starts its expiry timer.
    pub async fn insert_palindrome(&self, value: String) -> bool {
        let weak = Arc::downgrade(&self.queue);
        let mut queue = self.queue.write().await;
        queue.try_insert(value, |id, ttl| {
            spawn_expiry_timer(weak, id, ttl).abort_handle()
        })
    }

    /// Returns the stored values, oldest first.
    pub async fn palindromes(&self) -> Vec<String> {
        self.queue.read().await.snapshot()
    }

    /// Cancels every pending timer and empties the queue.
    ///
    /// Returns the final queue statistics.
    pub async fn shutdown(&self) -> QueueStats {
        let mut queue = self.queue.write().await;
        let dropped = queue.shutdown();
        info!("Queue shut down, dropped {} pending entries", dropped);
        queue.stats()
    }
}

/// Checks that the declared media type is `text/plain`.
///
/// Parameters such as `charset` are ignored; a missing header is rejected.
pub fn require_plain_text(headers: &HeaderMap) -> Result<()> {
    let declared = headers
        .get(CONTENT_TYPE)
        .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
        .unwrap_or_default();

    let media_type = declared.split(';').next().unwrap_or_default().trim();
    if media_type.eq_ignore_ascii_case(PLAIN_TEXT) {
        Ok(())
    } else {
        Err(PalindromeError::UnsupportedContentType(declared))
    }
}

/// Handler for POST /palindromes
///
/// Tests the raw body and stores it when it is a palindrome. The JSON
/// boolean reflects the palindrome test, not the insertion.
pub async fn submit_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<bool>> {
    require_plain_text(&headers)?;

    let text = String::from_utf8_lossy(&body).into_owned();
    if is_palindrome(&text) {
        state.insert_palindrome(text).await;
        debug!("Accepted palindrome ({} bytes)", body.len());
        Ok(Json(true))
    } else {
        debug!("Rejected non-palindrome ({} bytes)", body.len());
        Ok(Json(false))
    }
}

/// Handler for GET /palindromes
///
/// Lists the stored palindromes, oldest first.
pub async fn list_handler(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.palindromes().await)
}
