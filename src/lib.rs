//! Palindrome Store - a small palindrome-collecting HTTP service
//!
//! Accepts strings over HTTP, keeps the palindromes among them in a bounded
//! queue where each entry expires after a fixed time, and lists them back.

pub mod api;
pub mod config;
pub mod error;
pub mod palindrome;
pub mod queue;
pub mod tasks;

pub use api::{create_router, AppState};
pub use config::Config;
pub use palindrome::is_palindrome;
pub use queue::BoundedExpiringQueue;
