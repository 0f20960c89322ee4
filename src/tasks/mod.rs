//! Background Tasks Module
//!
//! Contains the tasks that run alongside request handling.
//!
//! # Tasks
//! - TTL Expiry: one timer per stored palindrome, removing it when it expires

mod expiry;

pub use expiry::spawn_expiry_timer;
