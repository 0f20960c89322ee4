//! Configuration Module
//!
//! Loads server configuration from environment variables once at startup.

use std::env;
use std::time::Duration;

use crate::queue::{DEFAULT_CAPACITY, DEFAULT_TTL_MS};

/// Default HTTP port
pub const DEFAULT_PORT: u16 = 3000;

/// Server configuration parameters.
///
/// Fixed for the lifetime of the process; there is no reload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Maximum number of palindromes kept
    pub capacity: usize,
    /// Lifetime of a stored palindrome in milliseconds
    pub ttl_ms: u64,
    /// HTTP server port
    pub server_port: u16,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CAPACITY` - Maximum stored palindromes (default: 10)
    /// - `TTL_MS` - Entry lifetime in milliseconds (default: 600000)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    ///
    /// Unparsable values fall back to the default, as do a zero capacity or TTL.
    pub fn from_env() -> Self {
        Self {
            capacity: env::var("CAPACITY")
                .ok()
                .and_then(|v| v.parse::<usize>().ok())
                .filter(|v| *v > 0)
                .unwrap_or(DEFAULT_CAPACITY),
            ttl_ms: env::var("TTL_MS")
                .ok()
                .and_then(|v| v.parse::<u64>().ok())
                .filter(|v| *v > 0)
                .unwrap_or(DEFAULT_TTL_MS),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_PORT),
        }
    }

    /// Entry lifetime as a Duration.
    pub fn ttl(&self) -> Duration {
        Duration::from_millis(self.ttl_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            ttl_ms: DEFAULT_TTL_MS,
            server_port: DEFAULT_PORT,
        }
    }
}
