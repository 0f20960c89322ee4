//! Error types for the palindrome server
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::debug;

// == Palindrome Error Enum ==
/// Errors surfaced to HTTP clients.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum PalindromeError {
    /// POST body was not declared as `text/plain`
    #[error("Unsupported content type: {0}")]
    UnsupportedContentType(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for PalindromeError {
    fn into_response(self) -> Response {
        debug!("Rejecting request: {}", self);
        match self {
            PalindromeError::UnsupportedContentType(_) => StatusCode::BAD_REQUEST.into_response(),
        }
    }
}

// == Result Type Alias ==
/// Convenience Result type for the palindrome server.
pub type Result<T> = std::result::Result<T, PalindromeError>;
