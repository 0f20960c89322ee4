//! API Module
//!
//! HTTP handlers and routing for the palindrome server.
//!
//! # Endpoints
//! - `POST /palindromes` - Submit a string as `text/plain`; responds with a JSON boolean
//! - `GET /palindromes` - JSON array of stored palindromes, oldest first

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
