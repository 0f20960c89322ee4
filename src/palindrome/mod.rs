//! Palindrome Module
//!
//! Pure predicate deciding which submitted strings get stored.

mod checker;


pub use checker::{is_palindrome, normalize};
