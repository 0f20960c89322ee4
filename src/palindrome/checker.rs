//! Palindrome Checker
//!
//! Case, whitespace and punctuation agnostic palindrome test.

use unicode_normalization::UnicodeNormalization;

// == Normalize ==
/// Lower-cases the input and drops every char that is not a letter or digit.
///
/// The input is decomposed (NFD) first, so accents become combining marks and
/// are dropped with the punctuation: `é` and `e\u{301}` both compare as `e`.
/// Lower-casing uses the full Unicode mapping. Underscore counts as
/// punctuation and is dropped.
pub fn normalize(input: &str) -> String {
    input
        .nfd()
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_alphanumeric())
        .collect()
}

// == Is Palindrome ==
/// Returns true if the normalized input reads the same in both directions.
///
/// Total over all strings: an input with no letters or digits normalizes to
/// the empty string, which is a palindrome.
pub fn is_palindrome(input: &str) -> bool {
    let chars: Vec<char> = normalize(input).chars().collect();
    chars.iter().eq(chars.iter().rev())
}
