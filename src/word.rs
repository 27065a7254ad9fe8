//! Word validation and sentence splitting.
//!
//! Words are opaque, case-sensitive tokens. Validation only checks that a
//! word has content once surrounding whitespace is ignored; the word itself
//! is never normalized, so `"Earth"` and `"earth"` remain distinct.

use crate::error::{Result, SynonymError};

/// Check that `word` is non-empty after trimming and return it unchanged.
pub fn validate_word(word: &str) -> Result<&str> {
    if word.trim().is_empty() {
        return Err(SynonymError::invalid_word("Word cannot be null or empty"));
    }
    Ok(word)
}

/// Split a raw sentence into words on runs of whitespace.
///
/// An empty or all-whitespace sentence is rejected with `InvalidWord`.
pub fn split_sentence(sentence: &str) -> Result<Vec<&str>> {
    let words: Vec<&str> = sentence.split_whitespace().collect();
    if words.is_empty() {
        return Err(SynonymError::invalid_word(
            "Sentence cannot be null or empty",
        ));
    }
    Ok(words)
}
