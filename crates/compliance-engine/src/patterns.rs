//! Sentence and excerpt extraction used to anchor issues in the document

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// A run of non-terminators followed by one or more terminators.
    /// Trailing text without a terminator never matches.
    static ref SENTENCE: Regex = Regex::new(r"[^.!?]+[.!?]+").unwrap();
}

/// Index past which the leading excerpt looks for a word break
pub const LEADING_EXCERPT_MIN: usize = 20;

/// Hard cap on the leading excerpt when no word break is found
pub const LEADING_EXCERPT_MAX: usize = 30;

/// Length of the trailing excerpt
pub const TRAILING_EXCERPT_LEN: usize = 40;

/// Split text into terminated sentences, untrimmed, in document order
pub fn split_sentences(text: &str) -> Vec<&str> {
    SENTENCE.find_iter(text).map(|m| m.as_str()).collect()
}

/// Number of characters (not bytes) in the text
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Byte offset of the character at `char_idx`, or `text.len()` past the end
fn byte_offset(text: &str, char_idx: usize) -> usize {
    text.char_indices()
        .nth(char_idx)
        .map(|(offset, _)| offset)
        .unwrap_or(text.len())
}

/// Leading excerpt that avoids cutting a word in half.
///
/// Runs up to the first space at or after character 20. Without such a space
/// it stops at character 30 or the end of the text.
pub fn leading_excerpt(text: &str) -> &str {
    let search_from = byte_offset(text, LEADING_EXCERPT_MIN);
    let end = match text[search_from..].find(' ') {
        Some(pos) => search_from + pos,
        None => byte_offset(text, LEADING_EXCERPT_MAX),
    };
    text[..end].trim()
}

/// Trailing excerpt covering the last 40 characters
pub fn trailing_excerpt(text: &str) -> &str {
    let start = char_len(text).saturating_sub(TRAILING_EXCERPT_LEN);
    text[byte_offset(text, start)..].trim()
}
