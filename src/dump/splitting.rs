//! Line splitting
//!
//! Turns the raw dump text into an ordered sequence of lines. Dumps in
//! the wild carry any of the three newline conventions, so the split
//! recognizes CR, LF, and CRLF. Terminators are not kept in the resulting
//! lines.

use once_cell::sync::Lazy;
use regex::Regex;

/// Lazy-compiled regex matching any newline convention. CRLF comes first
/// in the alternation so it is consumed as a single terminator.
static LINE_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\r\n|\r|\n").unwrap());

/// Split source text into lines on any newline convention.
///
/// This is a literal split: a trailing terminator yields a trailing empty
/// line, and consecutive terminators yield empty lines between them.
pub fn split_lines(source: &str) -> Vec<&str> {
    LINE_BREAK.split(source).collect()
}
