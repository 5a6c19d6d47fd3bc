//! Source location tracking for the micro-text tokenizer
//!
//! Offsets are measured in characters (Unicode scalar values), not bytes,
//! so a span lines up with what a reader counts in the original message.
use serde::{Deserialize, Serialize};
use std::fmt;

/// A half-open range of character offsets `[start, end)` in the input text.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct Span {
    /// Start offset (inclusive)
    pub start: usize,
    /// End offset (exclusive)
    pub end: usize,
}

impl Span {
    /// Create a new span
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "Span start must not be after end");
        Self { start, end }
    }

    /// Create a single-character span
    pub fn single(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset + 1,
        }
    }

    /// Create a span starting at `start` covering `len` characters
    pub fn with_len(start: usize, len: usize) -> Self {
        Self {
            start,
            end: start + len,
        }
    }

    /// Merge two spans into one covering both
    pub fn merge(self, other: Self) -> Self {
        Self {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// True when `other` begins exactly where this span ends
    pub fn is_adjacent_to(&self, other: &Span) -> bool {
        self.end == other.start
    }

    /// Number of characters covered
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if this span is empty
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Check if this span contains a character offset
    pub fn contains(&self, offset: usize) -> bool {
        offset >= self.start && offset < self.end
    }

    /// Collect the characters this span covers. Out-of-range portions are ignored.
    pub fn slice(&self, chars: &[char]) -> String {
        let end = self.end.min(chars.len());
        let start = self.start.min(end);
        chars[start..end].iter().collect()
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
