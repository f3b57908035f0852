//! Best-candidate bookkeeping.

use std::ops::Range;

use serde::Serialize;

/// A palindrome located by element position: `start` and `len` are counted
/// in elements of the scanned sequence (characters for `&str` input).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct PalindromeSpan {
    pub start: usize,
    pub len: usize,
}

impl PalindromeSpan {
    pub const EMPTY: PalindromeSpan = PalindromeSpan { start: 0, len: 0 };

    pub fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }

    /// Span of a palindrome of length `len` found by expanding around
    /// index `i`.
    ///
    /// For odd lengths `i` is the middle element; for even lengths it is
    /// the left element of the middle pair. Floor division covers both.
    pub fn candidate_at(i: usize, len: usize) -> Self {
        debug_assert!(len >= 1, "candidate palindromes are never empty");
        debug_assert!(i >= (len - 1) / 2, "candidate starts before index 0");
        Self {
            start: i - (len - 1) / 2,
            len,
        }
    }

    pub fn end(&self) -> usize {
        self.start + self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end()
    }
}
