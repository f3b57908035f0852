//! Longest palindromic substring search.

use std::ops::Range;

use palindrome_core::config::FinderConfig;
use palindrome_core::errors::InputError;
use tracing::{debug, trace};

use crate::center::Center;
use crate::span::PalindromeSpan;

/// Returns true if `seq` reads the same in both directions.
pub fn is_palindrome<T: PartialEq>(seq: &[T]) -> bool {
    seq.iter().eq(seq.iter().rev())
}

/// Span of the longest palindrome in `seq`, leftmost on ties.
///
/// Empty input yields [`PalindromeSpan::EMPTY`]; any other input yields a
/// span of length at least 1.
pub fn longest_palindrome_span<T: PartialEq>(seq: &[T]) -> PalindromeSpan {
    scan(seq, |_, _| {})
}

/// Longest palindromic substring of `s`, leftmost on ties.
///
/// Characters are compared as Unicode scalar values with no normalization.
///
/// ```
/// use palindrome_analysis::longest_palindromic_substring;
///
/// assert_eq!(longest_palindromic_substring("babad"), "bab");
/// assert_eq!(longest_palindromic_substring("cbbd"), "bb");
/// assert_eq!(longest_palindromic_substring(""), "");
/// ```
pub fn longest_palindromic_substring(s: &str) -> &str {
    if s.is_empty() {
        return "";
    }
    let chars: Vec<char> = s.chars().collect();
    let span = longest_palindrome_span(&chars);
    &s[byte_range(s, span)]
}

/// Visits every center left to right, calling `on_improve` with the index
/// and the new best span whenever a strictly longer palindrome is found.
fn scan<T, F>(seq: &[T], mut on_improve: F) -> PalindromeSpan
where
    T: PartialEq,
    F: FnMut(usize, PalindromeSpan),
{
    if seq.is_empty() {
        return PalindromeSpan::EMPTY;
    }

    let mut best = PalindromeSpan::new(0, 1);
    for i in 0..seq.len() {
        let odd = Center::odd(i).expand(seq);
        let even = Center::even(i).expand(seq);
        let candidate = odd.max(even);
        if candidate > best.len {
            best = PalindromeSpan::candidate_at(i, candidate);
            on_improve(i, best);
        }
    }
    best
}

/// Converts a character span of `s` into a byte range.
fn byte_range(s: &str, span: PalindromeSpan) -> Range<usize> {
    let mut offsets = s.char_indices().map(|(b, _)| b).skip(span.start);
    let start = offsets.next().unwrap_or(s.len());
    let end = match span.len {
        0 => start,
        len => offsets.nth(len - 1).unwrap_or(s.len()),
    };
    start..end
}

/// The result of a [`PalindromeFinder`] search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PalindromeMatch<'s> {
    /// The palindrome, borrowed from the input.
    pub text: &'s str,
    /// Position in characters.
    pub span: PalindromeSpan,
    /// Position in bytes, so that `&input[bytes] == text`.
    pub bytes: Range<usize>,
}

impl PalindromeMatch<'_> {
    pub fn is_empty(&self) -> bool {
        self.span.is_empty()
    }
}

/// Configurable front end over [`longest_palindromic_substring`].
///
/// Adds the input length limit from [`FinderConfig`] and structured
/// tracing of the search. The search itself is identical.
#[derive(Debug, Clone, Default)]
pub struct PalindromeFinder {
    config: FinderConfig,
}

impl PalindromeFinder {
    pub fn new(config: FinderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FinderConfig {
        &self.config
    }

    /// Find the longest palindrome in `input`.
    ///
    /// Fails only when `input` exceeds the configured character limit.
    pub fn find<'s>(&self, input: &'s str) -> Result<PalindromeMatch<'s>, InputError> {
        let chars: Vec<char> = input.chars().collect();

        if let Some(limit) = self.config.effective_max_input_chars() {
            if chars.len() > limit {
                return Err(InputError::TooLong {
                    chars: chars.len(),
                    limit,
                });
            }
        }

        let trace_improvements = self.config.effective_trace_improvements();
        let span = scan(&chars, |center, best| {
            if trace_improvements {
                trace!(center, start = best.start, len = best.len, "best candidate improved");
            }
        });

        let bytes = byte_range(input, span);
        let text = &input[bytes.clone()];
        debug!(
            chars = chars.len(),
            start = span.start,
            len = span.len,
            "palindrome search complete"
        );

        Ok(PalindromeMatch { text, span, bytes })
    }
}
