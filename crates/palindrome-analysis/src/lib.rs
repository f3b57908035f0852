//! palindrome-analysis: longest palindromic substring search.
//!
//! Every index is probed as two centers, a character (odd length) and the
//! gap after it (even length). Each center is grown outward until symmetry
//! breaks or a bound is hit, and the longest result wins. Ties go to the
//! leftmost start because the best candidate is only replaced by a strictly
//! longer one while centers are visited left to right.
//!
//! O(n²) time, O(1) extra space over any `&[T: PartialEq]`. The `&str`
//! entry points compare Unicode scalar values, so results never split a
//! multi-byte character.

pub mod center;
pub mod finder;
pub mod span;

pub use center::Center;
pub use finder::{
    is_palindrome, longest_palindrome_span, longest_palindromic_substring, PalindromeFinder,
    PalindromeMatch,
};
pub use span::PalindromeSpan;
