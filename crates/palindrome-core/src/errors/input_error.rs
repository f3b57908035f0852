//! Input errors.

use super::error_code::{self, PalindromeErrorCode};

/// Errors raised when an input is rejected before scanning.
///
/// The scan itself is total; these only come from limits set in
/// [`FinderConfig`](crate::config::FinderConfig).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("Input has {chars} characters, limit is {limit}")]
    TooLong { chars: usize, limit: usize },
}

impl PalindromeErrorCode for InputError {
    fn error_code(&self) -> &'static str {
        error_code::INPUT_ERROR
    }
}
