//! Error handling for the palindrome workspace.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod error_code;
pub mod input_error;

pub use config_error::ConfigError;
pub use error_code::PalindromeErrorCode;
pub use input_error::InputError;
