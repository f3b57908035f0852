//! Stable, machine-readable error codes.

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const INPUT_ERROR: &str = "INPUT_ERROR";

/// Maps an error to a stable code that survives message rewording.
pub trait PalindromeErrorCode {
    fn error_code(&self) -> &'static str;

    /// `[CODE] message`, as printed by the CLI.
    fn coded_message(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}
