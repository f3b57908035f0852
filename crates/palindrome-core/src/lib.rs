//! palindrome-core: shared plumbing for the palindrome workspace.
//!
//! - Errors: one `thiserror` enum per subsystem with stable error codes
//! - Config: TOML-based, layered resolution (CLI > env > project > defaults)
//! - Logging: `tracing-subscriber` bootstrap for binaries and tests

pub mod config;
pub mod errors;
pub mod logging;

pub use config::{FinderConfig, OutputConfig, OutputFormat, PalindromeConfig};
pub use errors::{ConfigError, InputError, PalindromeErrorCode};
