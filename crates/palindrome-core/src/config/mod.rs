//! Configuration system for the palindrome workspace.
//! TOML-based, layered resolution: CLI > env > project > defaults.

pub mod finder_config;
pub mod output_config;
pub mod palindrome_config;

pub use finder_config::FinderConfig;
pub use output_config::{OutputConfig, OutputFormat};
pub use palindrome_config::{CliOverrides, PalindromeConfig};
