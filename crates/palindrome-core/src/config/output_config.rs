//! CLI output configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How the CLI renders results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format '{other}' (expected text or json)")),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration for CLI output.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format: "text" or "json". Default: "text".
    pub format: Option<String>,
}

impl OutputConfig {
    /// Returns the effective output format, defaulting to text.
    ///
    /// Unparseable values fall back to text; `PalindromeConfig::validate`
    /// rejects them before this is reached on the load path.
    pub fn effective_format(&self) -> OutputFormat {
        self.format
            .as_deref()
            .and_then(|f| f.parse().ok())
            .unwrap_or_default()
    }
}
