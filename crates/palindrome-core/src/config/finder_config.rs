//! Finder configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the palindrome finder.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FinderConfig {
    /// Maximum input length in characters. Default: unlimited.
    pub max_input_chars: Option<usize>,
    /// Emit a trace event each time the best candidate improves. Default: true.
    pub trace_improvements: Option<bool>,
}

impl FinderConfig {
    /// Returns the effective input limit, `None` meaning unlimited.
    pub fn effective_max_input_chars(&self) -> Option<usize> {
        self.max_input_chars
    }

    /// Returns whether improvements are traced, defaulting to true.
    pub fn effective_trace_improvements(&self) -> bool {
        self.trace_improvements.unwrap_or(true)
    }
}
