//! Top-level configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{FinderConfig, OutputConfig, OutputFormat};
use crate::errors::ConfigError;

/// File name looked up in the project root.
pub const PROJECT_CONFIG_FILE: &str = "palindrome.toml";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`PALINDROME_*`)
/// 3. Project config (`palindrome.toml` in project root, or an explicit file)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PalindromeConfig {
    pub finder: FinderConfig,
    pub output: OutputConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub max_input_chars: Option<usize>,
    pub output_format: Option<String>,
}

impl PalindromeConfig {
    /// Load configuration from `palindrome.toml` in `root`, if present.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        let file = project_config_path
            .exists()
            .then_some(project_config_path.as_path());
        Self::resolve(file, cli_overrides)
    }

    /// Load configuration from an explicit file, which must exist.
    pub fn load_file(path: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        Self::resolve(Some(path), cli_overrides)
    }

    fn resolve(file: Option<&Path>, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 3: project config
        if let Some(path) = file {
            Self::merge_toml_file(&mut config, path)?;
            debug!(path = %path.display(), "merged config file");
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &PalindromeConfig) -> Result<(), ConfigError> {
        if config.finder.max_input_chars == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "finder.max_input_chars".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if let Some(ref format) = config.output.format {
            if let Err(message) = format.parse::<OutputFormat>() {
                return Err(ConfigError::ValidationFailed {
                    field: "output.format".to_string(),
                    message,
                });
            }
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut PalindromeConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: PalindromeConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; only `Some` values in `other` win.
    fn merge(base: &mut PalindromeConfig, other: &PalindromeConfig) {
        if other.finder.max_input_chars.is_some() {
            base.finder.max_input_chars = other.finder.max_input_chars;
        }
        if other.finder.trace_improvements.is_some() {
            base.finder.trace_improvements = other.finder.trace_improvements;
        }
        if other.output.format.is_some() {
            base.output.format = other.output.format.clone();
        }
    }

    /// Apply environment variable overrides.
    /// Unparseable numeric and boolean values are ignored.
    fn apply_env_overrides(config: &mut PalindromeConfig) {
        if let Ok(val) = std::env::var("PALINDROME_MAX_INPUT_CHARS") {
            if let Ok(v) = val.parse::<usize>() {
                config.finder.max_input_chars = Some(v);
            }
        }
        if let Ok(val) = std::env::var("PALINDROME_TRACE_IMPROVEMENTS") {
            if let Ok(v) = val.parse::<bool>() {
                config.finder.trace_improvements = Some(v);
            }
        }
        if let Ok(val) = std::env::var("PALINDROME_OUTPUT_FORMAT") {
            config.output.format = Some(val);
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut PalindromeConfig, cli: &CliOverrides) {
        if let Some(v) = cli.max_input_chars {
            config.finder.max_input_chars = Some(v);
        }
        if let Some(ref v) = cli.output_format {
            config.output.format = Some(v.clone());
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
