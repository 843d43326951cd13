//! Configuration System
//!
//! Layered configuration: built-in defaults, a global file, workspace files,
//! and `NODEPACK__*` environment overrides.

use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;
pub use sources::global_file::global_config_path;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NodepackConfig {
    /// Defaults for the text concatenator when run from the command line
    #[serde(default)]
    pub text_concatenator: ConcatenatorDefaults,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Delimiter and index used when the caller does not supply them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConcatenatorDefaults {
    #[serde(default = "default_delimiter")]
    pub delimiter: String,

    #[serde(default)]
    pub index: i64,
}

fn default_delimiter() -> String {
    crate::text::DEFAULT_DELIMITER.to_string()
}

impl Default for ConcatenatorDefaults {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            index: crate::text::DEFAULT_INDEX,
        }
    }
}

impl ConcatenatorDefaults {
    pub fn validate(&self) -> Result<(), String> {
        if self.index < 0 {
            return Err(format!("index must be non-negative, got {}", self.index));
        }
        Ok(())
    }
}

/// Configuration validation errors
#[derive(Debug, Clone)]
pub enum ValidationError {
    TextConcatenator(String),
    Logging(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::TextConcatenator(msg) => write!(f, "text_concatenator: {}", msg),
            ValidationError::Logging(msg) => write!(f, "logging: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl NodepackConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = self.text_concatenator.validate() {
            errors.push(ValidationError::TextConcatenator(e));
        }
        if let Err(e) = self.logging.validate() {
            errors.push(ValidationError::Logging(e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
