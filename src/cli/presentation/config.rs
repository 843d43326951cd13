//! Config presentation: effective configuration as TOML.

use crate::config::NodepackConfig;
use crate::error::NodeError;

pub fn format_config(config: &NodepackConfig) -> Result<String, NodeError> {
    toml::to_string_pretty(config)
        .map(|s| s.trim_end().to_string())
        .map_err(|e| NodeError::ConfigError(format!("Failed to render configuration: {}", e)))
}
