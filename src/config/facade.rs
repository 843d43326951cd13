//! Config loader facade: assembles sources and deserializes the result.

use super::{merge, sources, NodepackConfig};
use crate::error::NodeError;
use config::builder::DefaultState;
use config::{ConfigBuilder, File};
use std::path::Path;
use tracing::debug;

/// Loads [`NodepackConfig`] from layered sources
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a workspace.
    ///
    /// Precedence (lowest to highest): defaults, global file, workspace
    /// files, environment.
    pub fn load(workspace_root: &Path) -> Result<NodepackConfig, NodeError> {
        let builder = merge::builder_with_defaults()?;
        let builder = sources::global_file::add_to_builder(builder)?;
        let builder = sources::workspace_file::add_to_builder(builder, workspace_root)?;
        let builder = sources::environment::add_to_builder(builder);
        debug!(workspace = %workspace_root.display(), "Loading configuration");
        Self::finish(builder)
    }

    /// Load configuration from a single file on top of the defaults
    pub fn load_from_file(path: &Path) -> Result<NodepackConfig, NodeError> {
        if !path.exists() {
            return Err(NodeError::ConfigError(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }
        let builder = merge::builder_with_defaults()?.add_source(File::from(path));
        debug!(config_path = %path.display(), "Loading configuration file");
        Self::finish(builder)
    }

    /// Built-in defaults only
    pub fn default() -> NodepackConfig {
        NodepackConfig::default()
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> Result<NodepackConfig, NodeError> {
        let config: NodepackConfig = builder.build()?.try_deserialize()?;
        config.validate().map_err(|errors| {
            let error_msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            NodeError::ConfigError(format!(
                "Configuration validation failed:\n{}",
                error_msgs.join("\n")
            ))
        })?;
        Ok(config)
    }
}
