//! Merge rules: defaults and override order.

use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("text_concatenator.delimiter", crate::text::DEFAULT_DELIMITER)?
        .set_default("text_concatenator.index", crate::text::DEFAULT_INDEX)
}
