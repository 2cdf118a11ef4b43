//! Global config file source: `$XDG_CONFIG_HOME/envmerge/config.toml` (optional).

use crate::config::paths;
use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError, File};
use tracing::debug;

pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    match paths::global_config_path() {
        Ok(path) => {
            debug!(path = %path.display(), "Global config source");
            Ok(builder.add_source(File::from(path).required(false)))
        }
        // No HOME: nothing to layer.
        Err(_) => Ok(builder),
    }
}
