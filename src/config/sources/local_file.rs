//! Per-directory config file source: `envmerge.toml` in the working directory,
//! or an explicit file passed with `--config`.

use crate::config::paths::LOCAL_CONFIG_FILE;
use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError, File};
use std::path::Path;

/// Optional `envmerge.toml` under `dir`.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    dir: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Ok(builder.add_source(File::from(dir.join(LOCAL_CONFIG_FILE)).required(false)))
}

/// Explicit file; missing is an error.
pub fn add_required_file(
    builder: ConfigBuilder<DefaultState>,
    path: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::Message(format!(
            "Config file not found: {}",
            path.display()
        )));
    }
    Ok(builder.add_source(File::from(path).required(true)))
}
