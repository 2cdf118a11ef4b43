//! XDG Base Directory lookup for the global config file.

use crate::error::EnvMergeError;
use std::path::PathBuf;

/// Name of the optional per-directory config file.
pub const LOCAL_CONFIG_FILE: &str = "envmerge.toml";

/// Get XDG config home directory
///
/// Returns `$XDG_CONFIG_HOME` if set, otherwise defaults to `$HOME/.config`
pub fn config_home() -> Result<PathBuf, EnvMergeError> {
    if let Ok(xdg_config_home) = std::env::var("XDG_CONFIG_HOME") {
        if !xdg_config_home.is_empty() {
            return Ok(PathBuf::from(xdg_config_home));
        }
    }

    let home = std::env::var("HOME").map_err(|_| {
        EnvMergeError::ConfigError(
            "Could not determine XDG config home directory (HOME not set)".to_string(),
        )
    })?;

    Ok(PathBuf::from(home).join(".config"))
}

/// `$XDG_CONFIG_HOME/envmerge/config.toml`
pub fn global_config_path() -> Result<PathBuf, EnvMergeError> {
    Ok(config_home()?.join("envmerge").join("config.toml"))
}
