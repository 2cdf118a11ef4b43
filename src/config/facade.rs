//! ConfigLoader facade delegating to merge service.

use super::merge::service::MergeService;
use super::EnvMergeConfig;
use crate::error::EnvMergeError;
use std::path::Path;

/// Configuration loader facade.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from files and environment.
    pub fn load(working_dir: &Path) -> Result<EnvMergeConfig, EnvMergeError> {
        Ok(MergeService::load(working_dir)?)
    }

    /// Load configuration from a specific file.
    pub fn load_from_file(path: &Path) -> Result<EnvMergeConfig, EnvMergeError> {
        Ok(MergeService::load_from_file(path)?)
    }
}
