//! MergeService: orchestrates sources, applies merge policy, deserializes to EnvMergeConfig.

use crate::config::sources::{environment, global_file, local_file};
use crate::config::EnvMergeConfig;
use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError, Map};
use std::path::Path;

use super::builder_with_defaults;

/// Merge service for config composition.
pub struct MergeService;

impl MergeService {
    /// Load config for a working directory.
    /// Precedence: defaults (lowest) -> global file -> local envmerge.toml -> environment (highest).
    pub fn load(working_dir: &Path) -> Result<EnvMergeConfig, ConfigError> {
        Self::load_with_env(working_dir, None)
    }

    /// Load config from a specific file with environment overlay. Global and local
    /// files are not consulted.
    pub fn load_from_file(path: &Path) -> Result<EnvMergeConfig, ConfigError> {
        Self::load_from_file_with_env(path, None)
    }

    pub(crate) fn load_with_env(
        working_dir: &Path,
        vars: Option<Map<String, String>>,
    ) -> Result<EnvMergeConfig, ConfigError> {
        let builder = builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = local_file::add_to_builder(builder, working_dir)?;
        Self::finish(builder, vars)
    }

    pub(crate) fn load_from_file_with_env(
        path: &Path,
        vars: Option<Map<String, String>>,
    ) -> Result<EnvMergeConfig, ConfigError> {
        let builder = builder_with_defaults()?;
        let builder = local_file::add_required_file(builder, path)?;
        Self::finish(builder, vars)
    }

    fn finish(
        builder: ConfigBuilder<DefaultState>,
        vars: Option<Map<String, String>>,
    ) -> Result<EnvMergeConfig, ConfigError> {
        let builder = environment::add_to_builder(builder, vars)?;
        let config = builder.build()?;
        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn vars(pairs: &[(&str, &str)]) -> Option<Map<String, String>> {
        Some(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn defaults_without_any_source() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("empty.toml");
        fs::write(&path, "").unwrap();
        let config = MergeService::load_from_file_with_env(&path, vars(&[])).unwrap();
        assert_eq!(config.target.function_name, "scrapmate-node-api-production");
        assert_eq!(config.target.region, "ap-south-1");
        assert_eq!(config.sms.entity_id, "1701173389563945545");
        assert!(config.sms.api_token.is_none());
    }

    #[test]
    fn file_overrides_defaults_and_env_overrides_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("envmerge.toml");
        fs::write(
            &path,
            r#"
[target]
function_name = "staging-api"
region = "us-east-1"

[sms]
api_token = "from-file"
"#,
        )
        .unwrap();

        let config = MergeService::load_from_file_with_env(
            &path,
            vars(&[
                ("ENVMERGE__TARGET__REGION", "eu-central-1"),
                ("ENVMERGE__SMS__API_KEY", "0123456789abc"),
            ]),
        )
        .unwrap();
        assert_eq!(config.target.function_name, "staging-api");
        assert_eq!(config.target.region, "eu-central-1");
        assert_eq!(config.sms.api_token.as_deref(), Some("from-file"));
        assert_eq!(config.sms.api_key.as_deref(), Some("0123456789abc"));
    }

    #[test]
    fn numeric_looking_secret_stays_a_string() {
        let temp = TempDir::new().unwrap();
        let config = MergeService::load_with_env(
            temp.path(),
            vars(&[("ENVMERGE__SMS__API_TOKEN", "0123")]),
        )
        .unwrap();
        assert_eq!(config.sms.api_token.as_deref(), Some("0123"));
    }

    #[test]
    fn local_file_is_picked_up_from_working_dir() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("envmerge.toml"),
            "[aws]\nbinary = \"/opt/aws/bin/aws\"\nprofile = \"deploy\"\n",
        )
        .unwrap();
        let config = MergeService::load_with_env(temp.path(), vars(&[])).unwrap();
        assert_eq!(config.aws.binary, "/opt/aws/bin/aws");
        assert_eq!(config.aws.profile.as_deref(), Some("deploy"));
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let err = MergeService::load_from_file_with_env(&temp.path().join("nope.toml"), vars(&[]))
            .unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }
}
