//! Configuration
//!
//! Layered configuration built with the `config` crate. Precedence, lowest first:
//! built-in defaults, global file, local `envmerge.toml` (or an explicit `--config`
//! file), `ENVMERGE__*` environment variables. CLI flags are applied on top by the
//! CLI layer.

pub mod facade;
pub mod merge;
pub mod paths;
pub mod sources;

pub use facade::ConfigLoader;

use crate::logging::LoggingConfig;
use crate::patch::SmsPatchConfig;
use crate::provider::AwsCliConfig;
use crate::types::FunctionTarget;
use serde::{Deserialize, Serialize};

pub const DEFAULT_FUNCTION_NAME: &str = "scrapmate-node-api-production";
pub const DEFAULT_REGION: &str = "ap-south-1";

/// `[target]` section: the function whose environment is updated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetConfig {
    #[serde(default = "default_function_name")]
    pub function_name: String,

    #[serde(default = "default_region")]
    pub region: String,
}

fn default_function_name() -> String {
    DEFAULT_FUNCTION_NAME.to_string()
}

fn default_region() -> String {
    DEFAULT_REGION.to_string()
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            function_name: default_function_name(),
            region: default_region(),
        }
    }
}

impl TargetConfig {
    pub fn to_target(&self) -> FunctionTarget {
        FunctionTarget::new(self.function_name.clone(), self.region.clone())
    }
}

/// Complete resolved configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EnvMergeConfig {
    #[serde(default)]
    pub target: TargetConfig,

    #[serde(default)]
    pub aws: AwsCliConfig,

    #[serde(default)]
    pub sms: SmsPatchConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl EnvMergeConfig {
    /// Copy safe to print: secret SMS values are masked.
    pub fn redacted(&self) -> Self {
        Self {
            sms: self.sms.redacted(),
            ..self.clone()
        }
    }
}
