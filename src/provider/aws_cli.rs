//! AWS CLI client: shells out to `aws lambda get-function-configuration` and
//! `aws lambda update-function-configuration`.

use super::contract::FunctionConfigClient;
use crate::error::EnvMergeError;
use crate::types::{EnvironmentSet, FunctionTarget};
use serde::{Deserialize, Serialize};
use std::process::{Command, Output};
use tracing::{debug, warn};

/// `[aws]` configuration section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AwsCliConfig {
    /// Program invoked for provider calls.
    #[serde(default = "default_binary")]
    pub binary: String,

    /// Named AWS profile passed as `--profile`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,
}

fn default_binary() -> String {
    "aws".to_string()
}

impl Default for AwsCliConfig {
    fn default() -> Self {
        Self {
            binary: default_binary(),
            profile: None,
        }
    }
}

/// Body of the `--environment` argument.
#[derive(Serialize)]
struct EnvironmentPayload<'a> {
    #[serde(rename = "Variables")]
    variables: &'a EnvironmentSet,
}

/// The part of `update-function-configuration` output we read back.
#[derive(Deserialize)]
struct FunctionConfigurationResponse {
    #[serde(rename = "Environment", default)]
    environment: Option<EnvironmentBlock>,
}

#[derive(Deserialize)]
struct EnvironmentBlock {
    #[serde(rename = "Variables", default)]
    variables: EnvironmentSet,
}

/// Provider client backed by the AWS command-line tool.
#[derive(Debug, Clone)]
pub struct AwsCliClient {
    binary: String,
    profile: Option<String>,
}

impl AwsCliClient {
    pub fn new(binary: impl Into<String>, profile: Option<String>) -> Self {
        Self {
            binary: binary.into(),
            profile,
        }
    }

    pub fn from_config(config: &AwsCliConfig) -> Self {
        Self::new(config.binary.clone(), config.profile.clone())
    }

    /// Arguments for the read-configuration call.
    pub fn fetch_args(&self, target: &FunctionTarget) -> Vec<String> {
        let mut args = vec![
            "lambda".to_string(),
            "get-function-configuration".to_string(),
            "--function-name".to_string(),
            target.function_name.clone(),
            "--region".to_string(),
            target.region.clone(),
            "--query".to_string(),
            "Environment.Variables".to_string(),
            "--output".to_string(),
            "json".to_string(),
        ];
        self.push_profile(&mut args);
        args
    }

    /// Arguments for the update-configuration call.
    pub fn submit_args(
        &self,
        target: &FunctionTarget,
        environment: &EnvironmentSet,
    ) -> Result<Vec<String>, EnvMergeError> {
        let payload = serde_json::to_string(&EnvironmentPayload {
            variables: environment,
        })?;
        let mut args = vec![
            "lambda".to_string(),
            "update-function-configuration".to_string(),
            "--function-name".to_string(),
            target.function_name.clone(),
            "--region".to_string(),
            target.region.clone(),
            "--environment".to_string(),
            payload,
        ];
        self.push_profile(&mut args);
        Ok(args)
    }

    fn push_profile(&self, args: &mut Vec<String>) {
        if let Some(profile) = &self.profile {
            args.push("--profile".to_string());
            args.push(profile.clone());
        }
    }

    fn run(&self, args: &[String]) -> Result<Output, EnvMergeError> {
        debug!(
            program = %self.binary,
            args = ?redact_args(args),
            "Invoking provider command"
        );
        Command::new(&self.binary)
            .args(args)
            .output()
            .map_err(|source| EnvMergeError::Spawn {
                program: self.binary.clone(),
                source,
            })
    }
}

/// Hide the environment payload when logging an argument vector.
fn redact_args(args: &[String]) -> Vec<&str> {
    let mut redacted = Vec::with_capacity(args.len());
    let mut hide_next = false;
    for arg in args {
        if hide_next {
            redacted.push("<redacted>");
            hide_next = false;
        } else {
            hide_next = arg == "--environment";
            redacted.push(arg.as_str());
        }
    }
    redacted
}

/// Parse `--query Environment.Variables --output json` output. `null` means the
/// function has no environment block.
pub fn parse_fetch_output(stdout: &str) -> Result<EnvironmentSet, EnvMergeError> {
    let variables: Option<EnvironmentSet> = serde_json::from_str(stdout)?;
    Ok(variables.unwrap_or_default())
}

/// Pull `Environment.Variables` out of an update response.
pub fn parse_submit_output(stdout: &str) -> Result<EnvironmentSet, EnvMergeError> {
    let response: FunctionConfigurationResponse = serde_json::from_str(stdout)?;
    Ok(response
        .environment
        .map(|block| block.variables)
        .unwrap_or_default())
}

impl FunctionConfigClient for AwsCliClient {
    fn fetch_environment(&self, target: &FunctionTarget) -> Result<EnvironmentSet, EnvMergeError> {
        let output = self.run(&self.fetch_args(target))?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            warn!(
                function_name = %target.function_name,
                region = %target.region,
                status = ?output.status.code(),
                "get-function-configuration failed"
            );
            return Err(EnvMergeError::FetchFailed { stderr });
        }
        parse_fetch_output(&String::from_utf8_lossy(&output.stdout))
    }

    fn submit_environment(
        &self,
        target: &FunctionTarget,
        environment: &EnvironmentSet,
    ) -> Result<EnvironmentSet, EnvMergeError> {
        let output = self.run(&self.submit_args(target, environment)?)?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            warn!(
                function_name = %target.function_name,
                region = %target.region,
                status = ?output.status.code(),
                "update-function-configuration failed"
            );
            return Err(EnvMergeError::SubmitFailed { stderr });
        }
        parse_submit_output(&String::from_utf8_lossy(&output.stdout))
    }
}
