//! SMS gateway patch: the five variables merged into the function environment.
//!
//! Non-secret values default to the production gateway. The auth token and API key
//! have no default and must be injected through a config file or `ENVMERGE__SMS__*`.

use crate::error::EnvMergeError;
use crate::mask;
use crate::types::EnvironmentSet;
use serde::{Deserialize, Serialize};

pub const SMS_API_URL_KEY: &str = "SMS_API_URL_NEW";
pub const SMS_ENTITY_ID_KEY: &str = "SMS_API_ENITYID";
pub const SMS_API_TOKEN_KEY: &str = "SMS_API_TOKEN";
pub const SMS_API_KEY_KEY: &str = "SMS_API_KEY";
pub const SMS_HEADER_CENTER_ID_KEY: &str = "SMS_HEADER_CENTER_ID";

pub const DEFAULT_SMS_API_URL: &str = "http://4sms.alp-ts.com/api/sms/v1.0/send-sms";
pub const DEFAULT_SMS_ENTITY_ID: &str = "1701173389563945545";
pub const DEFAULT_SMS_HEADER_CENTER_ID: &str = "SCRPMT";

/// `[sms]` configuration section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmsPatchConfig {
    /// Gateway send endpoint.
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Registered entity id.
    #[serde(default = "default_entity_id")]
    pub entity_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_token: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Sender header / center identifier.
    #[serde(default = "default_header_center_id")]
    pub header_center_id: String,
}

fn default_api_url() -> String {
    DEFAULT_SMS_API_URL.to_string()
}

fn default_entity_id() -> String {
    DEFAULT_SMS_ENTITY_ID.to_string()
}

fn default_header_center_id() -> String {
    DEFAULT_SMS_HEADER_CENTER_ID.to_string()
}

impl Default for SmsPatchConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            entity_id: default_entity_id(),
            api_token: None,
            api_key: None,
            header_center_id: default_header_center_id(),
        }
    }
}

impl SmsPatchConfig {
    /// Resolve the section into a complete patch.
    pub fn to_patch(&self) -> Result<SmsPatch, EnvMergeError> {
        Ok(SmsPatch {
            api_url: require_value(&self.api_url, "api_url")?,
            entity_id: require_value(&self.entity_id, "entity_id")?,
            api_token: require_secret(self.api_token.as_deref(), "api_token")?,
            api_key: require_secret(self.api_key.as_deref(), "api_key")?,
            header_center_id: require_value(&self.header_center_id, "header_center_id")?,
        })
    }

    /// Copy with secret values masked for display.
    pub fn redacted(&self) -> Self {
        Self {
            api_token: self
                .api_token
                .as_deref()
                .map(|v| mask::display_value(SMS_API_TOKEN_KEY, v)),
            api_key: self
                .api_key
                .as_deref()
                .map(|v| mask::display_value(SMS_API_KEY_KEY, v)),
            ..self.clone()
        }
    }
}

fn require_value(value: &str, field: &str) -> Result<String, EnvMergeError> {
    if value.trim().is_empty() {
        return Err(EnvMergeError::ConfigError(format!(
            "sms.{} cannot be empty",
            field
        )));
    }
    Ok(value.to_string())
}

fn require_secret(value: Option<&str>, field: &str) -> Result<String, EnvMergeError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.to_string()),
        _ => Err(EnvMergeError::ConfigError(format!(
            "sms.{} is not configured (set ENVMERGE__SMS__{} or add it to the [sms] section)",
            field,
            field.to_uppercase()
        ))),
    }
}

/// The resolved set of SMS variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmsPatch {
    pub api_url: String,
    pub entity_id: String,
    pub api_token: String,
    pub api_key: String,
    pub header_center_id: String,
}

impl SmsPatch {
    pub fn to_environment_set(&self) -> EnvironmentSet {
        [
            (SMS_API_URL_KEY, self.api_url.as_str()),
            (SMS_ENTITY_ID_KEY, self.entity_id.as_str()),
            (SMS_API_TOKEN_KEY, self.api_token.as_str()),
            (SMS_API_KEY_KEY, self.api_key.as_str()),
            (SMS_HEADER_CENTER_ID_KEY, self.header_center_id.as_str()),
        ]
        .into_iter()
        .collect()
    }
}
