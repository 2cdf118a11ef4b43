//! Merge policy for config composition.

pub mod service;

use crate::config::{DEFAULT_FUNCTION_NAME, DEFAULT_REGION};
use crate::patch::{DEFAULT_SMS_API_URL, DEFAULT_SMS_ENTITY_ID, DEFAULT_SMS_HEADER_CENTER_ID};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError};

/// Builder seeded with the built-in defaults (lowest precedence).
/// Secret SMS values are left unset.
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("target.function_name", DEFAULT_FUNCTION_NAME)?
        .set_default("target.region", DEFAULT_REGION)?
        .set_default("aws.binary", "aws")?
        .set_default("sms.api_url", DEFAULT_SMS_API_URL)?
        .set_default("sms.entity_id", DEFAULT_SMS_ENTITY_ID)?
        .set_default("sms.header_center_id", DEFAULT_SMS_HEADER_CENTER_ID)
}
