//! Environment variable source: ENVMERGE_ prefix with __ separator

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::Map;

pub const ENV_PREFIX: &str = "ENVMERGE";

/// Add environment variable overlay to builder.
///
/// `ENVMERGE__SMS__API_KEY` sets `sms.api_key`. Values are kept as strings so a
/// token like `0123` is never reparsed as a number. `vars` replaces the process
/// environment when given.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    vars: Option<Map<String, String>>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .separator("__")
            .source(vars),
    );
    Ok(builder)
}
