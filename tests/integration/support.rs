use envmerge::config::EnvMergeConfig;
use envmerge::provider::InMemoryFunctionStore;
use envmerge::tooling::cli::{CliContext, Commands};
use envmerge::{EnvMergeError, EnvironmentSet, FunctionTarget};
use std::sync::Arc;

pub const SMS_API_KEY_VALUE: &str = "/BR2+k;L(-aPKA@r%5SO*GzcCm8&Hg6o";
pub const SMS_API_TOKEN_VALUE: &str = "EVLZ8267TMY1O2Z";

pub fn target() -> FunctionTarget {
    FunctionTarget::new("scrapmate-node-api-production", "ap-south-1")
}

/// Default config with SMS secrets injected.
pub fn configured() -> EnvMergeConfig {
    let mut config = EnvMergeConfig::default();
    config.sms.api_token = Some(SMS_API_TOKEN_VALUE.to_string());
    config.sms.api_key = Some(SMS_API_KEY_VALUE.to_string());
    config
}

pub fn env(pairs: &[(&str, &str)]) -> EnvironmentSet {
    pairs.iter().map(|(k, v)| (*k, *v)).collect()
}

pub fn store_with(initial: EnvironmentSet) -> Arc<InMemoryFunctionStore> {
    Arc::new(InMemoryFunctionStore::new().with_function(target(), initial))
}

/// Run `command` and return captured stdout alongside the result.
pub fn run(
    config: EnvMergeConfig,
    store: &Arc<InMemoryFunctionStore>,
    command: Commands,
) -> (String, Result<(), EnvMergeError>) {
    let cli = CliContext::with_client(config, store.clone());
    let mut out = Vec::new();
    let result = cli.execute(&command, &mut out);
    (String::from_utf8(out).unwrap(), result)
}

pub fn apply(dry_run: bool) -> Commands {
    Commands::Apply {
        dry_run,
        format: "text".to_string(),
    }
}
