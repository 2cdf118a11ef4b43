use envmerge::tooling::cli::Commands;

use crate::integration::support::{configured, env, run, store_with, SMS_API_KEY_VALUE};

#[test]
fn apply_json_contract_has_required_fields() {
    let store = store_with(env(&[("FOO", "bar"), ("SMS_API_KEY", "old-value")]));
    let (stdout, result) = run(
        configured(),
        &store,
        Commands::Apply {
            dry_run: false,
            format: "json".to_string(),
        },
    );
    result.unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["function_name"], "scrapmate-node-api-production");
    assert_eq!(parsed["region"], "ap-south-1");
    assert_eq!(parsed["dry_run"], false);
    assert_eq!(parsed["previous_count"], 2);
    assert_eq!(parsed["merged_count"], 6);
    assert_eq!(parsed["overwritten"], serde_json::json!(["SMS_API_KEY"]));
    assert_eq!(parsed["added"].as_array().map(|a| a.len()), Some(4));
    assert!(parsed["unchanged"].as_array().unwrap().is_empty());
    assert_eq!(parsed["variables"]["FOO"], "bar");
    assert_eq!(parsed["variables"]["SMS_API_KEY"], "/BR2+k;L(-...");
    assert!(!stdout.contains(SMS_API_KEY_VALUE));
}

#[test]
fn show_json_contract_has_required_fields() {
    let store = store_with(env(&[("FOO", "bar"), ("STRIPE_PRIVATE", "abc")]));
    let (stdout, result) = run(
        configured(),
        &store,
        Commands::Show {
            format: "json".to_string(),
        },
    );
    result.unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["count"], 2);
    assert_eq!(parsed["variables"]["FOO"], "bar");
    assert_eq!(parsed["variables"]["STRIPE_PRIVATE"], "***");
    assert_eq!(store.submit_calls(), 0);
}

#[test]
fn show_text_lists_variables() {
    let store = store_with(env(&[("FOO", "bar")]));
    let (stdout, result) = run(
        configured(),
        &store,
        Commands::Show {
            format: "text".to_string(),
        },
    );
    result.unwrap();
    assert!(stdout.contains("FOO"));
    assert!(stdout.contains("Total: 1 variables"));
}

#[test]
fn unknown_format_is_rejected() {
    let store = store_with(env(&[]));
    let (_, result) = run(
        configured(),
        &store,
        Commands::Apply {
            dry_run: false,
            format: "yaml".to_string(),
        },
    );
    assert!(result.unwrap_err().to_string().contains("Invalid format: yaml"));
    assert_eq!(store.fetch_calls(), 0);
}

#[test]
fn config_command_masks_secrets() {
    let store = store_with(env(&[]));
    let (stdout, result) = run(configured(), &store, Commands::Config);
    result.unwrap();

    let parsed: toml::Value = toml::from_str(&stdout).unwrap();
    assert_eq!(
        parsed["target"]["function_name"].as_str(),
        Some("scrapmate-node-api-production")
    );
    assert_eq!(parsed["sms"]["api_key"].as_str(), Some("/BR2+k;L(-..."));
    assert_eq!(parsed["sms"]["api_token"].as_str(), Some("EVLZ8267TM..."));
    assert!(!stdout.contains(SMS_API_KEY_VALUE));
    assert_eq!(store.fetch_calls(), 0);
}
