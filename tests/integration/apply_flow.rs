use envmerge::tooling::cli::Commands;
use envmerge::EnvMergeError;

use crate::integration::support::{
    apply, configured, env, run, store_with, target, SMS_API_KEY_VALUE, SMS_API_TOKEN_VALUE,
};

const SMS_KEYS: [&str; 5] = [
    "SMS_API_ENITYID",
    "SMS_API_KEY",
    "SMS_API_TOKEN",
    "SMS_API_URL_NEW",
    "SMS_HEADER_CENTER_ID",
];

#[test]
fn empty_environment_receives_exactly_the_sms_keys() {
    let store = store_with(env(&[]));
    let (stdout, result) = run(configured(), &store, apply(false));
    result.unwrap();

    let stored = store.environment(&target()).unwrap();
    let keys: Vec<&str> = stored.keys().collect();
    assert_eq!(keys, SMS_KEYS.to_vec());
    assert_eq!(stored.get("SMS_API_TOKEN"), Some(SMS_API_TOKEN_VALUE));
    assert!(stdout.contains("✅ Current environment variables: 0 variables"));
    assert!(stdout.contains("✅ Updated environment variables: 5 variables"));
    assert!(stdout.contains("✅ Successfully updated Lambda function!"));
}

#[test]
fn existing_variables_are_preserved() {
    let store = store_with(env(&[("FOO", "bar")]));
    let (_, result) = run(configured(), &store, apply(false));
    result.unwrap();

    let stored = store.environment(&target()).unwrap();
    assert_eq!(stored.len(), 6);
    assert_eq!(stored.get("FOO"), Some("bar"));
    for key in SMS_KEYS {
        assert!(stored.contains_key(key), "missing {}", key);
    }
}

#[test]
fn stale_sms_key_is_replaced() {
    let store = store_with(env(&[("SMS_API_KEY", "old-value")]));
    let (stdout, result) = run(configured(), &store, apply(false));
    result.unwrap();

    let stored = store.environment(&target()).unwrap();
    assert_eq!(stored.get("SMS_API_KEY"), Some(SMS_API_KEY_VALUE));
    assert!(stdout.contains("   ✅ SMS_API_KEY: /BR2+k;L(-..."));
    assert!(!stdout.contains("old-value"));
}

#[test]
fn failed_fetch_stops_before_submit() {
    let store = std::sync::Arc::new(
        envmerge::provider::InMemoryFunctionStore::new()
            .with_function(target(), env(&[("FOO", "bar")]))
            .fail_fetch("An error occurred (AccessDeniedException): not authorized"),
    );
    let (stdout, result) = run(configured(), &store, apply(false));

    let err = result.unwrap_err();
    assert!(matches!(err, EnvMergeError::FetchFailed { .. }));
    assert_eq!(err.exit_code(), 1);
    assert!(err
        .to_string()
        .contains("An error occurred (AccessDeniedException): not authorized"));
    assert_eq!(store.submit_calls(), 0);
    assert!(stdout.contains("🔍 Fetching current environment variables"));
    assert!(!stdout.contains("📤"));
}

#[test]
fn failed_submit_reports_provider_text() {
    let store = std::sync::Arc::new(
        envmerge::provider::InMemoryFunctionStore::new()
            .with_function(target(), env(&[("FOO", "bar")]))
            .fail_submit("An error occurred (ResourceConflictException): update in progress"),
    );
    let (_, result) = run(configured(), &store, apply(false));

    let err = result.unwrap_err();
    assert!(matches!(err, EnvMergeError::SubmitFailed { .. }));
    assert!(err.to_string().starts_with("Error updating configuration"));
    assert!(err.to_string().contains("ResourceConflictException"));
    assert_eq!(store.environment(&target()), Some(env(&[("FOO", "bar")])));
}

#[test]
fn applying_twice_is_idempotent() {
    let store = store_with(env(&[("FOO", "bar"), ("SMS_API_KEY", "old-value")]));
    run(configured(), &store, apply(false)).1.unwrap();
    let first = store.environment(&target()).unwrap();
    run(configured(), &store, apply(false)).1.unwrap();
    let second = store.environment(&target()).unwrap();
    assert_eq!(first, second);
    assert_eq!(store.submit_calls(), 2);
}

#[test]
fn dry_run_does_not_touch_the_function() {
    let store = store_with(env(&[("FOO", "bar")]));
    let (stdout, result) = run(configured(), &store, apply(true));
    result.unwrap();

    assert_eq!(store.submit_calls(), 0);
    assert_eq!(store.environment(&target()), Some(env(&[("FOO", "bar")])));
    assert!(stdout.contains("Dry run: no changes submitted"));
    assert!(stdout.contains("   ✅ FOO: bar"));
}

#[test]
fn missing_secrets_fail_before_any_provider_call() {
    let store = store_with(env(&[]));
    let mut config = configured();
    config.sms.api_token = None;
    let (_, result) = run(config, &store, apply(false));

    let err = result.unwrap_err();
    assert!(err.to_string().contains("sms.api_token"));
    assert_eq!(store.fetch_calls(), 0);
    assert_eq!(store.submit_calls(), 0);
}

#[test]
fn configured_target_is_used() {
    let mut config = configured();
    config.target.function_name = "other-fn".to_string();
    let store = store_with(env(&[]));
    let (_, result) = run(config, &store, Commands::Show {
        format: "text".to_string(),
    });

    let err = result.unwrap_err();
    assert!(err.to_string().contains("Function not found: other-fn"));
}
