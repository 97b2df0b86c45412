use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn parse_environment_production() {
    assert_eq!(parse_environment("production"), Environment::Production);
}

#[test]
fn parse_environment_test() {
    assert_eq!(parse_environment("test"), Environment::Test);
}

#[test]
fn parse_environment_unknown_defaults_to_development() {
    assert_eq!(parse_environment("staging"), Environment::Development);
}

#[test]
fn build_app_config_uses_defaults_when_env_is_empty() {
    let map = HashMap::new();
    let cfg = build_app_config(lookup_from_map(&map)).expect("defaults must be valid");
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.bind_addr.to_string(), "0.0.0.0:3000");
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.search_url, DEFAULT_SEARCH_URL);
    assert_eq!(cfg.request_timeout_secs, 30);
    assert_eq!(cfg.user_agent, DEFAULT_USER_AGENT);
    assert_eq!(cfg.export_dir, std::path::PathBuf::from("."));
}

#[test]
fn build_app_config_applies_overrides() {
    let mut map = HashMap::new();
    map.insert("TASTE_ENV", "production");
    map.insert("TASTE_SEARCH_URL", "http://127.0.0.1:9999/API/isearch/");
    map.insert("TASTE_REQUEST_TIMEOUT_SECS", "5");
    map.insert("TASTE_EXPORT_DIR", "/tmp/exports");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.env, Environment::Production);
    assert_eq!(cfg.search_url, "http://127.0.0.1:9999/API/isearch/");
    assert_eq!(cfg.request_timeout_secs, 5);
    assert_eq!(cfg.export_dir, std::path::PathBuf::from("/tmp/exports"));
}

#[test]
fn build_app_config_fails_with_invalid_bind_addr() {
    let mut map = HashMap::new();
    map.insert("TASTE_BIND_ADDR", "not-a-socket-addr");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "TASTE_BIND_ADDR"),
        "expected InvalidEnvVar(TASTE_BIND_ADDR), got: {result:?}"
    );
}

#[test]
fn build_app_config_fails_with_invalid_timeout() {
    let mut map = HashMap::new();
    map.insert("TASTE_REQUEST_TIMEOUT_SECS", "not-a-number");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "TASTE_REQUEST_TIMEOUT_SECS"),
        "expected InvalidEnvVar(TASTE_REQUEST_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_zero_timeout() {
    let mut map = HashMap::new();
    map.insert("TASTE_REQUEST_TIMEOUT_SECS", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(matches!(result, Err(ConfigError::InvalidEnvVar { .. })));
}

#[test]
fn build_app_config_rejects_blank_search_url() {
    let mut map = HashMap::new();
    map.insert("TASTE_SEARCH_URL", "  ");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "TASTE_SEARCH_URL"),
        "expected InvalidEnvVar(TASTE_SEARCH_URL), got: {result:?}"
    );
}
