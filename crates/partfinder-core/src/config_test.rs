use std::collections::HashMap;
use std::env::VarError;
use std::time::Duration;

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
fn build_app_config_uses_defaults_when_env_is_empty() {
    let map: HashMap<&str, &str> = HashMap::new();
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.api_base_url, "http://localhost:5001");
    assert_eq!(cfg.remote_timeout_ms, 5000);
    assert_eq!(cfg.remote_timeout(), Duration::from_millis(5000));
    assert_eq!(cfg.user_agent, "partfinder/0.1 (part-lookup)");
    assert_eq!(cfg.log_level, "info");
    assert!(cfg.catalog_path.is_none());
}

#[test]
fn api_base_url_override() {
    let mut map = HashMap::new();
    map.insert("PARTFINDER_API_BASE_URL", "https://parts.example.com");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.api_base_url, "https://parts.example.com");
}

#[test]
fn api_base_url_without_scheme_is_rejected() {
    let mut map = HashMap::new();
    map.insert("PARTFINDER_API_BASE_URL", "localhost:5001");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "PARTFINDER_API_BASE_URL"),
        "expected InvalidEnvVar(PARTFINDER_API_BASE_URL), got: {result:?}"
    );
}

#[test]
fn remote_timeout_override() {
    let mut map = HashMap::new();
    map.insert("PARTFINDER_REMOTE_TIMEOUT_MS", "1500");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.remote_timeout_ms, 1500);
}

#[test]
fn remote_timeout_invalid() {
    let mut map = HashMap::new();
    map.insert("PARTFINDER_REMOTE_TIMEOUT_MS", "not-a-number");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "PARTFINDER_REMOTE_TIMEOUT_MS"),
        "expected InvalidEnvVar(PARTFINDER_REMOTE_TIMEOUT_MS), got: {result:?}"
    );
}

#[test]
fn remote_timeout_zero_is_rejected() {
    let mut map = HashMap::new();
    map.insert("PARTFINDER_REMOTE_TIMEOUT_MS", "0");
    let err = build_app_config(lookup_from_map(&map)).unwrap_err();
    assert!(err.to_string().contains("greater than zero"));
}

#[test]
fn user_agent_and_log_level_override() {
    let mut map = HashMap::new();
    map.insert("PARTFINDER_USER_AGENT", "custom-agent/2.0");
    map.insert("PARTFINDER_LOG_LEVEL", "debug");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.user_agent, "custom-agent/2.0");
    assert_eq!(cfg.log_level, "debug");
}

#[test]
fn catalog_path_is_read_when_set() {
    let mut map = HashMap::new();
    map.insert("PARTFINDER_CATALOG_PATH", "./config/catalog.yaml");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(
        cfg.catalog_path.as_deref(),
        Some(std::path::Path::new("./config/catalog.yaml"))
    );
}

#[test]
fn blank_catalog_path_is_ignored() {
    let mut map = HashMap::new();
    map.insert("PARTFINDER_CATALOG_PATH", "  ");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!(cfg.catalog_path.is_none());
}
