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
fn build_client_config_uses_defaults_for_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let cfg = build_client_config(lookup_from_map(&map)).expect("defaults should be valid");
    assert_eq!(cfg.api_base_url, "http://localhost:8000");
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.user_agent, "ytsum/0.1 (video-summarizer)");
    assert_eq!(cfg.history_limit, 50);
    assert_eq!(cfg, ClientConfig::default());
}

#[test]
fn api_url_override_is_used() {
    let mut map = HashMap::new();
    map.insert("YTSUM_API_URL", "https://summarizer.example.com");
    let cfg = build_client_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.api_base_url, "https://summarizer.example.com");
}

#[test]
fn api_url_trailing_slashes_are_stripped() {
    let mut map = HashMap::new();
    map.insert("YTSUM_API_URL", "http://10.0.0.5:8000//");
    let cfg = build_client_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.api_base_url, "http://10.0.0.5:8000");
}

#[test]
fn blank_api_url_falls_back_to_default() {
    let mut map = HashMap::new();
    map.insert("YTSUM_API_URL", "   ");
    let cfg = build_client_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.api_base_url, DEFAULT_API_BASE_URL);
}

#[test]
fn api_url_without_scheme_fails() {
    let mut map = HashMap::new();
    map.insert("YTSUM_API_URL", "localhost:8000");
    let result = build_client_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "YTSUM_API_URL"),
        "expected InvalidEnvVar(YTSUM_API_URL), got: {result:?}"
    );
}

#[test]
fn history_limit_override() {
    let mut map = HashMap::new();
    map.insert("YTSUM_HISTORY_LIMIT", "20");
    let cfg = build_client_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.history_limit, 20);
}

#[test]
fn history_limit_invalid() {
    let mut map = HashMap::new();
    map.insert("YTSUM_HISTORY_LIMIT", "lots");
    let result = build_client_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "YTSUM_HISTORY_LIMIT"),
        "expected InvalidEnvVar(YTSUM_HISTORY_LIMIT), got: {result:?}"
    );
}

#[test]
fn history_limit_zero_is_rejected() {
    let mut map = HashMap::new();
    map.insert("YTSUM_HISTORY_LIMIT", "0");
    let result = build_client_config(lookup_from_map(&map));
    assert!(matches!(result, Err(ConfigError::InvalidEnvVar { .. })));
}

#[test]
fn log_level_and_user_agent_overrides() {
    let mut map = HashMap::new();
    map.insert("YTSUM_LOG_LEVEL", "debug");
    map.insert("YTSUM_USER_AGENT", "custom-agent/2.0");
    let cfg = build_client_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.log_level, "debug");
    assert_eq!(cfg.user_agent, "custom-agent/2.0");
}
