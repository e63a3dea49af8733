//! Tests for configuration validation

use std::collections::HashMap;
use std::path::PathBuf;
use std::{env, fs, process};

use triage_scheduler::config::{
    SchedulerConfig, DEFAULT_MAX_LABEL_LEN, ENV_CAPACITY, ENV_HISTORY_CAPACITY, ENV_MAX_LABEL_LEN,
};

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn test_config_validation() {
    let valid = SchedulerConfig::with_capacity(20);
    assert!(valid.validate().is_ok());
    assert_eq!(valid.history_capacity(), 20);
}

#[test]
fn test_zero_capacity_is_valid() {
    assert!(SchedulerConfig::with_capacity(0).validate().is_ok());
}

#[test]
fn test_config_invalid_label_len() {
    let invalid = SchedulerConfig {
        capacity: 10,
        history_capacity: None,
        max_label_len: 0,
    };
    assert!(invalid.validate().is_err());
}

#[test]
fn test_config_from_json() {
    let json = r#"{
        "capacity": 20,
        "history_capacity": 50
    }"#;

    let config = SchedulerConfig::from_json_str(json).unwrap();
    assert_eq!(config.capacity, 20);
    assert_eq!(config.history_capacity(), 50);
    assert_eq!(config.max_label_len, DEFAULT_MAX_LABEL_LEN);
}

#[test]
fn test_config_from_json_missing_capacity() {
    let result = SchedulerConfig::from_json_str(r#"{"max_label_len": 10}"#);
    assert!(result.unwrap_err().starts_with("parse error"));
}

#[test]
fn test_config_from_lookup() {
    let config = SchedulerConfig::from_lookup(lookup(&[
        (ENV_CAPACITY, "8"),
        (ENV_HISTORY_CAPACITY, " 16 "),
        (ENV_MAX_LABEL_LEN, "32"),
    ]))
    .unwrap();

    assert_eq!(config.capacity, 8);
    assert_eq!(config.history_capacity, Some(16));
    assert_eq!(config.max_label_len, 32);
}

#[test]
fn test_config_from_lookup_requires_capacity() {
    let err = SchedulerConfig::from_lookup(lookup(&[])).unwrap_err();
    assert!(err.contains(ENV_CAPACITY));
}

#[test]
fn test_config_from_lookup_rejects_garbage() {
    let err = SchedulerConfig::from_lookup(lookup(&[(ENV_CAPACITY, "lots")])).unwrap_err();
    assert!(err.starts_with(ENV_CAPACITY));
}

fn write_env_file(name: &str, contents: &str) -> PathBuf {
    let path = env::temp_dir().join(format!("triage-{}-{name}.env", process::id()));
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_config_from_env_file() {
    let path = write_env_file(
        "valid",
        "# intake desk\nTRIAGE_CAPACITY=7\nTRIAGE_MAX_LABEL_LEN=40\n",
    );
    let config = SchedulerConfig::from_env_file_with(&path, lookup(&[])).unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(config.capacity, 7);
    assert_eq!(config.history_capacity, None);
    assert_eq!(config.max_label_len, 40);
}

#[test]
fn test_config_process_vars_override_env_file() {
    let path = write_env_file("override", "TRIAGE_CAPACITY=7\nTRIAGE_HISTORY_CAPACITY=9\n");
    let config =
        SchedulerConfig::from_env_file_with(&path, lookup(&[(ENV_CAPACITY, "3")])).unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(config.capacity, 3);
    assert_eq!(config.history_capacity, Some(9));
}

#[test]
fn test_config_missing_env_file_falls_back_to_process_vars() {
    let path = env::temp_dir().join(format!("triage-{}-absent.env", process::id()));
    assert!(!path.exists());

    let config =
        SchedulerConfig::from_env_file_with(&path, lookup(&[(ENV_CAPACITY, "12")])).unwrap();
    assert_eq!(config.capacity, 12);

    let err = SchedulerConfig::from_env_file_with(&path, lookup(&[])).unwrap_err();
    assert!(err.contains("is not set"));
}

#[test]
fn test_config_malformed_env_file_is_reported() {
    let path = write_env_file("malformed", "THIS LINE IS BROKEN\nTRIAGE_CAPACITY=7\n");
    let err = SchedulerConfig::from_env_file_with(&path, lookup(&[])).unwrap_err();
    fs::remove_file(&path).unwrap();

    assert!(err.starts_with(".env invalid"), "unexpected error: {err}");
}

#[test]
fn test_config_from_env_without_capacity() {
    // the package root carries no .env file
    if env::var_os(ENV_CAPACITY).is_none() {
        let err = SchedulerConfig::from_env().unwrap_err();
        assert!(err.contains(ENV_CAPACITY));
    }
}
