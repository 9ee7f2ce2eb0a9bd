use super::*;
use std::fs;
use std::path::PathBuf;

fn temp_config_path(tag: &str) -> PathBuf {
    std::env::temp_dir().join(format!("robot-agent-config-{tag}-{}.toml", std::process::id()))
}

#[test]
fn defaults_apply_without_a_file() {
    let config = RobotConfig::default();
    assert_eq!(config.name, DEFAULT_AGENT_NAME);
    assert_eq!(config.task_delay_ms, DEFAULT_TASK_DELAY_MS);
    assert_eq!(config.task_delay(), Duration::from_millis(DEFAULT_TASK_DELAY_MS));
}

#[test]
fn config_reads_from_file() {
    let path = temp_config_path("read");
    fs::write(&path, "name = \"FieldBot\"\ntask_delay_ms = 250\n").expect("write config");

    let config = RobotConfig::from_config_file(&path).expect("parse config");
    assert_eq!(config.name, "FieldBot");
    assert_eq!(config.task_delay_ms, 250);

    fs::remove_file(&path).ok();
}

#[test]
fn partial_config_falls_back_to_defaults() {
    let path = temp_config_path("partial");
    fs::write(&path, "name = \"PartialBot\"\n").expect("write config");

    let config = RobotConfig::from_config_file(&path).expect("parse config");
    assert_eq!(config.name, "PartialBot");
    assert_eq!(config.task_delay_ms, DEFAULT_TASK_DELAY_MS);

    fs::remove_file(&path).ok();
}

#[test]
fn malformed_config_is_a_parse_error() {
    let path = temp_config_path("broken");
    fs::write(&path, "name = [not toml").expect("write config");

    let err = RobotConfig::from_config_file(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseConfigFile { .. }));

    fs::remove_file(&path).ok();
}

#[test]
fn missing_config_is_a_read_error() {
    let path = temp_config_path("absent");
    let err = RobotConfig::from_config_file(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ReadConfigFile { .. }));
}
