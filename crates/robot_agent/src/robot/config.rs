//! Robot configuration: defaults plus optional TOML file loading.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

use super::types::{DEFAULT_AGENT_NAME, DEFAULT_TASK_DELAY_MS};

pub const DEFAULT_CONFIG_FILE_NAME: &str = "robot.toml";

/// Startup configuration for the demo binary and embedding callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RobotConfig {
    /// Agent name.
    #[serde(default = "default_name")]
    pub name: String,
    /// Simulated execution delay applied by the fallback handler.
    #[serde(default = "default_task_delay_ms")]
    pub task_delay_ms: u64,
}

impl Default for RobotConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            task_delay_ms: default_task_delay_ms(),
        }
    }
}

impl RobotConfig {
    /// Load `robot.toml` from the working directory if present, otherwise
    /// fall back to defaults.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Path::new(DEFAULT_CONFIG_FILE_NAME);
        if path.exists() {
            Self::from_config_file(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn from_config_file(path: &Path) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|err| ConfigError::ReadConfigFile {
                path: path.display().to_string(),
                detail: err.to_string(),
            })?;
        toml::from_str(&content).map_err(|err| ConfigError::ParseConfigFile {
            path: path.display().to_string(),
            detail: err.to_string(),
        })
    }

    pub fn task_delay(&self) -> Duration {
        Duration::from_millis(self.task_delay_ms)
    }
}

fn default_name() -> String {
    DEFAULT_AGENT_NAME.to_string()
}

fn default_task_delay_ms() -> u64 {
    DEFAULT_TASK_DELAY_MS
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {detail}")]
    ReadConfigFile { path: String, detail: String },
    #[error("failed to parse config file {path}: {detail}")]
    ParseConfigFile { path: String, detail: String },
}
