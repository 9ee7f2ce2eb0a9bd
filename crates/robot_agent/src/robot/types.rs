//! Core type definitions: names, constants, component records, and errors.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

// ============================================================================
// Type Aliases
// ============================================================================

pub type SensorName = String;
pub type ActuatorName = String;
pub type TaskId = u64;
pub type AgentTime = u64;
pub type AgentEventId = u64;

/// Free-form option mapping attached to a sensor or actuator. Stored
/// verbatim, never validated.
pub type ComponentConfig = BTreeMap<String, serde_json::Value>;

// ============================================================================
// Constants
// ============================================================================

pub const DEFAULT_AGENT_NAME: &str = "SimpleBot";
pub const DEFAULT_ACTUATOR_STATE: &str = "idle";
pub const DEFAULT_TASK_DELAY_MS: u64 = 1000;

// ============================================================================
// Component Records
// ============================================================================

/// A named sensor slot: declared kind, configuration, and the most recent
/// simulated reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorRecord {
    pub kind: String,
    #[serde(default)]
    pub config: ComponentConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_reading: Option<f64>,
}

impl SensorRecord {
    pub fn new(kind: impl Into<String>, config: ComponentConfig) -> Self {
        Self {
            kind: kind.into(),
            config,
            last_reading: None,
        }
    }
}

/// A named actuator slot: declared kind, configuration, and the most recent
/// commanded state. The state string is free-form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActuatorRecord {
    pub kind: String,
    #[serde(default)]
    pub config: ComponentConfig,
    pub state: String,
}

impl ActuatorRecord {
    pub fn new(kind: impl Into<String>, config: ComponentConfig) -> Self {
        Self {
            kind: kind.into(),
            config,
            state: DEFAULT_ACTUATOR_STATE.to_string(),
        }
    }
}

// ============================================================================
// Lifecycle
// ============================================================================

/// Coarse lifecycle flag. `Executing` only for the duration of one task's
/// synchronous execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentPhase {
    #[default]
    Idle,
    Executing,
}

// ============================================================================
// Tasks
// ============================================================================

/// A queued unit of work: a monotonically assigned id plus the opaque
/// descriptor supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskEnvelope {
    pub id: TaskId,
    pub descriptor: String,
}

// ============================================================================
// Errors
// ============================================================================

/// Errors raised by agent operations. Synchronous and caller-recoverable;
/// all other operations are total over their inputs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AgentError {
    #[error("sensor '{name}' not found")]
    SensorNotFound { name: SensorName },
    #[error("actuator '{name}' not found")]
    ActuatorNotFound { name: ActuatorName },
}
