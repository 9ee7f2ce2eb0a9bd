//! Robot agent module - kernel state, simulated hardware seams, and task
//! execution.
//!
//! This module is organized into submodules:
//! - `types`: core type definitions (names, records, phase, errors)
//! - `kernel`: RobotAgent state holder and event journal
//! - `hardware`: injectable randomness and timing seams
//! - `handler`: TaskHandler capability (override/fallback dispatch)
//! - `runner`: TaskRunner drain loop, interruption, metrics
//! - `config`: TOML-backed startup configuration

mod config;
mod handler;
mod hardware;
mod kernel;
mod runner;
mod types;

#[cfg(test)]
mod tests;

pub use config::{ConfigError, RobotConfig, DEFAULT_CONFIG_FILE_NAME};
pub use handler::{TaskHandler, TaskOutcome};
pub use hardware::{
    RandomSource, RecordingSleeper, SeededSource, Sleeper, SystemSleeper, ThreadRngSource,
};
pub use kernel::{AgentEvent, AgentEventKind, RobotAgent};
pub use runner::{RunReport, RunnerMetrics, TaskRunner, FALLBACK_HANDLER_NAME};
pub use types::{
    ActuatorName, ActuatorRecord, AgentError, AgentEventId, AgentPhase, AgentTime,
    ComponentConfig, SensorName, SensorRecord, TaskEnvelope, TaskId, DEFAULT_ACTUATOR_STATE,
    DEFAULT_AGENT_NAME, DEFAULT_TASK_DELAY_MS,
};
