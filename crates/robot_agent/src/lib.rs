pub mod geometry;
pub mod robot;

pub use geometry::{heading_displacement, normalize_degrees, pose_distance, Pose, FULL_TURN_DEG};

// Agent kernel and records
pub use robot::{
    ActuatorName, ActuatorRecord, AgentError, AgentEvent, AgentEventId, AgentEventKind,
    AgentPhase, AgentTime, ComponentConfig, RobotAgent, SensorName, SensorRecord, TaskEnvelope,
    TaskId, DEFAULT_ACTUATOR_STATE, DEFAULT_AGENT_NAME,
};

// Task execution (handler chain + run loop)
pub use robot::{
    RunReport, RunnerMetrics, TaskHandler, TaskOutcome, TaskRunner, DEFAULT_TASK_DELAY_MS,
    FALLBACK_HANDLER_NAME,
};

// Simulated hardware seams
pub use robot::{
    RandomSource, RecordingSleeper, SeededSource, Sleeper, SystemSleeper, ThreadRngSource,
};

// Configuration
pub use robot::{ConfigError, RobotConfig, DEFAULT_CONFIG_FILE_NAME};
