//! RobotAgent kernel: pose, component registries, task queue, event journal.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, VecDeque};
use tracing::{debug, info, warn};

use crate::geometry::{heading_displacement, normalize_degrees, Pose};

use super::hardware::{RandomSource, ThreadRngSource};
use super::types::{
    ActuatorName, ActuatorRecord, AgentError, AgentEventId, AgentPhase, AgentTime,
    ComponentConfig, SensorName, SensorRecord, TaskEnvelope, TaskId, DEFAULT_AGENT_NAME,
};

// ============================================================================
// Events
// ============================================================================

/// One journalled state change. `time` is the agent's task clock: it advances
/// by one per executed task, so configuration made between tasks shares the
/// current tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentEvent {
    pub id: AgentEventId,
    pub time: AgentTime,
    pub kind: AgentEventKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum AgentEventKind {
    SensorAdded {
        name: SensorName,
        kind: String,
        replaced: bool,
    },
    ActuatorAdded {
        name: ActuatorName,
        kind: String,
        replaced: bool,
    },
    SensorRead {
        name: SensorName,
        value: f64,
    },
    ActuatorSet {
        name: ActuatorName,
        state: String,
    },
    Moved {
        distance: f64,
        pose: Pose,
    },
    Rotated {
        delta_deg: f64,
        orientation_deg: f64,
    },
    TaskQueued {
        task_id: TaskId,
        descriptor: String,
        queue_depth: usize,
    },
    TaskCompleted {
        task_id: TaskId,
        descriptor: String,
        handled_by: String,
        remaining: usize,
    },
}

// ============================================================================
// Robot Agent
// ============================================================================

/// The robot's in-process state holder: kinematic state, named sensor and
/// actuator slots, and the FIFO task queue. Execution of queued tasks lives
/// in [`TaskRunner`](super::runner::TaskRunner).
///
/// Fully synchronous and single-threaded; there is no hardware behind the
/// registries, only the injected [`RandomSource`].
pub struct RobotAgent {
    name: String,
    position: Pose,
    orientation_deg: f64,
    sensors: BTreeMap<SensorName, SensorRecord>,
    actuators: BTreeMap<ActuatorName, ActuatorRecord>,
    tasks: VecDeque<TaskEnvelope>,
    phase: AgentPhase,
    time: AgentTime,
    next_task_id: TaskId,
    next_event_id: AgentEventId,
    journal: Vec<AgentEvent>,
    rng: Box<dyn RandomSource>,
}

impl RobotAgent {
    /// Create an agent with an explicit random source.
    pub fn new(name: impl Into<String>, rng: Box<dyn RandomSource>) -> Self {
        let name = name.into();
        info!(name = %name, "robot initialized");
        Self {
            name,
            position: Pose::default(),
            orientation_deg: 0.0,
            sensors: BTreeMap::new(),
            actuators: BTreeMap::new(),
            tasks: VecDeque::new(),
            phase: AgentPhase::Idle,
            time: 0,
            next_task_id: 0,
            next_event_id: 0,
            journal: Vec::new(),
            rng,
        }
    }

    /// Create an agent with the default name and the thread-local RNG.
    pub fn with_defaults() -> Self {
        Self::new(DEFAULT_AGENT_NAME, Box::new(ThreadRngSource::new()))
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> Pose {
        self.position
    }

    /// Current heading in degrees, always in [0, 360).
    pub fn orientation_deg(&self) -> f64 {
        self.orientation_deg
    }

    pub fn phase(&self) -> AgentPhase {
        self.phase
    }

    /// Number of tasks executed so far.
    pub fn time(&self) -> AgentTime {
        self.time
    }

    pub fn sensors(&self) -> &BTreeMap<SensorName, SensorRecord> {
        &self.sensors
    }

    pub fn actuators(&self) -> &BTreeMap<ActuatorName, ActuatorRecord> {
        &self.actuators
    }

    pub fn sensor(&self, name: &str) -> Option<&SensorRecord> {
        self.sensors.get(name)
    }

    pub fn actuator(&self, name: &str) -> Option<&ActuatorRecord> {
        self.actuators.get(name)
    }

    pub fn pending_tasks(&self) -> usize {
        self.tasks.len()
    }

    pub fn peek_task(&self) -> Option<&TaskEnvelope> {
        self.tasks.front()
    }

    pub fn journal(&self) -> &[AgentEvent] {
        &self.journal
    }

    // ------------------------------------------------------------------
    // Configuration
    // ------------------------------------------------------------------

    /// Insert or overwrite a sensor slot. Re-adding an existing name silently
    /// replaces the prior record, clearing its last reading.
    pub fn add_sensor(
        &mut self,
        name: impl Into<SensorName>,
        kind: impl Into<String>,
        config: ComponentConfig,
    ) {
        let name = name.into();
        let kind = kind.into();
        let replaced = self
            .sensors
            .insert(name.clone(), SensorRecord::new(kind.clone(), config))
            .is_some();
        if replaced {
            warn!(sensor = %name, "sensor overwritten");
        }
        info!(sensor = %name, kind = %kind, "sensor added");
        self.record_event(AgentEventKind::SensorAdded {
            name,
            kind,
            replaced,
        });
    }

    /// Insert or overwrite an actuator slot, starting in the `"idle"` state.
    pub fn add_actuator(
        &mut self,
        name: impl Into<ActuatorName>,
        kind: impl Into<String>,
        config: ComponentConfig,
    ) {
        let name = name.into();
        let kind = kind.into();
        let replaced = self
            .actuators
            .insert(name.clone(), ActuatorRecord::new(kind.clone(), config))
            .is_some();
        if replaced {
            warn!(actuator = %name, "actuator overwritten");
        }
        info!(actuator = %name, kind = %kind, "actuator added");
        self.record_event(AgentEventKind::ActuatorAdded {
            name,
            kind,
            replaced,
        });
    }

    // ------------------------------------------------------------------
    // Sensing and actuation
    // ------------------------------------------------------------------

    /// Draw a simulated reading in [0, 1) from the injected random source,
    /// store it as the sensor's last reading, and return it.
    pub fn read_sensor(&mut self, name: &str) -> Result<f64, AgentError> {
        let Some(record) = self.sensors.get_mut(name) else {
            return Err(AgentError::SensorNotFound {
                name: name.to_string(),
            });
        };
        let value = self.rng.next_unit();
        record.last_reading = Some(value);
        debug!(sensor = %name, value, "sensor read");
        self.record_event(AgentEventKind::SensorRead {
            name: name.to_string(),
            value,
        });
        Ok(value)
    }

    /// Overwrite the actuator's state with the caller-supplied string. The
    /// value is not validated against the declared kind.
    pub fn set_actuator(&mut self, name: &str, state: impl Into<String>) -> Result<(), AgentError> {
        let Some(record) = self.actuators.get_mut(name) else {
            return Err(AgentError::ActuatorNotFound {
                name: name.to_string(),
            });
        };
        let state = state.into();
        record.state = state.clone();
        info!(actuator = %name, state = %state, "actuator set");
        self.record_event(AgentEventKind::ActuatorSet {
            name: name.to_string(),
            state,
        });
        Ok(())
    }

    // ------------------------------------------------------------------
    // Motion
    // ------------------------------------------------------------------

    /// Move forward by `distance` along the current heading. No bounds or
    /// collision checks.
    pub fn drive(&mut self, distance: f64) {
        let (dx, dy) = heading_displacement(distance, self.orientation_deg);
        self.position = self.position.translated(dx, dy);
        info!(
            distance,
            x = self.position.x,
            y = self.position.y,
            "robot moved"
        );
        self.record_event(AgentEventKind::Moved {
            distance,
            pose: self.position,
        });
    }

    /// Rotate by `delta_deg` (negative turns clockwise). The stored heading
    /// stays in [0, 360).
    pub fn rotate(&mut self, delta_deg: f64) {
        self.orientation_deg = normalize_degrees(self.orientation_deg + delta_deg);
        info!(delta_deg, orientation_deg = self.orientation_deg, "robot rotated");
        self.record_event(AgentEventKind::Rotated {
            delta_deg,
            orientation_deg: self.orientation_deg,
        });
    }

    // ------------------------------------------------------------------
    // Task queue
    // ------------------------------------------------------------------

    /// Append a task descriptor to the queue and return its assigned id.
    pub fn submit_task(&mut self, descriptor: impl Into<String>) -> TaskId {
        let id = self.next_task_id;
        self.next_task_id = self.next_task_id.saturating_add(1);
        let descriptor = descriptor.into();
        self.tasks.push_back(TaskEnvelope {
            id,
            descriptor: descriptor.clone(),
        });
        let queue_depth = self.tasks.len();
        info!(task_id = id, descriptor = %descriptor, queue_depth, "task queued");
        self.record_event(AgentEventKind::TaskQueued {
            task_id: id,
            descriptor,
            queue_depth,
        });
        id
    }

    pub(crate) fn set_phase(&mut self, phase: AgentPhase) {
        self.phase = phase;
    }

    /// Remove the queue head after execution, advance the task clock, and
    /// journal the completion. The runner guarantees `task_id` is the head.
    pub(crate) fn consume_task(&mut self, task_id: TaskId, handled_by: &str) {
        let Some(task) = self.tasks.pop_front() else {
            return;
        };
        debug_assert_eq!(task.id, task_id);
        self.time = self.time.saturating_add(1);
        let remaining = self.tasks.len();
        info!(task_id = task.id, handled_by, remaining, "task completed");
        self.record_event(AgentEventKind::TaskCompleted {
            task_id: task.id,
            descriptor: task.descriptor,
            handled_by: handled_by.to_string(),
            remaining,
        });
    }

    fn record_event(&mut self, kind: AgentEventKind) {
        let event = AgentEvent {
            id: self.next_event_id,
            time: self.time,
            kind,
        };
        self.next_event_id = self.next_event_id.saturating_add(1);
        self.journal.push(event);
    }
}
