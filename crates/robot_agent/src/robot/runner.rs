//! TaskRunner: drains the agent's queue through the handler chain, applying
//! the simulated execution delay for unrecognized tasks, honoring external
//! interruption between tasks, and keeping execution metrics.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{info, warn};

use super::handler::TaskHandler;
use super::hardware::{Sleeper, SystemSleeper};
use super::kernel::RobotAgent;
use super::types::{AgentPhase, DEFAULT_TASK_DELAY_MS};

/// Name journalled for tasks completed by the built-in delay fallback.
pub const FALLBACK_HANDLER_NAME: &str = "builtin_delay";

// ============================================================================
// Metrics and Reports
// ============================================================================

/// Execution counters maintained across `execute_next` calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RunnerMetrics {
    /// Total tasks executed.
    pub tasks_executed: u64,
    /// Tasks consumed by a registered handler.
    pub handled_by_chain: u64,
    /// Tasks consumed by the built-in delay fallback.
    pub handled_by_fallback: u64,
    /// Wall-clock time spent executing tasks.
    pub busy: Duration,
}

/// Outcome of one `run` invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    pub tasks_executed: u64,
    pub interrupted: bool,
}

// ============================================================================
// Task Runner
// ============================================================================

/// Synchronous executor for a [`RobotAgent`]'s task queue.
///
/// Holds the ordered handler chain, the injected sleeper, and the interrupt
/// flag. One runner drives one agent at a time; nothing is shared across
/// threads except the interrupt flag itself.
pub struct TaskRunner {
    handlers: Vec<Box<dyn TaskHandler>>,
    task_delay: Duration,
    sleeper: Box<dyn Sleeper>,
    interrupt: Arc<AtomicBool>,
    metrics: RunnerMetrics,
}

impl Default for TaskRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskRunner {
    /// Create a runner with the default unit-time delay and a blocking
    /// system sleeper.
    pub fn new() -> Self {
        Self::with_task_delay(Duration::from_millis(DEFAULT_TASK_DELAY_MS))
    }

    /// Create a runner with an explicit simulated execution delay.
    pub fn with_task_delay(task_delay: Duration) -> Self {
        Self {
            handlers: Vec::new(),
            task_delay,
            sleeper: Box::new(SystemSleeper),
            interrupt: Arc::new(AtomicBool::new(false)),
            metrics: RunnerMetrics::default(),
        }
    }

    /// Replace the sleeper. Tests inject a non-blocking recorder here.
    pub fn set_sleeper(&mut self, sleeper: Box<dyn Sleeper>) {
        self.sleeper = sleeper;
    }

    /// Append a handler to the chain. Registration order is trial order.
    pub fn register(&mut self, handler: Box<dyn TaskHandler>) {
        self.handlers.push(handler);
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    pub fn task_delay(&self) -> Duration {
        self.task_delay
    }

    pub fn metrics(&self) -> RunnerMetrics {
        self.metrics
    }

    /// Shared flag observed between tasks. Wire this to a ctrl-c handler to
    /// stop a running drain early.
    pub fn interrupt_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.interrupt)
    }

    fn is_interrupted(&self) -> bool {
        self.interrupt.load(Ordering::SeqCst)
    }

    /// Execute the task at the head of the queue.
    ///
    /// Offers the head to each handler in registration order; the first
    /// acceptance consumes it. If every handler declines, the built-in
    /// fallback consumes it after the simulated delay. Returns false (with
    /// no state change) when the queue is empty.
    pub fn execute_next(&mut self, agent: &mut RobotAgent) -> bool {
        let Some(task) = agent.peek_task().cloned() else {
            info!("no tasks in queue");
            return false;
        };

        let started = Instant::now();
        agent.set_phase(AgentPhase::Executing);
        info!(task_id = task.id, descriptor = %task.descriptor, "executing task");

        let mut handled_by = None;
        for handler in &mut self.handlers {
            if handler.execute(agent, &task).is_completed() {
                handled_by = Some(handler.name().to_string());
                break;
            }
        }

        let handled_by = match handled_by {
            Some(name) => {
                self.metrics.handled_by_chain += 1;
                name
            }
            None => {
                // Unrecognized descriptors always "succeed" after the delay.
                self.sleeper.sleep(self.task_delay);
                self.metrics.handled_by_fallback += 1;
                FALLBACK_HANDLER_NAME.to_string()
            }
        };

        agent.consume_task(task.id, &handled_by);
        agent.set_phase(AgentPhase::Idle);
        self.metrics.tasks_executed += 1;
        self.metrics.busy += started.elapsed();
        true
    }

    /// Drain the queue to completion or external interruption.
    ///
    /// Interruption is observed only between tasks, never mid-task. The
    /// shutdown report always runs on the way out, normal or interrupted.
    pub fn run(&mut self, agent: &mut RobotAgent) -> RunReport {
        info!(name = %agent.name(), "robot starting");
        let _shutdown = ShutdownGuard {
            name: agent.name().to_string(),
        };

        let mut tasks_executed = 0;
        let mut interrupted = false;
        while agent.pending_tasks() > 0 {
            if self.is_interrupted() {
                interrupted = true;
                warn!("robot operation interrupted");
                break;
            }
            if self.execute_next(agent) {
                tasks_executed += 1;
            }
        }

        if !interrupted {
            info!(tasks_executed, "all tasks completed");
        }
        RunReport {
            tasks_executed,
            interrupted,
        }
    }
}

/// Emits the shutdown line when the run scope exits, whichever way it exits.
struct ShutdownGuard {
    name: String,
}

impl Drop for ShutdownGuard {
    fn drop(&mut self) {
        info!(name = %self.name, "robot shutting down");
    }
}
