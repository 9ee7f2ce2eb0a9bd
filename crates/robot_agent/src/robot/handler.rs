//! Task handler capability: ordered override/fallback dispatch over the
//! queue head, replacing ad-hoc substitution of the execution method.

use super::kernel::RobotAgent;
use super::types::TaskEnvelope;

/// A caller-supplied strategy for recognized task descriptors.
///
/// The runner offers the queue head to each registered handler in order.
/// The first handler returning [`TaskOutcome::Completed`] consumes the task;
/// if every handler declines, the built-in delay-based completion applies.
/// Handlers may drive any agent operation (motion, sensing, actuation,
/// queueing more tasks) but never touch the queue head themselves.
pub trait TaskHandler {
    /// Stable name recorded in the journal for tasks this handler completes.
    fn name(&self) -> &str;

    /// Attempt to execute the task. Declining leaves the queue untouched and
    /// the next handler is tried.
    fn execute(&mut self, agent: &mut RobotAgent, task: &TaskEnvelope) -> TaskOutcome;
}

/// The result of offering a task to a handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskOutcome {
    /// The handler recognized and fully executed the task.
    Completed,
    /// The handler does not recognize the task.
    Declined,
}

impl TaskOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, TaskOutcome::Completed)
    }
}
