//! Tests for the robot module.

use super::*;
use crate::geometry::{pose_distance, Pose};
use std::time::Duration;

fn seeded_agent(name: &str) -> RobotAgent {
    RobotAgent::new(name, Box::new(SeededSource::from_seed(7)))
}

/// Runner with a short delay and a non-blocking recording sleeper. The
/// returned sleeper handle shares the log with the one installed.
fn quiet_runner() -> (TaskRunner, RecordingSleeper) {
    let mut runner = TaskRunner::with_task_delay(Duration::from_millis(25));
    let sleeper = RecordingSleeper::new();
    runner.set_sleeper(Box::new(sleeper.clone()));
    (runner, sleeper)
}

mod config;
mod kernel;
