use super::*;

#[test]
fn rotation_stays_normalized() {
    let mut agent = seeded_agent("spin");
    for delta in [90.0, 270.0, -450.0, 720.0, -0.5, 359.9, -359.9] {
        agent.rotate(delta);
        let orientation = agent.orientation_deg();
        assert!(
            (0.0..360.0).contains(&orientation),
            "orientation {orientation} out of range after delta {delta}"
        );
    }
}

#[test]
fn full_turn_is_identity() {
    let mut agent = seeded_agent("turn");
    agent.rotate(37.5);
    let before = agent.orientation_deg();
    agent.rotate(360.0);
    agent.rotate(360.0);
    assert!((agent.orientation_deg() - before).abs() < 1e-9);
}

#[test]
fn negative_rotation_wraps() {
    let mut agent = seeded_agent("wrap");
    agent.rotate(-90.0);
    assert!((agent.orientation_deg() - 270.0).abs() < 1e-9);
}

#[test]
fn zero_distance_move_is_identity() {
    for heading in [0.0, 45.0, 135.0, 301.25] {
        let mut agent = seeded_agent("still");
        agent.rotate(heading);
        agent.drive(0.0);
        assert_eq!(agent.position(), Pose::new(0.0, 0.0));
    }
}

#[test]
fn drive_turn_drive_returns_home() {
    let mut agent = seeded_agent("boomerang");
    agent.rotate(33.0);
    let start = agent.position();
    agent.drive(12.5);
    agent.rotate(180.0);
    agent.drive(12.5);
    assert!(pose_distance(agent.position(), start) < 1e-9);
}

#[test]
fn drive_follows_heading() {
    let mut agent = seeded_agent("east");
    agent.drive(10.0);
    assert!((agent.position().x - 10.0).abs() < 1e-9);
    assert!(agent.position().y.abs() < 1e-9);

    agent.rotate(90.0);
    agent.drive(5.0);
    assert!((agent.position().x - 10.0).abs() < 1e-9);
    assert!((agent.position().y - 5.0).abs() < 1e-9);
}

#[test]
fn read_missing_sensor_is_rejected() {
    let mut agent = seeded_agent("blind");
    let err = agent.read_sensor("missing").unwrap_err();
    assert!(matches!(err, AgentError::SensorNotFound { .. }));
}

#[test]
fn read_sensor_returns_unit_value_and_stores_it() {
    let mut agent = seeded_agent("scan");
    agent.add_sensor("front", "ultrasonic", ComponentConfig::new());

    let value = agent.read_sensor("front").expect("sensor registered");
    assert!((0.0..1.0).contains(&value));
    assert_eq!(
        agent.sensor("front").expect("sensor").last_reading,
        Some(value)
    );
}

#[test]
fn seeded_reads_are_deterministic() {
    let mut first = seeded_agent("a");
    let mut second = seeded_agent("b");
    first.add_sensor("s", "x", ComponentConfig::new());
    second.add_sensor("s", "x", ComponentConfig::new());

    for _ in 0..8 {
        let left = first.read_sensor("s").expect("read");
        let right = second.read_sensor("s").expect("read");
        assert_eq!(left, right);
    }
}

#[test]
fn set_missing_actuator_is_rejected() {
    let mut agent = seeded_agent("numb");
    let err = agent.set_actuator("missing", "close").unwrap_err();
    assert!(matches!(err, AgentError::ActuatorNotFound { .. }));
}

#[test]
fn set_actuator_overwrites_state_verbatim() {
    let mut agent = seeded_agent("grip");
    agent.add_actuator("gripper", "servo", ComponentConfig::new());
    agent.set_actuator("gripper", "close").expect("actuator registered");
    assert_eq!(agent.actuator("gripper").expect("actuator").state, "close");

    // Free-form states are accepted even when they make no sense for the kind.
    agent.set_actuator("gripper", "warp_speed").expect("actuator registered");
    assert_eq!(
        agent.actuator("gripper").expect("actuator").state,
        "warp_speed"
    );
}

#[test]
fn submitted_tasks_keep_insertion_order() {
    let mut agent = seeded_agent("queue");
    let first = agent.submit_task("a");
    let second = agent.submit_task("b");

    assert_eq!(first, 0);
    assert_eq!(second, 1);
    assert_eq!(agent.pending_tasks(), 2);
    assert_eq!(agent.peek_task().expect("head").descriptor, "a");
}

#[test]
fn journal_records_state_changes_in_order() {
    let mut agent = seeded_agent("journal");
    agent.add_sensor("s", "x", ComponentConfig::new());
    agent.rotate(90.0);
    agent.submit_task("t");

    let kinds: Vec<_> = agent.journal().iter().map(|event| &event.kind).collect();
    assert_eq!(kinds.len(), 3);
    assert!(matches!(kinds[0], AgentEventKind::SensorAdded { .. }));
    assert!(matches!(kinds[1], AgentEventKind::Rotated { .. }));
    assert!(matches!(kinds[2], AgentEventKind::TaskQueued { .. }));

    // Event ids are dense and the task clock has not advanced yet.
    for (index, event) in agent.journal().iter().enumerate() {
        assert_eq!(event.id, index as u64);
        assert_eq!(event.time, 0);
    }
}
