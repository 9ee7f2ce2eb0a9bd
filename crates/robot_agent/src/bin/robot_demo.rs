use robot_agent::{
    ComponentConfig, RobotAgent, RobotConfig, TaskEnvelope, TaskHandler, TaskOutcome, TaskRunner,
    ThreadRngSource,
};
use serde_json::json;
use std::sync::atomic::Ordering;
use tracing_subscriber::EnvFilter;

/// Scripted mission handler for the demo descriptors. Anything else drains
/// through the built-in delay fallback.
struct DemoMissionHandler;

impl TaskHandler for DemoMissionHandler {
    fn name(&self) -> &str {
        "demo_mission"
    }

    fn execute(&mut self, agent: &mut RobotAgent, task: &TaskEnvelope) -> TaskOutcome {
        match task.descriptor.as_str() {
            "forward_then_scan" => {
                agent.drive(10.0);
                match agent.read_sensor("front_sensor") {
                    Ok(value) => println!("front distance: {value:.2} units"),
                    Err(err) => eprintln!("sensor read failed: {err}"),
                }
                TaskOutcome::Completed
            }
            "rotate_and_grab" => {
                agent.rotate(90.0);
                if let Err(err) = agent.set_actuator("gripper", "close") {
                    eprintln!("gripper command failed: {err}");
                }
                TaskOutcome::Completed
            }
            "spin_in_place" => {
                for _ in 0..4 {
                    agent.rotate(90.0);
                }
                println!("completed full spin");
                TaskOutcome::Completed
            }
            _ => TaskOutcome::Declined,
        }
    }
}

fn config_map(entries: &[(&str, serde_json::Value)]) -> ComponentConfig {
    entries
        .iter()
        .map(|(key, value)| (key.to_string(), value.clone()))
        .collect()
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if matches!(args.get(1).map(|s| s.as_str()), Some("--help") | Some("-h")) {
        println!("Usage: robot_demo");
        println!(
            "Reads {} from the working directory when present.",
            robot_agent::DEFAULT_CONFIG_FILE_NAME
        );
        return;
    }

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match RobotConfig::load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    let mut agent = RobotAgent::new(config.name.clone(), Box::new(ThreadRngSource::new()));

    agent.add_sensor(
        "front_sensor",
        "ultrasonic",
        config_map(&[("max_range", json!(300))]),
    );
    agent.add_sensor(
        "left_sensor",
        "infrared",
        config_map(&[("max_range", json!(100))]),
    );
    agent.add_sensor(
        "right_sensor",
        "infrared",
        config_map(&[("max_range", json!(100))]),
    );
    agent.add_sensor("temp_sensor", "temperature", ComponentConfig::new());

    agent.add_actuator(
        "left_motor",
        "dc_motor",
        config_map(&[("max_speed", json!(100))]),
    );
    agent.add_actuator(
        "right_motor",
        "dc_motor",
        config_map(&[("max_speed", json!(100))]),
    );
    agent.add_actuator(
        "gripper",
        "servo",
        config_map(&[("min_angle", json!(0)), ("max_angle", json!(180))]),
    );

    let mut runner = TaskRunner::with_task_delay(config.task_delay());
    runner.register(Box::new(DemoMissionHandler));

    let interrupt = runner.interrupt_flag();
    ctrlc::set_handler(move || {
        interrupt.store(true, Ordering::SeqCst);
    })
    .expect("install ctrl-c handler");

    agent.submit_task("forward_then_scan");
    agent.submit_task("rotate_and_grab");
    agent.submit_task("spin_in_place");
    agent.submit_task("report_status"); // unrecognized, uses the delay fallback

    let report = runner.run(&mut agent);

    println!("tasks executed: {}", report.tasks_executed);
    println!("interrupted: {}", report.interrupted);
    println!(
        "final position: ({:.2}, {:.2}) at {:.1} degrees",
        agent.position().x,
        agent.position().y,
        agent.orientation_deg()
    );
    println!("journal entries: {}", agent.journal().len());
}
