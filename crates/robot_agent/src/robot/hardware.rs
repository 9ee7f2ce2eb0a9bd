//! Simulated hardware seams: the random source standing in for sensor
//! acquisition and the sleeper standing in for actuation time. Both are
//! injected at construction so tests can run deterministically and without
//! blocking.

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Source of simulated sensor noise.
pub trait RandomSource {
    /// Next uniformly distributed value in [0, 1).
    fn next_unit(&mut self) -> f64;
}

/// Production source backed by the thread-local RNG.
pub struct ThreadRngSource {
    rng: ThreadRng,
}

impl ThreadRngSource {
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for ThreadRngSource {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for ThreadRngSource {
    fn next_unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// Deterministic source seeded from a fixed value. Intended for tests and
/// reproducible demo runs.
pub struct SeededSource {
    rng: StdRng,
}

impl SeededSource {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededSource {
    fn next_unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// Blocking wait used to simulate task execution time.
pub trait Sleeper {
    fn sleep(&mut self, duration: Duration);
}

/// Production sleeper that actually blocks the calling thread.
pub struct SystemSleeper;

impl Sleeper for SystemSleeper {
    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Records requested sleeps without blocking. Clones share the same log, so
/// a caller can keep a handle while the runner owns the sleeper.
#[derive(Debug, Clone, Default)]
pub struct RecordingSleeper {
    slept: Arc<Mutex<Vec<Duration>>>,
}

impl RecordingSleeper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sleep_count(&self) -> usize {
        self.slept.lock().map(|log| log.len()).unwrap_or(0)
    }

    pub fn total_slept(&self) -> Duration {
        self.slept
            .lock()
            .map(|log| log.iter().sum())
            .unwrap_or(Duration::ZERO)
    }
}

impl Sleeper for RecordingSleeper {
    fn sleep(&mut self, duration: Duration) {
        if let Ok(mut log) = self.slept.lock() {
            log.push(duration);
        }
    }
}
