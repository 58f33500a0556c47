//! Seeded random workload generation.
//!
//! Produces process lists for demos, comparisons and property tests. The
//! same config (including seed) always yields the same list.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::models::{Process, ProcessTable};

/// Parameters of a generated workload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkloadConfig {
    /// Number of processes.
    pub count: usize,
    /// Latest possible arrival tick (arrivals drawn from `0..=max_arrival`).
    pub max_arrival: i64,
    /// Smallest burst (clamped to at least 1).
    pub min_burst: i64,
    /// Largest burst.
    pub max_burst: i64,
    /// Smallest priority value.
    pub min_priority: i32,
    /// Largest priority value.
    pub max_priority: i32,
    /// RNG seed.
    pub seed: u64,
}

impl WorkloadConfig {
    /// Creates a config for `count` processes with default ranges.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            ..Default::default()
        }
    }

    /// Sets the latest arrival tick.
    pub fn with_max_arrival(mut self, max_arrival: i64) -> Self {
        self.max_arrival = max_arrival;
        self
    }

    /// Sets the burst range (inclusive).
    pub fn with_burst_range(mut self, min: i64, max: i64) -> Self {
        self.min_burst = min;
        self.max_burst = max;
        self
    }

    /// Sets the priority range (inclusive).
    pub fn with_priority_range(mut self, min: i32, max: i32) -> Self {
        self.min_priority = min;
        self.max_priority = max;
        self
    }

    /// Sets the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            count: 5,
            max_arrival: 10,
            min_burst: 1,
            max_burst: 10,
            min_priority: 0,
            max_priority: 5,
            seed: 0,
        }
    }
}

/// Generates a valid process list with ids 1..=count.
///
/// Inverted ranges collapse to their lower bound, so every record is well
/// formed. Ranges near `i64::MAX` can still fail the time-range check.
pub fn generate(config: &WorkloadConfig) -> Vec<Process> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let min_burst = config.min_burst.max(1);
    let max_burst = config.max_burst.max(min_burst);
    let max_arrival = config.max_arrival.max(0);
    let max_priority = config.max_priority.max(config.min_priority);

    let mut table = ProcessTable::new();
    for _ in 0..config.count {
        let arrival = rng.random_range(0..=max_arrival);
        let burst = rng.random_range(min_burst..=max_burst);
        let priority = rng.random_range(config.min_priority..=max_priority);
        table.push_with_priority(arrival, burst, priority);
    }
    table.processes().to_vec()
}
