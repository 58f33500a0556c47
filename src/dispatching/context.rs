//! Scheduling context for dispatching rule evaluation.

use crate::models::Process;

/// Simulation state visible to dispatching rules at a decision point.
#[derive(Debug, Clone, Default)]
pub struct SchedulingContext {
    /// Current simulation clock (ticks).
    pub current_time: i64,
}

impl SchedulingContext {
    /// Creates a context at the given tick.
    pub fn at_time(current_time: i64) -> Self {
        Self { current_time }
    }

    /// Ticks the process has spent waiting since arrival (0 if not yet arrived).
    pub fn waited(&self, process: &Process) -> i64 {
        (self.current_time - process.arrival_time).max(0)
    }
}
