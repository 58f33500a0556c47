//! Schedule quality metrics.
//!
//! Derives timing indicators from a completed schedule. Every function here
//! is pure: re-running it on the same input yields identical values.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Turnaround | completion - arrival |
//! | Waiting | turnaround - burst |
//! | Response | first dispatch - arrival |
//! | Makespan | Latest completion time |
//! | Idle Time | Ticks before the makespan with nothing running |
//! | CPU Utilization | busy / makespan |
//! | Throughput | completed / makespan |
//! | Context Switches | Changes of the running process |
//!
//! Averages are arithmetic means over completed processes, and `0.0` for an
//! empty run.

use serde::{Deserialize, Serialize};

use crate::models::{Completion, ProcessId, Schedule};

/// Timing of a single process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessMetrics {
    /// Process id.
    pub process_id: ProcessId,
    /// Completion tick.
    pub completion_time: i64,
    /// Completion minus arrival.
    pub turnaround_time: i64,
    /// Turnaround minus burst.
    pub waiting_time: i64,
    /// First dispatch minus arrival.
    pub response_time: i64,
}

impl From<&Completion> for ProcessMetrics {
    fn from(c: &Completion) -> Self {
        Self {
            process_id: c.process_id(),
            completion_time: c.completion_time,
            turnaround_time: c.turnaround_time,
            waiting_time: c.waiting_time,
            response_time: c.response_time(),
        }
    }
}

/// Aggregate performance indicators of one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    /// Per-process values, in completion-list order.
    pub per_process: Vec<ProcessMetrics>,
    /// Mean waiting time.
    pub avg_waiting_time: f64,
    /// Mean turnaround time.
    pub avg_turnaround_time: f64,
    /// Mean response time.
    pub avg_response_time: f64,
    /// Largest single waiting time.
    pub max_waiting_time: i64,
    /// Latest completion tick.
    pub makespan: i64,
    /// Idle ticks before the makespan.
    pub idle_time: i64,
    /// Fraction of the makespan the CPU was busy (0.0..1.0).
    pub cpu_utilization: f64,
    /// Completed processes per tick.
    pub throughput: f64,
    /// Changes of the running process along the timeline.
    pub context_switches: usize,
}

impl Metrics {
    /// Computes every metric from a schedule.
    pub fn calculate(schedule: &Schedule) -> Self {
        let mut metrics = Self::from_completions(&schedule.completions);
        let timeline = &schedule.timeline;

        metrics.idle_time = timeline.idle_time();
        metrics.context_switches = timeline.context_switches();
        metrics.cpu_utilization = ratio(timeline.busy_time() as f64, metrics.makespan);
        metrics
    }

    /// Computes per-process values and averages from completions alone.
    ///
    /// Timeline-derived fields (idle time, utilization, context switches)
    /// are left at zero. Completions are taken as given: values from a
    /// hand-built `Completion` (including negative waiting times) flow into
    /// the averages unchanged.
    pub fn from_completions(completions: &[Completion]) -> Self {
        let per_process: Vec<ProcessMetrics> =
            completions.iter().map(ProcessMetrics::from).collect();

        let makespan = per_process
            .iter()
            .map(|m| m.completion_time)
            .max()
            .unwrap_or(0);

        Self {
            avg_waiting_time: mean(per_process.iter().map(|m| m.waiting_time)),
            avg_turnaround_time: mean(per_process.iter().map(|m| m.turnaround_time)),
            avg_response_time: mean(per_process.iter().map(|m| m.response_time)),
            max_waiting_time: per_process
                .iter()
                .map(|m| m.waiting_time)
                .max()
                .unwrap_or(0),
            makespan,
            idle_time: 0,
            cpu_utilization: 0.0,
            throughput: ratio(per_process.len() as f64, makespan),
            context_switches: 0,
            per_process,
        }
    }

    /// Looks up the values of one process.
    pub fn for_process(&self, process_id: ProcessId) -> Option<&ProcessMetrics> {
        self.per_process.iter().find(|m| m.process_id == process_id)
    }

    /// Number of processes measured.
    pub fn process_count(&self) -> usize {
        self.per_process.len()
    }
}

fn mean(values: impl Iterator<Item = i64>) -> f64 {
    // Widened: sums of large tick values overflow i64.
    let (sum, count) = values.fold((0i128, 0usize), |(s, n), v| (s + i128::from(v), n + 1));
    if count == 0 {
        0.0
    } else {
        sum as f64 / count as f64
    }
}

fn ratio(numerator: f64, makespan: i64) -> f64 {
    if makespan <= 0 {
        0.0
    } else {
        numerator / makespan as f64
    }
}
