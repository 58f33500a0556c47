//! Schedule (simulation result) model.
//!
//! A schedule is the complete outcome of one simulation run: the
//! completions in a defined order plus the execution timeline.

use serde::{Deserialize, Serialize};

use super::{Completion, ProcessId, Timeline};

/// Outcome of one simulation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Name of the discipline that produced this schedule (e.g. "FCFS").
    pub algorithm: String,
    /// One record per process, in the order requested by the run
    /// (finish order unless configured otherwise).
    pub completions: Vec<Completion>,
    /// Gantt sequence, ordered by start.
    pub timeline: Timeline,
}

impl Schedule {
    /// Creates an empty schedule for the named discipline.
    pub fn new(algorithm: impl Into<String>) -> Self {
        Self {
            algorithm: algorithm.into(),
            completions: Vec::new(),
            timeline: Timeline::new(),
        }
    }

    /// Appends a completion.
    pub fn add_completion(&mut self, completion: Completion) {
        self.completions.push(completion);
    }

    /// Finds the completion of a process.
    pub fn completion_for(&self, process_id: ProcessId) -> Option<&Completion> {
        self.completions
            .iter()
            .find(|c| c.process_id() == process_id)
    }

    /// Process ids in completion-list order.
    pub fn completion_order(&self) -> Vec<ProcessId> {
        self.completions.iter().map(|c| c.process_id()).collect()
    }

    /// Number of completed processes.
    pub fn completion_count(&self) -> usize {
        self.completions.len()
    }

    /// Latest completion tick (0 if empty).
    pub fn makespan(&self) -> i64 {
        self.completions
            .iter()
            .map(|c| c.completion_time)
            .max()
            .unwrap_or(0)
    }

    /// Whether the run produced nothing.
    pub fn is_empty(&self) -> bool {
        self.completions.is_empty() && self.timeline.is_empty()
    }
}
