//! Process model.
//!
//! A process is one schedulable unit of CPU work. Processes are immutable
//! inputs: the engine never mutates them, it only derives completions and
//! execution intervals from them.
//!
//! # Time Representation
//! All times are integer ticks relative to the simulation epoch (t=0).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable process identity, assigned in insertion order (1, 2, 3, ...).
///
/// Used only as the final tie-break key; never reassigned.
pub type ProcessId = u32;

/// A process to be scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Process {
    /// Insertion-order identity.
    pub id: ProcessId,
    /// Tick at which the process becomes eligible to run (must be >= 0).
    pub arrival_time: i64,
    /// Total CPU time required (must be >= 1).
    pub burst_time: i64,
    /// Scheduling priority. **Lower value = higher priority.**
    pub priority: i32,
}

impl Process {
    /// Creates a process with priority 0.
    pub fn new(id: ProcessId, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            id,
            arrival_time,
            burst_time,
            priority: 0,
        }
    }

    /// Sets the priority (lower value wins).
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Display label, e.g. `P3`.
    pub fn label(&self) -> String {
        format!("P{}", self.id)
    }

    /// Whether the record satisfies `arrival >= 0` and `burst >= 1`.
    #[inline]
    pub fn is_well_formed(&self) -> bool {
        self.arrival_time >= 0 && self.burst_time >= 1
    }
}

impl fmt::Display for Process {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "P{}(arrival={}, burst={}, priority={})",
            self.id, self.arrival_time, self.burst_time, self.priority
        )
    }
}

/// Ordered process list with an insertion counter.
///
/// Mirrors an input table: each pushed row gets the next id, and
/// [`reset`](Self::reset) clears the rows and restarts numbering at 1.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessTable {
    processes: Vec<Process>,
    next_id: ProcessId,
}

impl ProcessTable {
    /// Creates an empty table; the first pushed process gets id 1.
    pub fn new() -> Self {
        Self {
            processes: Vec::new(),
            next_id: 1,
        }
    }

    /// Appends a process with priority 0 and returns its id.
    pub fn push(&mut self, arrival_time: i64, burst_time: i64) -> ProcessId {
        self.push_with_priority(arrival_time, burst_time, 0)
    }

    /// Appends a process with an explicit priority and returns its id.
    pub fn push_with_priority(
        &mut self,
        arrival_time: i64,
        burst_time: i64,
        priority: i32,
    ) -> ProcessId {
        let id = self.next_id;
        self.processes
            .push(Process::new(id, arrival_time, burst_time).with_priority(priority));
        self.next_id += 1;
        id
    }

    /// Builder form of [`push`](Self::push).
    pub fn with_process(mut self, arrival_time: i64, burst_time: i64) -> Self {
        self.push(arrival_time, burst_time);
        self
    }

    /// Builder form of [`push_with_priority`](Self::push_with_priority).
    pub fn with_prioritized(mut self, arrival_time: i64, burst_time: i64, priority: i32) -> Self {
        self.push_with_priority(arrival_time, burst_time, priority);
        self
    }

    /// Removes every row and restarts numbering at 1.
    pub fn reset(&mut self) {
        self.processes.clear();
        self.next_id = 1;
    }

    /// Rows in insertion order.
    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    /// Looks up a row by id.
    pub fn get(&self, id: ProcessId) -> Option<&Process> {
        self.processes.iter().find(|p| p.id == id)
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.processes.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    /// Sum of all burst times.
    pub fn total_burst(&self) -> i64 {
        self.processes.iter().map(|p| p.burst_time).sum()
    }
}

impl Default for ProcessTable {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<[Process]> for ProcessTable {
    fn as_ref(&self) -> &[Process] {
        &self.processes
    }
}
