//! Completion record.

use serde::{Deserialize, Serialize};

use super::{Process, ProcessId};

/// Timing of one process that finished its burst.
///
/// - `turnaround_time = completion_time - arrival_time`
/// - `waiting_time = turnaround_time - burst_time`
///
/// A negative waiting time can only come from an engine defect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Completion {
    /// The input record.
    pub process: Process,
    /// Tick at which the last slice ended.
    pub completion_time: i64,
    /// Tick at which the process first got the CPU.
    pub first_start: i64,
    /// Completion minus arrival.
    pub turnaround_time: i64,
    /// Turnaround minus burst.
    pub waiting_time: i64,
}

impl Completion {
    /// Derives turnaround and waiting time from the finish tick.
    pub fn new(process: Process, first_start: i64, completion_time: i64) -> Self {
        let turnaround_time = completion_time - process.arrival_time;
        Self {
            process,
            completion_time,
            first_start,
            turnaround_time,
            waiting_time: turnaround_time - process.burst_time,
        }
    }

    /// Id of the completed process.
    #[inline]
    pub fn process_id(&self) -> ProcessId {
        self.process.id
    }

    /// Ticks between arrival and first dispatch.
    #[inline]
    pub fn response_time(&self) -> i64 {
        self.first_start - self.process.arrival_time
    }
}
