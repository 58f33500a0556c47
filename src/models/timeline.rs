//! Execution timeline (Gantt sequence).
//!
//! The timeline records which process held the CPU during which ticks.
//! Idle time is never recorded as an interval; gaps are derived on demand
//! via [`Timeline::idle_periods`].

use serde::{Deserialize, Serialize};

use super::ProcessId;

/// One contiguous CPU slice `[start, end)` granted to a process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionInterval {
    /// Process that ran.
    pub process_id: ProcessId,
    /// Slice start (inclusive).
    pub start: i64,
    /// Slice end (exclusive).
    pub end: i64,
    /// Burst the process still needed after this slice (0 on its last one).
    #[serde(default)]
    pub remaining: i64,
}

impl ExecutionInterval {
    /// Creates an interval that finishes its process.
    pub fn new(process_id: ProcessId, start: i64, end: i64) -> Self {
        Self {
            process_id,
            start,
            end,
            remaining: 0,
        }
    }

    /// Sets the burst left after the slice.
    pub fn with_remaining(mut self, remaining: i64) -> Self {
        self.remaining = remaining;
        self
    }

    /// Whether the process completed at the end of this slice.
    #[inline]
    pub fn is_final(&self) -> bool {
        self.remaining == 0
    }

    /// Length of the slice in ticks.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }

    /// Display label of the process, e.g. `P2`.
    pub fn label(&self) -> String {
        format!("P{}", self.process_id)
    }
}

/// A span of ticks during which no process was ready.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdlePeriod {
    /// First idle tick.
    pub start: i64,
    /// First tick after the gap.
    pub end: i64,
}

impl IdlePeriod {
    /// Length of the gap in ticks.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }
}

/// Ordered sequence of execution intervals.
///
/// Built append-only while an algorithm runs. Intervals are recorded in
/// increasing `start` order and never overlap.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    intervals: Vec<ExecutionInterval>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the final slice `[start, end)` of `process_id`.
    pub fn record(&mut self, process_id: ProcessId, start: i64, end: i64) {
        self.record_slice(process_id, start, end, 0);
    }

    /// Appends `[start, end)` for `process_id`, leaving `remaining` ticks
    /// of its burst for later slices.
    ///
    /// Zero-length slices are dropped. Slices must be pushed in time order;
    /// this is checked in debug builds.
    pub fn record_slice(&mut self, process_id: ProcessId, start: i64, end: i64, remaining: i64) {
        if end <= start {
            return;
        }
        debug_assert!(
            self.intervals.last().map_or(true, |last| last.end <= start),
            "overlapping slice for P{process_id} at {start}"
        );
        self.intervals
            .push(ExecutionInterval::new(process_id, start, end).with_remaining(remaining));
    }

    /// All intervals, ordered by start.
    pub fn intervals(&self) -> &[ExecutionInterval] {
        &self.intervals
    }

    /// Iterates over the intervals in order.
    pub fn iter(&self) -> std::slice::Iter<'_, ExecutionInterval> {
        self.intervals.iter()
    }

    /// Number of intervals.
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// Whether nothing ran.
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Intervals belonging to one process.
    pub fn intervals_for(&self, process_id: ProcessId) -> Vec<&ExecutionInterval> {
        self.intervals
            .iter()
            .filter(|i| i.process_id == process_id)
            .collect()
    }

    /// Burst left to the process of the `index`-th slice once it ended.
    pub fn remaining_after(&self, index: usize) -> Option<i64> {
        self.intervals.get(index).map(|i| i.remaining)
    }

    /// Tick at which a process first got the CPU.
    pub fn first_start(&self, process_id: ProcessId) -> Option<i64> {
        self.intervals
            .iter()
            .find(|i| i.process_id == process_id)
            .map(|i| i.start)
    }

    /// End of the last interval (0 if empty).
    pub fn makespan(&self) -> i64 {
        self.intervals.last().map(|i| i.end).unwrap_or(0)
    }

    /// Total ticks spent running processes.
    pub fn busy_time(&self) -> i64 {
        self.intervals.iter().map(|i| i.duration()).sum()
    }

    /// Gaps between t=0 and the makespan in which the CPU sat idle.
    pub fn idle_periods(&self) -> Vec<IdlePeriod> {
        let mut gaps = Vec::new();
        let mut cursor = 0;
        for interval in &self.intervals {
            if interval.start > cursor {
                gaps.push(IdlePeriod {
                    start: cursor,
                    end: interval.start,
                });
            }
            cursor = interval.end;
        }
        gaps
    }

    /// Total idle ticks before the makespan.
    pub fn idle_time(&self) -> i64 {
        self.makespan() - self.busy_time()
    }

    /// Number of times the CPU passes from one process to a different one.
    ///
    /// Consecutive slices of the same process do not count, even across an
    /// idle gap.
    pub fn context_switches(&self) -> usize {
        self.intervals
            .windows(2)
            .filter(|w| w[0].process_id != w[1].process_id)
            .count()
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = &'a ExecutionInterval;
    type IntoIter = std::slice::Iter<'a, ExecutionInterval>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.iter()
    }
}
