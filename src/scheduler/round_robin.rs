//! Round Robin: preemptive time slicing with a fixed quantum.
//!
//! # Algorithm
//!
//! Each process moves through `pending → ready → running → done`.
//!
//! 1. Admit every pending process with `arrival <= clock` to the back of
//!    the FIFO ready queue (simultaneous arrivals in id order).
//! 2. If the ready queue is empty, jump the clock to the next arrival.
//! 3. Dequeue the head and run it for `min(remaining, quantum)` ticks,
//!    recording one interval per slice together with the burst it leaves.
//! 4. Admit processes that arrived during the slice, **then** re-enqueue the
//!    preempted process if it still has work left.
//! 5. A process whose remaining time hits zero completes at the current
//!    clock.
//!
//! The loop ends when both queues are empty. No hashing or unstable sort is
//! involved, so identical inputs yield identical output.
//!
//! # Complexity
//! O(n + Σ⌈burst / quantum⌉) slices.

use std::collections::VecDeque;

use log::trace;

use super::queue::PendingQueue;
use crate::models::{Completion, Process, Schedule};

/// Per-run bookkeeping, indexed like the input slice.
struct RunState {
    remaining: Vec<i64>,
    first_start: Vec<Option<i64>>,
}

impl RunState {
    fn new(processes: &[Process]) -> Self {
        Self {
            remaining: processes.iter().map(|p| p.burst_time).collect(),
            first_start: vec![None; processes.len()],
        }
    }
}

/// Simulates Round Robin.
///
/// Inputs must already be validated: `quantum >= 1` and the last arrival
/// plus the total burst within `i64`, which bounds every clock value.
pub(crate) fn run_round_robin(processes: &[Process], quantum: i64, algorithm: &str) -> Schedule {
    let mut schedule = Schedule::new(algorithm);
    let mut state = RunState::new(processes);
    let mut pending = PendingQueue::new(processes);
    let mut ready: VecDeque<usize> = VecDeque::with_capacity(processes.len());
    let mut clock = 0;

    loop {
        pending.admit_into(processes, clock, &mut ready);

        let Some(current) = ready.pop_front() else {
            match pending.next_arrival(processes) {
                Some(next) => {
                    trace!("{algorithm}: idle {clock}..{next}");
                    clock = next;
                    continue;
                }
                None => break,
            }
        };

        let process = processes[current];
        let slice = state.remaining[current].min(quantum);
        let start = clock;
        clock += slice;
        state.remaining[current] -= slice;
        let first_start = *state.first_start[current].get_or_insert(start);
        schedule
            .timeline
            .record_slice(process.id, start, clock, state.remaining[current]);

        // Arrivals during the slice queue ahead of the preempted process
        let admitted = pending.admit_into(processes, clock, &mut ready);

        if state.remaining[current] > 0 {
            trace!(
                "{algorithm}: {} ran {start}..{clock}, {} left, {admitted} arrived",
                process.label(),
                state.remaining[current]
            );
            ready.push_back(current);
        } else {
            trace!("{algorithm}: {} done at {clock}", process.label());
            schedule.add_completion(Completion::new(process, first_start, clock));
        }
    }

    schedule
}
