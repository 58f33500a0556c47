//! Non-preemptive, arrival-aware dispatching.
//!
//! # Algorithm
//!
//! 1. Keep a clock starting at t=0 and a pending queue in (arrival, id) order.
//! 2. At each decision point admit every process with `arrival <= clock`.
//! 3. If nothing is ready, jump the clock to the next arrival.
//! 4. Otherwise pick the best ready process by the rule engine and run it
//!    to completion.
//!
//! FCFS, SJF and Priority differ only in the rule engine they pass in.
//! Inputs are validated first, so no completion time passes `i64::MAX`.
//!
//! # Complexity
//! O(n²) rule evaluations for n processes.

use log::trace;

use super::queue::PendingQueue;
use crate::dispatching::{RuleEngine, SchedulingContext};
use crate::models::{Completion, Process, Schedule};

/// Runs processes to completion in the order chosen at each decision point.
pub(crate) fn run_arrival_aware(
    processes: &[Process],
    engine: &RuleEngine,
    algorithm: &str,
) -> Schedule {
    let mut schedule = Schedule::new(algorithm);
    let mut pending = PendingQueue::new(processes);
    let mut ready: Vec<usize> = Vec::with_capacity(processes.len());
    let mut clock = 0;

    while !pending.is_empty() || !ready.is_empty() {
        pending.admit_into(processes, clock, &mut ready);

        if ready.is_empty() {
            if let Some(next) = pending.next_arrival(processes) {
                trace!("{algorithm}: idle {clock}..{next}");
                clock = next;
            }
            continue;
        }

        let ctx = SchedulingContext::at_time(clock);
        let Some(chosen) = engine.select_among(processes, ready.iter().copied(), &ctx) else {
            break;
        };
        ready.retain(|&i| i != chosen);

        let process = processes[chosen];
        trace!(
            "{algorithm}: t={clock} dispatch {} (waited {}, {} still ready)",
            process.label(),
            ctx.waited(&process),
            ready.len()
        );
        clock = run_to_completion(&mut schedule, process, clock);
    }

    schedule
}

/// Sorts once at t=0 and runs processes in that fixed order.
///
/// Arrival times do not influence the order, only the start tick: a process
/// that has not arrived yet when its turn comes makes the CPU idle until it
/// does. Equivalent to [`run_arrival_aware`] when every process arrives at 0.
pub(crate) fn run_static_order(
    processes: &[Process],
    engine: &RuleEngine,
    algorithm: &str,
) -> Schedule {
    let mut schedule = Schedule::new(algorithm);
    let mut clock = 0;

    for idx in engine.sort_indices(processes, &SchedulingContext::at_time(0)) {
        let process = processes[idx];
        if process.arrival_time > clock {
            trace!("{algorithm}: idle {clock}..{}", process.arrival_time);
            clock = process.arrival_time;
        }
        trace!("{algorithm}: t={clock} dispatch {}", process.label());
        clock = run_to_completion(&mut schedule, process, clock);
    }

    schedule
}

fn run_to_completion(schedule: &mut Schedule, process: Process, start: i64) -> i64 {
    let end = start + process.burst_time;
    schedule.timeline.record(process.id, start, end);
    schedule.add_completion(Completion::new(process, start, end));
    end
}
