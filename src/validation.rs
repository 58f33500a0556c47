//! Input validation for simulation runs.
//!
//! Checks process records and the Round Robin quantum before any
//! algorithm runs. Detects:
//! - Negative arrival times
//! - Burst times below 1
//! - Duplicate process IDs
//! - Inputs whose run would pass `i64::MAX` ticks
//! - Quantum below 1
//!
//! Runs are rejected as a whole: skipping a bad record would silently
//! change every average.

use std::collections::HashSet;

use crate::error::SchedError;
use crate::models::{Process, ProcessId};

/// Validation result carrying every detected problem.
pub type ValidationResult = Result<(), Vec<SchedError>>;

/// Validates a process list and an optional quantum.
///
/// Checks, in input order:
/// 1. `arrival_time >= 0`
/// 2. `burst_time >= 1`
/// 3. No duplicate IDs
/// 4. Last arrival + total burst fits in `i64` (well-formed records only)
/// 5. `quantum >= 1` (when given)
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(processes: &[Process], quantum: Option<i64>) -> ValidationResult {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for p in processes {
        if p.arrival_time < 0 {
            errors.push(SchedError::invalid_process(
                p.id,
                format!("arrival time {} is negative", p.arrival_time),
            ));
        }
        if p.burst_time < 1 {
            errors.push(SchedError::invalid_process(
                p.id,
                format!("burst time {} is below 1", p.burst_time),
            ));
        }
        if !seen.insert(p.id) {
            errors.push(SchedError::DuplicateId { id: p.id });
        }
    }

    if let Err(id) = time_horizon(processes) {
        errors.push(SchedError::TimeOverflow { id });
    }

    if let Some(q) = quantum {
        if q < 1 {
            errors.push(SchedError::InvalidQuantum { quantum: q });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Latest tick any discipline can reach: the last arrival plus every burst.
///
/// The CPU is never idle while work is pending, so no clock value, slice
/// end or completion time exceeds this bound. Malformed records are
/// skipped; they are reported separately.
fn time_horizon(processes: &[Process]) -> Result<i64, ProcessId> {
    let mut total_burst: i64 = 0;
    let mut last_arrival: Option<&Process> = None;

    for p in processes.iter().filter(|p| p.is_well_formed()) {
        total_burst = total_burst.checked_add(p.burst_time).ok_or(p.id)?;
        if last_arrival.map_or(true, |l| p.arrival_time > l.arrival_time) {
            last_arrival = Some(p);
        }
    }

    match last_arrival {
        Some(l) => l.arrival_time.checked_add(total_burst).ok_or(l.id),
        None => Ok(0),
    }
}

/// Validates and returns the first problem, for fail-fast callers.
///
/// The first error is deterministic: process checks in input order, then
/// the quantum.
pub fn check_input(processes: &[Process], quantum: Option<i64>) -> Result<(), SchedError> {
    validate_input(processes, quantum).map_err(|mut errors| errors.swap_remove(0))
}
