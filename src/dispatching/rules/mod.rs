//! Built-in dispatching rules.
//!
//! # Categories
//!
//! - **Queue**: FCFS
//! - **Time-based**: SJF (shortest burst), LJF (longest burst)
//! - **Priority**: PRIORITY (lower value first)
//!
//! # Score Convention
//! All rules return lower scores for processes that should run first.
//!
//! # References
//! - Silberschatz, Galvin & Gagne, "Operating System Concepts", §5.3

use super::{DispatchingRule, RuleScore, SchedulingContext};
use crate::models::Process;

// ======================== Queue rules ========================

/// First Come First Served.
///
/// Prioritizes processes by arrival time.
#[derive(Debug, Clone, Copy)]
pub struct Fcfs;

impl DispatchingRule for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn evaluate(&self, process: &Process, _context: &SchedulingContext) -> RuleScore {
        process.arrival_time
    }

    fn description(&self) -> &'static str {
        "First Come First Served"
    }
}

// ======================== Time-based rules ========================

/// Shortest Job First.
///
/// Prioritizes processes with the shortest CPU burst.
/// Minimizes average waiting time among non-preemptive policies.
#[derive(Debug, Clone, Copy)]
pub struct ShortestBurst;

impl DispatchingRule for ShortestBurst {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn evaluate(&self, process: &Process, _context: &SchedulingContext) -> RuleScore {
        process.burst_time
    }

    fn description(&self) -> &'static str {
        "Shortest Job First"
    }
}

/// Longest Job First.
///
/// Inverse of [`ShortestBurst`]; useful as a worst-case baseline.
#[derive(Debug, Clone, Copy)]
pub struct LongestBurst;

impl DispatchingRule for LongestBurst {
    fn name(&self) -> &'static str {
        "LJF"
    }

    fn evaluate(&self, process: &Process, _context: &SchedulingContext) -> RuleScore {
        process.burst_time.saturating_neg()
    }

    fn description(&self) -> &'static str {
        "Longest Job First"
    }
}

// ======================== Priority-based rule ========================

/// Static priority rule.
///
/// **Lower `priority` value = dispatched first.**
#[derive(Debug, Clone, Copy)]
pub struct Priority;

impl DispatchingRule for Priority {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn evaluate(&self, process: &Process, _context: &SchedulingContext) -> RuleScore {
        RuleScore::from(process.priority)
    }

    fn description(&self) -> &'static str {
        "Process Priority"
    }
}
