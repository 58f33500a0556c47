//! Dispatching rules and rule engine for process selection.
//!
//! Non-preemptive disciplines differ only in how they pick the next
//! process from the ready set. Each discipline is a [`DispatchingRule`];
//! the [`RuleEngine`] composes rules and applies the final id tie-break.
//!
//! # Usage
//!
//! ```
//! use u_cpu_schedule::dispatching::{rules, RuleEngine, SchedulingContext};
//! use u_cpu_schedule::models::Process;
//!
//! let engine = RuleEngine::new().with_rule(rules::ShortestBurst);
//! let ready = vec![Process::new(1, 0, 7), Process::new(2, 0, 3)];
//! let best = engine.select_best(&ready, &SchedulingContext::at_time(0));
//! assert_eq!(best, Some(1));
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne, "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4

mod context;
mod engine;
pub mod rules;

pub use context::SchedulingContext;
pub use engine::{RuleEngine, TieBreaker};

use crate::models::Process;
use std::fmt::Debug;

/// Score returned by a dispatching rule.
///
/// Lower scores = higher priority (dispatched first). Integer scores keep
/// comparisons exact, so ties are real ties.
pub type RuleScore = i64;

/// A dispatching rule that ranks ready processes.
///
/// # Score Convention
/// **Lower score = dispatched first.**
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "SJF").
    fn name(&self) -> &'static str;

    /// Evaluates a process given the current simulation state.
    fn evaluate(&self, process: &Process, context: &SchedulingContext) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
