//! Rule engine for multi-criteria dispatching.
//!
//! Applies rules in sequence (the next rule only breaks ties of the
//! previous one) and finishes with a deterministic tie-breaker.

use std::cmp::Ordering;
use std::sync::Arc;

use super::{DispatchingRule, RuleScore, SchedulingContext};
use crate::models::Process;

/// How ties are broken after all rules are exhausted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TieBreaker {
    /// Lower process id first (default).
    #[default]
    ById,
    /// Keep the order processes were offered in.
    InputOrder,
}

/// A composable rule engine for process selection.
///
/// # Example
/// ```
/// use u_cpu_schedule::dispatching::{rules, RuleEngine};
///
/// let engine = RuleEngine::new()
///     .with_rule(rules::Priority)
///     .with_rule(rules::Fcfs);
/// assert_eq!(engine.rule_names(), vec!["PRIORITY", "FCFS"]);
/// ```
#[derive(Clone)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn DispatchingRule>>,
    tie_breaker: TieBreaker,
}

impl RuleEngine {
    /// Creates an empty rule engine (pure id ordering).
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            tie_breaker: TieBreaker::ById,
        }
    }

    /// Appends a rule; earlier rules take precedence.
    pub fn with_rule<R: DispatchingRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Sets the final tie-breaking strategy.
    pub fn with_final_tie_breaker(mut self, tie_breaker: TieBreaker) -> Self {
        self.tie_breaker = tie_breaker;
        self
    }

    /// Names of the configured rules, in precedence order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Sorts processes (highest priority first).
    ///
    /// Returns indices into the original slice. The sort is stable, so with
    /// [`TieBreaker::InputOrder`] full ties keep their input order.
    pub fn sort_indices(&self, processes: &[Process], context: &SchedulingContext) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..processes.len()).collect();
        indices.sort_by(|&a, &b| self.compare(&processes[a], &processes[b], context));
        indices
    }

    /// Returns the index of the highest-priority process.
    pub fn select_best(&self, processes: &[Process], context: &SchedulingContext) -> Option<usize> {
        self.select_among(processes, 0..processes.len(), context)
    }

    /// Returns the highest-priority index among `candidates`.
    ///
    /// Candidates index into `processes`. On a full tie the earliest
    /// candidate wins.
    pub fn select_among<I>(
        &self,
        processes: &[Process],
        candidates: I,
        context: &SchedulingContext,
    ) -> Option<usize>
    where
        I: IntoIterator<Item = usize>,
    {
        candidates.into_iter().fold(None, |best, idx| match best {
            None => Some(idx),
            Some(b) => {
                if self.compare(&processes[idx], &processes[b], context) == Ordering::Less {
                    Some(idx)
                } else {
                    Some(b)
                }
            }
        })
    }

    /// Evaluates a single process and returns scores from each rule.
    pub fn evaluate(&self, process: &Process, context: &SchedulingContext) -> Vec<RuleScore> {
        self.rules
            .iter()
            .map(|r| r.evaluate(process, context))
            .collect()
    }

    fn compare(&self, a: &Process, b: &Process, context: &SchedulingContext) -> Ordering {
        for rule in &self.rules {
            let ord = rule.evaluate(a, context).cmp(&rule.evaluate(b, context));
            if ord != Ordering::Equal {
                return ord;
            }
        }

        match self.tie_breaker {
            TieBreaker::ById => a.id.cmp(&b.id),
            TieBreaker::InputOrder => Ordering::Equal,
        }
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field("rules", &self.rule_names())
            .field("tie_breaker", &self.tie_breaker)
            .finish()
    }
}
