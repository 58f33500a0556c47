//! CPU scheduling simulators and metrics.
//!
//! Provides one simulator over four disciplines sharing a single result
//! shape ([`Schedule`]) and the [`Metrics`] derived from it.
//!
//! # Algorithms
//!
//! | Discipline | Preemptive | Selection key | Tie-break |
//! |------------|-----------|---------------|-----------|
//! | FCFS | no | arrival time | id |
//! | SJF | no | burst time (among arrived) | id |
//! | Priority | no | priority, lower first (among arrived) | id |
//! | Round Robin | yes, fixed quantum | FIFO ready queue | arrival, id |
//!
//! Runs are pure: no state survives a call, so independent simulations may
//! execute on separate threads without coordination.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne, "Operating System Concepts", Ch. 5

mod metrics;
mod non_preemptive;
mod queue;
mod round_robin;

pub use metrics::{Metrics, ProcessMetrics};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::dispatching::{rules, RuleEngine};
use crate::error::SchedResult;
use crate::models::{Process, Schedule};
use crate::validation::check_input;

/// Round Robin quantum used when none is configured.
pub const DEFAULT_QUANTUM: i64 = 2;

/// Scheduling discipline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Algorithm {
    /// First-Come-First-Served.
    #[default]
    Fcfs,
    /// Shortest-Job-First, non-preemptive.
    Sjf,
    /// Static priority, non-preemptive. Lower value runs first.
    Priority,
    /// Round Robin with a fixed time quantum.
    RoundRobin {
        /// Maximum contiguous slice (>= 1).
        quantum: i64,
    },
}

impl Algorithm {
    /// Round Robin with [`DEFAULT_QUANTUM`].
    pub fn round_robin() -> Self {
        Self::RoundRobin {
            quantum: DEFAULT_QUANTUM,
        }
    }

    /// Short display name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Fcfs => "FCFS",
            Self::Sjf => "SJF",
            Self::Priority => "Priority",
            Self::RoundRobin { .. } => "Round Robin",
        }
    }

    /// Whether running processes can be interrupted.
    pub fn is_preemptive(&self) -> bool {
        matches!(self, Self::RoundRobin { .. })
    }

    /// Quantum, for Round Robin.
    pub fn quantum(&self) -> Option<i64> {
        match self {
            Self::RoundRobin { quantum } => Some(*quantum),
            _ => None,
        }
    }

    /// Built-in selection rules of the discipline.
    ///
    /// Round Robin picks by queue position and has none.
    fn rule_engine(&self) -> RuleEngine {
        match self {
            Self::Fcfs => RuleEngine::new().with_rule(rules::Fcfs),
            Self::Sjf => RuleEngine::new().with_rule(rules::ShortestBurst),
            Self::Priority => RuleEngine::new().with_rule(rules::Priority),
            Self::RoundRobin { .. } => RuleEngine::new(),
        }
    }
}

/// How SJF chooses among processes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SjfPolicy {
    /// Re-evaluate the ready set at every decision point.
    #[default]
    ArrivalAware,
    /// Sort the whole input once and run in that fixed order, idling until
    /// each process arrives. Matches arrival-aware SJF only when all
    /// processes arrive at t=0 (or arrival order coincides with burst order).
    StaticOrder,
}

/// Order of [`Schedule::completions`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletionOrder {
    /// Order in which processes finished.
    #[default]
    Finish,
    /// By process id, for table consumers.
    ById,
    /// By arrival time, then id.
    Arrival,
}

impl CompletionOrder {
    fn apply(self, schedule: &mut Schedule) {
        match self {
            Self::Finish => {}
            Self::ById => schedule.completions.sort_by_key(|c| c.process_id()),
            Self::Arrival => schedule
                .completions
                .sort_by_key(|c| (c.process.arrival_time, c.process_id())),
        }
    }
}

/// Simulation settings.
///
/// Every field has a default, so a partial document deserializes.
///
/// ```
/// use u_cpu_schedule::scheduler::{Algorithm, CompletionOrder, SimulationConfig};
///
/// let config = SimulationConfig::new(Algorithm::round_robin())
///     .with_completion_order(CompletionOrder::ById);
/// assert_eq!(config.algorithm.quantum(), Some(2));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Discipline to simulate.
    pub algorithm: Algorithm,
    /// SJF decision policy.
    pub sjf_policy: SjfPolicy,
    /// Ordering of the returned completions.
    pub completion_order: CompletionOrder,
}

impl SimulationConfig {
    /// Creates a config for the given discipline.
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            ..Default::default()
        }
    }

    /// Sets the SJF policy.
    pub fn with_sjf_policy(mut self, policy: SjfPolicy) -> Self {
        self.sjf_policy = policy;
        self
    }

    /// Sets the completion ordering.
    pub fn with_completion_order(mut self, order: CompletionOrder) -> Self {
        self.completion_order = order;
        self
    }
}

/// CPU scheduling simulator.
///
/// Stateless across runs; one instance may be reused and shared.
///
/// # Example
///
/// ```
/// use u_cpu_schedule::models::ProcessTable;
/// use u_cpu_schedule::scheduler::{Algorithm, Metrics, Simulator};
///
/// let table = ProcessTable::new()
///     .with_process(0, 5)
///     .with_process(1, 3)
///     .with_process(2, 8);
///
/// let schedule = Simulator::new(Algorithm::Fcfs).run(table.processes()).unwrap();
/// assert_eq!(schedule.completion_order(), vec![1, 2, 3]);
///
/// let metrics = Metrics::calculate(&schedule);
/// assert_eq!(format!("{:.2}", metrics.avg_waiting_time), "3.33");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    config: SimulationConfig,
    rule_engine: Option<RuleEngine>,
}

impl Simulator {
    /// Creates a simulator with default settings for `algorithm`.
    pub fn new(algorithm: Algorithm) -> Self {
        Self::from_config(SimulationConfig::new(algorithm))
    }

    /// Creates a simulator from a full config.
    pub fn from_config(config: SimulationConfig) -> Self {
        Self {
            config,
            rule_engine: None,
        }
    }

    /// Sets the SJF policy.
    pub fn with_sjf_policy(mut self, policy: SjfPolicy) -> Self {
        self.config.sjf_policy = policy;
        self
    }

    /// Sets the completion ordering.
    pub fn with_completion_order(mut self, order: CompletionOrder) -> Self {
        self.config.completion_order = order;
        self
    }

    /// Replaces the selection rules of a non-preemptive discipline.
    ///
    /// Ignored by Round Robin.
    pub fn with_rule_engine(mut self, engine: RuleEngine) -> Self {
        self.rule_engine = Some(engine);
        self
    }

    /// Active settings.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Simulates the configured discipline over `processes`.
    ///
    /// # Errors
    /// Rejects the whole run on the first invalid process (input order),
    /// duplicate id, or (Round Robin) a quantum below 1. An empty list is
    /// not an error.
    pub fn run(&self, processes: &[Process]) -> SchedResult<Schedule> {
        let algorithm = self.config.algorithm;
        check_input(processes, algorithm.quantum())?;

        let name = algorithm.name();
        debug!("{name}: simulating {} processes", processes.len());

        let mut schedule = match algorithm {
            Algorithm::RoundRobin { quantum } => {
                round_robin::run_round_robin(processes, quantum, name)
            }
            _ => {
                let engine = self
                    .rule_engine
                    .clone()
                    .unwrap_or_else(|| algorithm.rule_engine());
                match (algorithm, self.config.sjf_policy) {
                    (Algorithm::Sjf, SjfPolicy::StaticOrder) => {
                        non_preemptive::run_static_order(processes, &engine, name)
                    }
                    _ => non_preemptive::run_arrival_aware(processes, &engine, name),
                }
            }
        };

        self.config.completion_order.apply(&mut schedule);
        debug!(
            "{name}: {} completions, {} slices, makespan {}",
            schedule.completion_count(),
            schedule.timeline.len(),
            schedule.makespan()
        );
        Ok(schedule)
    }
}

/// First-Come-First-Served.
pub fn run_fcfs(processes: &[Process]) -> SchedResult<Schedule> {
    Simulator::new(Algorithm::Fcfs).run(processes)
}

/// Arrival-aware, non-preemptive Shortest-Job-First.
pub fn run_sjf(processes: &[Process]) -> SchedResult<Schedule> {
    Simulator::new(Algorithm::Sjf).run(processes)
}

/// Non-preemptive priority scheduling (lower value first).
pub fn run_priority(processes: &[Process]) -> SchedResult<Schedule> {
    Simulator::new(Algorithm::Priority).run(processes)
}

/// Preemptive Round Robin with the given quantum.
pub fn run_round_robin(processes: &[Process], quantum: i64) -> SchedResult<Schedule> {
    Simulator::new(Algorithm::RoundRobin { quantum }).run(processes)
}

/// Runs all four disciplines over the same input.
///
/// Returns schedules in the order FCFS, SJF, Priority, Round Robin.
pub fn compare(processes: &[Process], quantum: i64) -> SchedResult<Vec<Schedule>> {
    [
        Algorithm::Fcfs,
        Algorithm::Sjf,
        Algorithm::Priority,
        Algorithm::RoundRobin { quantum },
    ]
    .into_iter()
    .map(|algorithm| Simulator::new(algorithm).run(processes))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SchedError;
    use crate::models::ProcessTable;
    use crate::workload::{generate, WorkloadConfig};

    fn spans(s: &Schedule) -> Vec<(u32, i64, i64)> {
        s.timeline
            .iter()
            .map(|i| (i.process_id, i.start, i.end))
            .collect()
    }

    fn all_algorithms(quantum: i64) -> [Algorithm; 4] {
        [
            Algorithm::Fcfs,
            Algorithm::Sjf,
            Algorithm::Priority,
            Algorithm::RoundRobin { quantum },
        ]
    }

    // ======================== Concrete scenarios ========================

    #[test]
    fn test_fcfs_textbook() {
        let table = ProcessTable::new()
            .with_process(0, 5)
            .with_process(1, 3)
            .with_process(2, 8);
        let s = run_fcfs(table.processes()).unwrap();

        assert_eq!(s.algorithm, "FCFS");
        assert_eq!(s.completion_order(), vec![1, 2, 3]);
        let completion: Vec<i64> = s.completions.iter().map(|c| c.completion_time).collect();
        let waiting: Vec<i64> = s.completions.iter().map(|c| c.waiting_time).collect();
        assert_eq!(completion, vec![5, 8, 16]);
        assert_eq!(waiting, vec![0, 4, 6]);

        let m = Metrics::calculate(&s);
        assert_eq!(format!("{:.2}", m.avg_waiting_time), "3.33");
    }

    #[test]
    fn test_fcfs_ties_by_id() {
        let procs = vec![
            Process::new(3, 0, 1),
            Process::new(1, 0, 4),
            Process::new(2, 0, 2),
        ];
        let s = run_fcfs(&procs).unwrap();
        assert_eq!(s.completion_order(), vec![1, 2, 3]);
    }

    #[test]
    fn test_fcfs_idle_gap_not_recorded() {
        let procs = vec![Process::new(1, 0, 2), Process::new(2, 5, 3)];
        let s = run_fcfs(&procs).unwrap();
        assert_eq!(spans(&s), vec![(1, 0, 2), (2, 5, 8)]);
        assert_eq!(s.completion_for(2).map(|c| c.waiting_time), Some(0));
        assert_eq!(s.timeline.idle_periods().len(), 1);
    }

    #[test]
    fn test_sjf_arrival_aware() {
        // t=0: only P1 → 0..7
        // t=7: P2(4), P3(1), P4(4) ready → P3 7..8
        // t=8: P2(4) vs P4(4) tie → P2 by id 8..12, then P4 12..16
        let procs = vec![
            Process::new(1, 0, 7),
            Process::new(2, 2, 4),
            Process::new(3, 4, 1),
            Process::new(4, 5, 4),
        ];
        let s = run_sjf(&procs).unwrap();
        assert_eq!(spans(&s), vec![(1, 0, 7), (3, 7, 8), (2, 8, 12), (4, 12, 16)]);

        let waiting: Vec<(u32, i64)> = s
            .completions
            .iter()
            .map(|c| (c.process_id(), c.waiting_time))
            .collect();
        assert_eq!(waiting, vec![(1, 0), (3, 3), (2, 6), (4, 7)]);
        assert!((Metrics::calculate(&s).avg_waiting_time - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_sjf_static_order_policy() {
        let procs = vec![
            Process::new(1, 0, 7),
            Process::new(2, 2, 4),
            Process::new(3, 4, 1),
            Process::new(4, 5, 4),
        ];
        let s = Simulator::new(Algorithm::Sjf)
            .with_sjf_policy(SjfPolicy::StaticOrder)
            .run(&procs)
            .unwrap();
        // Sorted once: P3(1), P2(4), P4(4), P1(7); CPU idles until P3 arrives
        assert_eq!(spans(&s), vec![(3, 4, 5), (2, 5, 9), (4, 9, 13), (1, 13, 20)]);
        assert!(s.completions.iter().all(|c| c.waiting_time >= 0));
    }

    #[test]
    fn test_priority_non_preemptive() {
        // P1 runs 0..4 even though P2 (priority 1) arrives at t=1
        // t=4: P2(1), P3(2), P4(1) → P2 by id, then P4, then P3
        let procs = vec![
            Process::new(1, 0, 4).with_priority(3),
            Process::new(2, 1, 3).with_priority(1),
            Process::new(3, 2, 2).with_priority(2),
            Process::new(4, 3, 1).with_priority(1),
        ];
        let s = run_priority(&procs).unwrap();
        assert_eq!(spans(&s), vec![(1, 0, 4), (2, 4, 7), (4, 7, 8), (3, 8, 10)]);
    }

    #[test]
    fn test_round_robin_textbook() {
        let procs = vec![
            Process::new(1, 0, 5),
            Process::new(2, 1, 3),
            Process::new(3, 2, 1),
        ];
        let s = run_round_robin(&procs, 2).unwrap();
        assert_eq!(
            spans(&s),
            vec![(1, 0, 2), (2, 2, 4), (3, 4, 5), (1, 5, 7), (2, 7, 8), (1, 8, 9)]
        );
        let by_id = |id| s.completion_for(id).map(|c| c.completion_time);
        assert_eq!((by_id(1), by_id(2), by_id(3)), (Some(9), Some(8), Some(5)));
    }

    #[test]
    fn test_custom_rule_engine() {
        let procs = vec![Process::new(1, 0, 2), Process::new(2, 0, 9)];
        let s = Simulator::new(Algorithm::Sjf)
            .with_rule_engine(RuleEngine::new().with_rule(rules::LongestBurst))
            .run(&procs)
            .unwrap();
        assert_eq!(s.completion_order(), vec![2, 1]);
    }

    // ======================== Completion ordering ========================

    #[test]
    fn test_completion_order_options() {
        let procs = vec![
            Process::new(1, 0, 5),
            Process::new(2, 1, 3),
            Process::new(3, 2, 1),
        ];
        let rr = Algorithm::RoundRobin { quantum: 2 };

        let finish = Simulator::new(rr).run(&procs).unwrap();
        assert_eq!(finish.completion_order(), vec![3, 2, 1]);

        let by_id = Simulator::new(rr)
            .with_completion_order(CompletionOrder::ById)
            .run(&procs)
            .unwrap();
        assert_eq!(by_id.completion_order(), vec![1, 2, 3]);

        let reversed = vec![Process::new(1, 4, 1), Process::new(2, 0, 1)];
        let by_arrival = Simulator::new(rr)
            .with_completion_order(CompletionOrder::Arrival)
            .run(&reversed)
            .unwrap();
        assert_eq!(by_arrival.completion_order(), vec![2, 1]);
    }

    // ======================== Errors ========================

    #[test]
    fn test_rejects_invalid_process() {
        let procs = vec![Process::new(1, 0, 3), Process::new(2, 1, 0)];
        for algorithm in all_algorithms(2) {
            let err = Simulator::new(algorithm).run(&procs).unwrap_err();
            assert!(matches!(err, SchedError::InvalidProcess { id: 2, .. }));
        }
        let err = run_fcfs(&[Process::new(1, -1, 3)]).unwrap_err();
        assert!(matches!(err, SchedError::InvalidProcess { id: 1, .. }));
    }

    #[test]
    fn test_rejects_time_overflow() {
        let procs = [Process::new(1, i64::MAX - 1, 5)];
        let expected = Err(SchedError::TimeOverflow { id: 1 });
        assert_eq!(run_fcfs(&procs).map(|_| ()), expected);
        assert_eq!(run_sjf(&procs).map(|_| ()), expected);
        assert_eq!(run_priority(&procs).map(|_| ()), expected);
        assert_eq!(run_round_robin(&procs, 2).map(|_| ()), expected);

        let static_sjf = Simulator::new(Algorithm::Sjf).with_sjf_policy(SjfPolicy::StaticOrder);
        assert_eq!(static_sjf.run(&procs).map(|_| ()), expected);

        let huge = [Process::new(1, 0, i64::MAX), Process::new(2, 0, 1)];
        assert_eq!(
            run_round_robin(&huge, i64::MAX).map(|_| ()),
            Err(SchedError::TimeOverflow { id: 2 })
        );
    }

    #[test]
    fn test_runs_up_to_tick_limit() {
        let procs = [Process::new(1, 0, 4), Process::new(2, i64::MAX - 9, 5)];
        let algorithms = [
            Algorithm::Fcfs,
            Algorithm::Sjf,
            Algorithm::Priority,
            Algorithm::round_robin(),
        ];
        for algorithm in algorithms {
            let schedule = Simulator::new(algorithm).run(&procs).unwrap();
            assert_eq!(schedule.makespan(), i64::MAX - 4);
            let m = Metrics::calculate(&schedule);
            assert!(m.avg_turnaround_time.is_finite());
            assert_eq!(m.idle_time, i64::MAX - 4 - 9);
        }
    }

    #[test]
    fn test_round_robin_has_no_selection_rules() {
        assert!(Algorithm::round_robin().rule_engine().rule_names().is_empty());
        assert_eq!(Algorithm::Sjf.rule_engine().rule_names(), vec!["SJF"]);
    }

    #[test]
    fn test_rejects_invalid_quantum() {
        let procs = vec![Process::new(1, 0, 3)];
        assert_eq!(
            run_round_robin(&procs, 0).unwrap_err(),
            SchedError::InvalidQuantum { quantum: 0 }
        );
        // Quantum is checked even for an empty list
        assert!(run_round_robin(&[], -1).is_err());
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let procs = vec![Process::new(1, 0, 3), Process::new(1, 2, 1)];
        assert_eq!(
            run_sjf(&procs).unwrap_err(),
            SchedError::DuplicateId { id: 1 }
        );
    }

    #[test]
    fn test_empty_input_every_algorithm() {
        for algorithm in all_algorithms(3) {
            let s = Simulator::new(algorithm).run(&[]).unwrap();
            assert!(s.completions.is_empty());
            assert!(s.timeline.is_empty());
            let m = Metrics::calculate(&s);
            assert_eq!(m.avg_waiting_time, 0.0);
            assert_eq!(m.avg_turnaround_time, 0.0);
        }
    }

    // ======================== Properties over random workloads ========================

    fn workloads() -> Vec<Vec<Process>> {
        (0..40)
            .map(|seed| {
                generate(
                    &WorkloadConfig::new(1 + (seed as usize % 12))
                        .with_max_arrival(20)
                        .with_burst_range(1, 9)
                        .with_priority_range(0, 4)
                        .with_seed(seed),
                )
            })
            .collect()
    }

    #[test]
    fn test_conservation_and_non_negativity() {
        for procs in workloads() {
            let total_burst: i64 = procs.iter().map(|p| p.burst_time).sum();
            for algorithm in all_algorithms(3) {
                let s = Simulator::new(algorithm).run(&procs).unwrap();

                assert_eq!(s.timeline.busy_time(), total_burst, "{}", algorithm.name());
                assert_eq!(s.completion_count(), procs.len());
                let mut ids = s.completion_order();
                ids.sort_unstable();
                ids.dedup();
                assert_eq!(ids.len(), procs.len());

                for c in &s.completions {
                    assert!(c.waiting_time >= 0, "{}: {c:?}", algorithm.name());
                    let ran: i64 = s
                        .timeline
                        .intervals_for(c.process_id())
                        .iter()
                        .map(|i| i.duration())
                        .sum();
                    assert_eq!(ran, c.process.burst_time);
                    assert!(c.first_start >= c.process.arrival_time);
                }
            }
        }
    }

    #[test]
    fn test_timeline_is_ordered_and_disjoint() {
        for procs in workloads() {
            for algorithm in all_algorithms(2) {
                let s = Simulator::new(algorithm).run(&procs).unwrap();
                for w in s.timeline.intervals().windows(2) {
                    assert!(w[0].end <= w[1].start);
                }
                assert!(s.timeline.iter().all(|i| i.start >= 0 && i.end > i.start));
            }
        }
    }

    #[test]
    fn test_round_robin_quantum_bound_and_determinism() {
        for procs in workloads() {
            for quantum in 1..=4 {
                let a = run_round_robin(&procs, quantum).unwrap();
                let b = run_round_robin(&procs, quantum).unwrap();
                assert_eq!(a, b);
                assert!(a.timeline.iter().all(|i| i.duration() <= quantum));
            }
        }
    }

    #[test]
    fn test_non_preemptive_one_slice_per_process() {
        for procs in workloads() {
            for algorithm in [Algorithm::Fcfs, Algorithm::Sjf, Algorithm::Priority] {
                let s = Simulator::new(algorithm).run(&procs).unwrap();
                assert_eq!(s.timeline.len(), procs.len());
            }
        }
    }

    #[test]
    fn test_input_order_does_not_matter() {
        for procs in workloads() {
            let mut reversed = procs.clone();
            reversed.reverse();
            for algorithm in all_algorithms(2) {
                let a = Simulator::new(algorithm).run(&procs).unwrap();
                let b = Simulator::new(algorithm).run(&reversed).unwrap();
                assert_eq!(a.timeline, b.timeline);
            }
        }
    }

    // ======================== Comparison & config ========================

    #[test]
    fn test_compare_all() {
        let procs = vec![
            Process::new(1, 0, 6).with_priority(2),
            Process::new(2, 0, 8).with_priority(1),
            Process::new(3, 0, 3).with_priority(3),
        ];
        let schedules = compare(&procs, 4).unwrap();
        let names: Vec<&str> = schedules.iter().map(|s| s.algorithm.as_str()).collect();
        assert_eq!(names, vec!["FCFS", "SJF", "Priority", "Round Robin"]);

        let avg: Vec<f64> = schedules
            .iter()
            .map(|s| Metrics::calculate(s).avg_waiting_time)
            .collect();
        // SJF minimizes average waiting when everything arrives together
        assert!(avg.iter().all(|&w| avg[1] <= w));
    }

    #[test]
    fn test_compare_propagates_errors() {
        assert!(compare(&[Process::new(1, 0, 1)], 0).is_err());
    }

    #[test]
    fn test_algorithm_accessors() {
        assert_eq!(Algorithm::round_robin().quantum(), Some(DEFAULT_QUANTUM));
        assert!(Algorithm::round_robin().is_preemptive());
        assert!(!Algorithm::Sjf.is_preemptive());
        assert_eq!(Algorithm::Priority.quantum(), None);
        assert_eq!(Algorithm::default(), Algorithm::Fcfs);
    }

    #[test]
    fn test_config_from_json() {
        let json = r#"{"algorithm":{"kind":"round_robin","quantum":3},"completion_order":"by_id"}"#;
        let config: SimulationConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.algorithm, Algorithm::RoundRobin { quantum: 3 });
        assert_eq!(config.completion_order, CompletionOrder::ById);
        assert_eq!(config.sjf_policy, SjfPolicy::ArrivalAware);

        let sim = Simulator::from_config(config);
        assert_eq!(sim.config().algorithm.quantum(), Some(3));
    }

    #[test]
    fn test_config_defaults_from_empty_json() {
        let config: SimulationConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, SimulationConfig::default());
    }

    #[test]
    fn test_schedule_serializes() {
        let s = run_fcfs(&[Process::new(1, 0, 2)]).unwrap();
        let json = serde_json::to_string(&s).unwrap();
        let back: Schedule = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
    }

    #[test]
    fn test_parallel_runs() {
        let procs = workloads().remove(7);
        let expected = run_round_robin(&procs, 2).unwrap();
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let procs = procs.clone();
                std::thread::spawn(move || run_round_robin(&procs, 2))
            })
            .collect();
        for h in handles {
            assert_eq!(h.join().unwrap().unwrap(), expected);
        }
    }
}
