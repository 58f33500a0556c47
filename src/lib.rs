//! CPU scheduling simulation for the U-Engine ecosystem.
//!
//! Simulates classical single-CPU disciplines over a process list and
//! reports the execution timeline (Gantt sequence) together with
//! per-process and aggregate timing metrics.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `ProcessTable`, `Timeline`,
//!   `ExecutionInterval`, `Completion`, `Schedule`
//! - **`dispatching`**: Selection rules (FCFS, SJF, PRIORITY) and the rule engine
//! - **`scheduler`**: `Simulator`, the four disciplines, and `Metrics`
//! - **`validation`**: Input integrity checks (burst, arrival, duplicate IDs, quantum)
//! - **`workload`**: Seeded random process lists
//!
//! # Example
//!
//! ```
//! use u_cpu_schedule::{run_round_robin, Metrics, Process};
//!
//! let procs = vec![
//!     Process::new(1, 0, 5),
//!     Process::new(2, 1, 3),
//!     Process::new(3, 2, 1),
//! ];
//! let schedule = run_round_robin(&procs, 2).unwrap();
//! assert_eq!(schedule.completion_order(), vec![3, 2, 1]);
//! assert_eq!(Metrics::calculate(&schedule).makespan, 9);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne, "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", §2.4

pub mod dispatching;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use error::{SchedError, SchedResult};
pub use models::{
    Completion, ExecutionInterval, Process, ProcessId, ProcessTable, Schedule, Timeline,
};
pub use scheduler::{
    compare, run_fcfs, run_priority, run_round_robin, run_sjf, Algorithm, CompletionOrder, Metrics,
    SimulationConfig, Simulator, SjfPolicy,
};
