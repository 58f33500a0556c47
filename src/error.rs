//! Simulation faults.
//!
//! Every fault is a normal return value. Nothing here panics or aborts the
//! host, and an empty process list is not a fault.

use std::fmt;

use crate::models::ProcessId;

/// Why a simulation run was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchedError {
    /// A process record breaks `arrival >= 0` or `burst >= 1`.
    InvalidProcess {
        /// Offending process.
        id: ProcessId,
        /// Human-readable description.
        reason: String,
    },
    /// Round Robin quantum below 1.
    InvalidQuantum {
        /// The rejected quantum.
        quantum: i64,
    },
    /// Two records share an id, so id tie-breaking is undefined.
    DuplicateId {
        /// The repeated id.
        id: ProcessId,
    },
    /// The last arrival plus the total burst does not fit in `i64` ticks.
    TimeOverflow {
        /// Process at which the running total overflowed.
        id: ProcessId,
    },
}

impl SchedError {
    pub(crate) fn invalid_process(id: ProcessId, reason: impl Into<String>) -> Self {
        Self::InvalidProcess {
            id,
            reason: reason.into(),
        }
    }

    /// Process the fault refers to, if any.
    pub fn process_id(&self) -> Option<ProcessId> {
        match self {
            Self::InvalidProcess { id, .. }
            | Self::DuplicateId { id }
            | Self::TimeOverflow { id } => Some(*id),
            Self::InvalidQuantum { .. } => None,
        }
    }
}

impl fmt::Display for SchedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidProcess { id, reason } => write!(f, "invalid process P{id}: {reason}"),
            Self::InvalidQuantum { quantum } => {
                write!(f, "invalid quantum {quantum}: must be at least 1")
            }
            Self::DuplicateId { id } => write!(f, "duplicate process id P{id}"),
            Self::TimeOverflow { id } => {
                write!(f, "simulated time overflows at P{id}: arrivals and bursts too large")
            }
        }
    }
}

impl std::error::Error for SchedError {}

/// Result alias for simulation runs.
pub type SchedResult<T> = Result<T, SchedError>;
