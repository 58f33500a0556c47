//! CPU scheduling domain models.
//!
//! Provides the input record ([`Process`]) and the result types a
//! simulation run produces ([`Completion`], [`Timeline`], [`Schedule`]).
//!
//! # Lifecycle
//!
//! | Type | Created by | Lifetime |
//! |------|-----------|----------|
//! | Process / ProcessTable | Caller | Immutable input |
//! | ExecutionInterval / Timeline | Engine | One run |
//! | Completion | Engine | One run |
//! | Schedule | Engine | Returned to caller |

mod completion;
mod process;
mod schedule;
mod timeline;

pub use completion::Completion;
pub use process::{Process, ProcessId, ProcessTable};
pub use schedule::Schedule;
pub use timeline::{ExecutionInterval, IdlePeriod, Timeline};
