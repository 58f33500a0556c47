//! Pending (not yet arrived) process queue.

use std::collections::VecDeque;

use crate::models::Process;

/// Indices of processes that have not arrived yet, in (arrival, id) order.
///
/// Owned by a single run; admitting drains from the front, so the relative
/// order of simultaneous arrivals is always by id.
#[derive(Debug, Clone)]
pub(crate) struct PendingQueue {
    order: VecDeque<usize>,
}

impl PendingQueue {
    pub(crate) fn new(processes: &[Process]) -> Self {
        let mut order: Vec<usize> = (0..processes.len()).collect();
        order.sort_by_key(|&i| (processes[i].arrival_time, processes[i].id));
        Self {
            order: order.into(),
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Arrival tick of the next pending process.
    pub(crate) fn next_arrival(&self, processes: &[Process]) -> Option<i64> {
        self.order.front().map(|&i| processes[i].arrival_time)
    }

    /// Moves every process with `arrival_time <= clock` into `ready`.
    ///
    /// Returns how many were admitted.
    pub(crate) fn admit_into<E>(&mut self, processes: &[Process], clock: i64, ready: &mut E) -> usize
    where
        E: Extend<usize>,
    {
        let arrived = self
            .order
            .iter()
            .take_while(|&&i| processes[i].arrival_time <= clock)
            .count();
        ready.extend(self.order.drain(..arrived));
        arrived
    }
}
