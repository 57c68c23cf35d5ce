//! Timer primitive for deferred reveal work.
//!
//! The engine only ever asks for "run this task after that delay". In the
//! browser that is a `setTimeout`; headlessly it is [`VirtualTimers`], a
//! manual clock the caller advances explicitly.

use std::collections::BTreeMap;
use std::time::Duration;

use super::reveal::RevealTask;

#[cfg(test)]
#[path = "timers_test.rs"]
mod timers_test;

/// Anything that can run a [`RevealTask`] after a delay.
///
/// Implementations hand the task back to
/// [`FilterController::run`](super::filter::FilterController::run) when it fires.
pub trait Scheduler {
    fn schedule(&mut self, delay: Duration, task: RevealTask);
}

/// Deterministic scheduler driven by [`VirtualTimers::advance`].
///
/// Tasks due at the same instant come out in the order they were scheduled.
#[derive(Debug, Clone, Default)]
pub struct VirtualTimers {
    now: Duration,
    seq: u64,
    queue: BTreeMap<(Duration, u64), RevealTask>,
}

impl VirtualTimers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of tasks that have not fired yet.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Move the clock forward by `by` and return every task that fell due,
    /// paired with its due time, in firing order.
    pub fn advance(&mut self, by: Duration) -> Vec<(Duration, RevealTask)> {
        let target = self.now.saturating_add(by);
        let mut fired = Vec::new();
        while let Some(entry) = self.queue.first_entry() {
            let (due, _) = *entry.key();
            if due > target {
                break;
            }
            fired.push((due, entry.remove()));
        }
        self.now = target;
        fired
    }
}

impl Scheduler for VirtualTimers {
    fn schedule(&mut self, delay: Duration, task: RevealTask) {
        let due = self.now.saturating_add(delay);
        self.queue.insert((due, self.seq), task);
        self.seq += 1;
    }
}
