//! Staggered reveal scheduling.
//!
//! A filter change hides cards immediately and brings the shown cards back one
//! by one, `stagger` apart. One extra task checks the empty state once the
//! sequence is expected to have settled.
//!
//! TIMER RACES
//! ===========
//! Timers are never cancelled. Every task instead captures the [`Generation`]
//! of the filter action that scheduled it, and the controller drops tasks whose
//! generation is no longer current. A stale reveal therefore cannot re-show a
//! card hidden by a newer selection.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::registry::ItemId;
use super::surface::{Surface, VisualState};
use super::timers::Scheduler;

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

/// Monotonic id of a filter action.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(u64);

impl Generation {
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

/// Deferred work produced by a filter action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealTask {
    /// Bring one card fully into view.
    Reveal { item: ItemId, generation: Generation },
    /// Run the empty-state check for a show-set of `visible` cards.
    Reconcile { visible: usize, generation: Generation },
}

impl RevealTask {
    #[must_use]
    pub fn generation(&self) -> Generation {
        match self {
            Self::Reveal { generation, .. } | Self::Reconcile { generation, .. } => *generation,
        }
    }
}

/// When the empty-state check runs relative to the reveal sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettlePolicy {
    /// A fixed `settle` delay regardless of how many cards are revealed.
    /// Sequences longer than `settle / stagger` reconcile before the last
    /// reveal fires.
    #[default]
    Fixed,
    /// `len * stagger + settle`: always after the last reveal.
    AfterStagger,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealScheduler {
    stagger: Duration,
    settle: Duration,
    policy: SettlePolicy,
}

impl RevealScheduler {
    #[must_use]
    pub fn new(stagger: Duration, settle: Duration, policy: SettlePolicy) -> Self {
        Self { stagger, settle, policy }
    }

    /// Delay before the card at `index` in the show-set is revealed.
    #[must_use]
    pub fn delay_for(&self, index: usize) -> Duration {
        self.stagger.saturating_mul(saturating_u32(index))
    }

    /// Delay before the empty-state check for a show-set of `count` cards.
    #[must_use]
    pub fn settle_delay(&self, count: usize) -> Duration {
        match self.policy {
            SettlePolicy::Fixed => self.settle,
            SettlePolicy::AfterStagger => self.delay_for(count).saturating_add(self.settle),
        }
    }

    #[must_use]
    pub fn policy(&self) -> SettlePolicy {
        self.policy
    }

    /// Hide `hide` now, queue staggered reveals for `show`, then queue the
    /// empty-state check.
    pub fn schedule(
        &self,
        show: &[ItemId],
        hide: &[ItemId],
        generation: Generation,
        surface: &mut impl Surface,
        timers: &mut impl Scheduler,
    ) {
        for &item in show {
            surface.set_visual_state(item, VisualState::Transitioning);
        }
        for &item in hide {
            surface.set_visual_state(item, VisualState::Hidden);
        }

        for (index, &item) in show.iter().enumerate() {
            timers.schedule(self.delay_for(index), RevealTask::Reveal { item, generation });
        }
        timers.schedule(
            self.settle_delay(show.len()),
            RevealTask::Reconcile { visible: show.len(), generation },
        );
    }
}

fn saturating_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}
