//! Filter controller: owns the current category selection and turns each
//! selection event into a show/hide partition, a reveal sequence and a
//! deferred empty-state check.
//!
//! DATA FLOW
//! =========
//! control surface -> [`FilterController::select_category`] -> reveal
//! scheduler + reconciler -> [`Surface`]. Timer tasks come back in through
//! [`FilterController::run`], which is where stale generations are dropped.

use std::time::Duration;

use super::placeholder::{EmptyStateReconciler, PlaceholderChange};
use super::registry::{CardRegistry, DisplayItem, ItemId};
use super::reveal::{Generation, RevealScheduler, RevealTask};
use super::surface::{Surface, VisualState};
use super::timers::Scheduler;
use crate::config::GalleryConfig;
use crate::consts::WILDCARD_CATEGORY;

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

/// The active filter value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategorySelection {
    /// The `"all"` wildcard.
    #[default]
    All,
    /// A literal category tag. Unknown tags are valid and match nothing.
    Tag(String),
}

impl CategorySelection {
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if raw == WILDCARD_CATEGORY { Self::All } else { Self::Tag(raw.to_owned()) }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::All => WILDCARD_CATEGORY,
            Self::Tag(tag) => tag,
        }
    }

    /// Whether a card with `category` belongs in the show-set.
    #[must_use]
    pub fn matches(&self, category: Option<&str>) -> bool {
        match self {
            Self::All => true,
            Self::Tag(tag) => category == Some(tag.as_str()),
        }
    }
}

impl From<&str> for CategorySelection {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

/// Cards split by a selection, each side in load order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partition {
    pub show: Vec<ItemId>,
    pub hide: Vec<ItemId>,
}

impl Partition {
    #[must_use]
    pub fn compute(registry: &CardRegistry, selection: &CategorySelection) -> Self {
        let (show, hide): (Vec<&DisplayItem>, Vec<&DisplayItem>) =
            registry.all().iter().partition(|item| selection.matches(item.category()));
        Self {
            show: show.into_iter().map(DisplayItem::id).collect(),
            hide: hide.into_iter().map(DisplayItem::id).collect(),
        }
    }
}

/// Transient filter state shared with the scheduler and reconciler.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub selection: CategorySelection,
    pub generation: Generation,
}

/// Result of running a fired timer task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskOutcome {
    Revealed(ItemId),
    Reconciled(PlaceholderChange),
    /// The task belonged to a superseded selection and did nothing.
    Stale,
}

#[derive(Debug, Clone)]
pub struct FilterController {
    registry: CardRegistry,
    scheduler: RevealScheduler,
    reconciler: EmptyStateReconciler,
    haptic: Duration,
    state: FilterState,
}

impl FilterController {
    #[must_use]
    pub fn new(registry: CardRegistry, config: &GalleryConfig) -> Self {
        Self {
            registry,
            scheduler: RevealScheduler::new(config.stagger(), config.settle(), config.settle_policy),
            reconciler: EmptyStateReconciler::new(config.placeholder.clone()),
            haptic: config.haptic(),
            state: FilterState::default(),
        }
    }

    #[must_use]
    pub fn registry(&self) -> &CardRegistry {
        &self.registry
    }

    #[must_use]
    pub fn state(&self) -> &FilterState {
        &self.state
    }

    #[must_use]
    pub fn scheduler(&self) -> &RevealScheduler {
        &self.scheduler
    }

    /// Show every card, as the page does on load.
    pub fn mount(&self, surface: &mut impl Surface) {
        for item in self.registry.all() {
            surface.set_visual_state(item.id(), VisualState::Visible);
        }
    }

    /// Apply a new selection. Re-selecting the current category re-runs the
    /// whole sequence.
    pub fn select_category(
        &mut self,
        category: &str,
        surface: &mut impl Surface,
        timers: &mut impl Scheduler,
    ) -> Partition {
        self.state.generation = self.state.generation.next();
        self.state.selection = CategorySelection::parse(category);
        surface.set_active_control(category);

        let partition = Partition::compute(&self.registry, &self.state.selection);
        log::debug!(
            "filter '{category}' (generation {}): show={} hide={}",
            self.state.generation.get(),
            partition.show.len(),
            partition.hide.len()
        );

        self.scheduler
            .schedule(&partition.show, &partition.hide, self.state.generation, surface, timers);
        surface.haptic_pulse(self.haptic);
        partition
    }

    /// Execute a fired timer task.
    pub fn run(&mut self, task: RevealTask, surface: &mut impl Surface) -> TaskOutcome {
        if task.generation() != self.state.generation {
            log::trace!(
                "dropping stale {task:?}; current generation is {}",
                self.state.generation.get()
            );
            return TaskOutcome::Stale;
        }
        match task {
            RevealTask::Reveal { item, .. } => {
                surface.set_visual_state(item, VisualState::Visible);
                TaskOutcome::Revealed(item)
            }
            RevealTask::Reconcile { visible, .. } => {
                TaskOutcome::Reconciled(self.reconciler.reconcile(visible, surface))
            }
        }
    }
}
