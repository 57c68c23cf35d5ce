//! Renderable surface: the seam between the gallery engine and whatever
//! displays the cards.
//!
//! The browser binding (`dom::gallery::DomSurface`) writes classes and inline
//! styles; [`MemorySurface`] records the same calls so the engine can be
//! driven headlessly.

use std::collections::BTreeMap;
use std::time::Duration;

use super::placeholder::Placeholder;
use super::registry::ItemId;

#[cfg(test)]
#[path = "surface_test.rs"]
mod surface_test;

/// Visual state of a single card.
///
/// `Transitioning` is the window between a card being put back into the
/// layout and its staggered reveal firing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisualState {
    Hidden,
    Transitioning,
    Visible,
}

/// Everything the filter engine needs from its display.
pub trait Surface {
    /// Apply a card's visual state.
    fn set_visual_state(&mut self, item: ItemId, state: VisualState);

    /// Mark the control for `category` active and every other control inactive.
    fn set_active_control(&mut self, category: &str);

    /// Whether a placeholder node is currently mounted.
    fn has_placeholder(&self) -> bool;

    /// Mount a placeholder node. Callers check [`Surface::has_placeholder`] first.
    fn add_placeholder(&mut self, placeholder: &Placeholder);

    /// Unmount the placeholder node, if any.
    fn remove_placeholder(&mut self);

    /// Short tactile feedback. Surfaces without haptics ignore it.
    fn haptic_pulse(&mut self, _duration: Duration) {}
}

/// In-memory surface that records every write.
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    states: BTreeMap<ItemId, VisualState>,
    active_control: Option<String>,
    placeholders: Vec<Placeholder>,
    pulses: Vec<Duration>,
    writes: Vec<(ItemId, VisualState)>,
}

impl MemorySurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Last state written for `item`, if any.
    #[must_use]
    pub fn state(&self, item: ItemId) -> Option<VisualState> {
        self.states.get(&item).copied()
    }

    /// Items whose last written state is `state`, in id order.
    #[must_use]
    pub fn items_in(&self, state: VisualState) -> Vec<ItemId> {
        self.states
            .iter()
            .filter(|(_, s)| **s == state)
            .map(|(id, _)| *id)
            .collect()
    }

    #[must_use]
    pub fn active_control(&self) -> Option<&str> {
        self.active_control.as_deref()
    }

    /// Number of mounted placeholders. The reconciler keeps this at most one.
    #[must_use]
    pub fn placeholder_count(&self) -> usize {
        self.placeholders.len()
    }

    #[must_use]
    pub fn placeholder(&self) -> Option<&Placeholder> {
        self.placeholders.first()
    }

    #[must_use]
    pub fn pulses(&self) -> &[Duration] {
        &self.pulses
    }

    /// Every visual-state write in call order.
    #[must_use]
    pub fn writes(&self) -> &[(ItemId, VisualState)] {
        &self.writes
    }
}

impl Surface for MemorySurface {
    fn set_visual_state(&mut self, item: ItemId, state: VisualState) {
        self.states.insert(item, state);
        self.writes.push((item, state));
    }

    fn set_active_control(&mut self, category: &str) {
        self.active_control = Some(category.to_owned());
    }

    fn has_placeholder(&self) -> bool {
        !self.placeholders.is_empty()
    }

    fn add_placeholder(&mut self, placeholder: &Placeholder) {
        self.placeholders.push(placeholder.clone());
    }

    fn remove_placeholder(&mut self) {
        self.placeholders.clear();
    }

    fn haptic_pulse(&mut self, duration: Duration) {
        self.pulses.push(duration);
    }
}
