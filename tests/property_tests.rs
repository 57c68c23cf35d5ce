//! Property-based tests for gallery filtering.
//!
//! Uses proptest to check partition and scheduling invariants over arbitrary
//! card sets and click sequences.

use std::time::Duration;

use folio::config::GalleryConfig;
use folio::gallery::{
    CardRegistry, CategorySelection, FilterController, ItemId, MemorySurface, Partition, TaskOutcome, VirtualTimers,
    VisualState,
};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

/// Card tags drawn from a small pool so selections actually match; `None`
/// and blank strings model untagged cards.
fn tag_strategy() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        4 => prop::sample::select(vec!["web", "design", "mobile", "data"]).prop_map(|t| Some(t.to_owned())),
        1 => Just(None),
        1 => Just(Some("   ".to_owned())),
    ]
}

fn registry_strategy() -> impl Strategy<Value = CardRegistry> {
    prop::collection::vec(tag_strategy(), 0..24).prop_map(CardRegistry::from_categories)
}

/// Selections include the wildcard and tags no card carries.
fn selection_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["all", "web", "design", "mobile", "data", "games", "Web", ""]).prop_map(str::to_owned)
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Every card lands on exactly one side, and each side keeps load order.
    #[test]
    fn partition_is_complete_and_ordered(registry in registry_strategy(), raw in selection_strategy()) {
        let partition = Partition::compute(&registry, &CategorySelection::parse(&raw));
        prop_assert_eq!(partition.show.len() + partition.hide.len(), registry.len());
        prop_assert!(partition.show.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(partition.hide.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(partition.show.iter().all(|id| !partition.hide.contains(id)));
    }

    /// The wildcard shows everything.
    #[test]
    fn wildcard_hides_nothing(registry in registry_strategy()) {
        let partition = Partition::compute(&registry, &CategorySelection::All);
        prop_assert!(partition.hide.is_empty());
        prop_assert_eq!(partition.show.len(), registry.len());
    }

    /// A tag no card carries hides every card.
    #[test]
    fn unknown_category_shows_nothing(registry in registry_strategy()) {
        let partition = Partition::compute(&registry, &CategorySelection::parse("games"));
        prop_assert!(partition.show.is_empty());
    }

    /// Shown cards carry exactly the selected tag.
    #[test]
    fn shown_cards_match_selection(registry in registry_strategy(), raw in selection_strategy()) {
        let selection = CategorySelection::parse(&raw);
        let partition = Partition::compute(&registry, &selection);
        for id in &partition.show {
            prop_assert!(selection.matches(registry.classify(*id)));
        }
        for id in &partition.hide {
            prop_assert!(!selection.matches(registry.classify(*id)));
        }
    }

    /// After any click sequence settles, the page reflects only the last
    /// click: its cards are visible, the rest hidden, and the placeholder is
    /// present exactly when nothing matched.
    #[test]
    fn last_click_wins(
        registry in registry_strategy(),
        clicks in prop::collection::vec((selection_strategy(), 0u64..400), 1..8),
    ) {
        let mut controller = FilterController::new(registry.clone(), &GalleryConfig::default());
        let mut surface = MemorySurface::new();
        let mut timers = VirtualTimers::new();
        controller.mount(&mut surface);

        let mut last = Partition::default();
        for (raw, gap) in &clicks {
            last = controller.select_category(raw, &mut surface, &mut timers);
            for (_, task) in timers.advance(Duration::from_millis(*gap)) {
                controller.run(task, &mut surface);
            }
        }
        let mut live = 0;
        for (_, task) in timers.advance(Duration::from_secs(60)) {
            if controller.run(task, &mut surface) != TaskOutcome::Stale {
                live += 1;
            }
        }

        prop_assert!(live <= last.show.len() + 1);
        prop_assert_eq!(timers.pending(), 0);
        prop_assert_eq!(surface.items_in(VisualState::Visible), last.show.clone());
        prop_assert_eq!(surface.items_in(VisualState::Hidden), last.hide.clone());
        prop_assert_eq!(surface.placeholder_count(), usize::from(last.show.is_empty()));
        let expected: Vec<ItemId> = (0..registry.len()).map(ItemId).collect();
        let mut seen = surface.items_in(VisualState::Visible);
        seen.extend(surface.items_in(VisualState::Hidden));
        seen.sort();
        prop_assert_eq!(seen, expected);
    }
}
