use super::*;
use crate::gallery::surface::MemorySurface;
use crate::gallery::timers::VirtualTimers;

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

fn scheduler(policy: SettlePolicy) -> RevealScheduler {
    RevealScheduler::new(ms(100), ms(300), policy)
}

// =============================================================
// Delays
// =============================================================

#[test]
fn delay_is_index_times_stagger() {
    let s = scheduler(SettlePolicy::Fixed);
    assert_eq!(s.delay_for(0), ms(0));
    assert_eq!(s.delay_for(1), ms(100));
    assert_eq!(s.delay_for(4), ms(400));
}

#[test]
fn fixed_settle_ignores_sequence_length() {
    let s = scheduler(SettlePolicy::Fixed);
    assert_eq!(s.settle_delay(0), ms(300));
    assert_eq!(s.settle_delay(3), ms(300));
    assert_eq!(s.settle_delay(12), ms(300));
}

#[test]
fn after_stagger_settle_follows_last_reveal() {
    let s = scheduler(SettlePolicy::AfterStagger);
    assert_eq!(s.settle_delay(0), ms(300));
    assert_eq!(s.settle_delay(5), ms(800));
}

#[test]
fn huge_index_saturates_instead_of_overflowing() {
    let s = RevealScheduler::new(Duration::MAX, ms(300), SettlePolicy::AfterStagger);
    assert_eq!(s.delay_for(2), Duration::MAX);
    assert_eq!(s.settle_delay(2), Duration::MAX);
}

// =============================================================
// Scheduling
// =============================================================

#[test]
fn schedule_hides_immediately_and_marks_show_transitioning() {
    let s = scheduler(SettlePolicy::Fixed);
    let mut surface = MemorySurface::new();
    let mut timers = VirtualTimers::new();

    s.schedule(&[ItemId(1)], &[ItemId(0), ItemId(2)], Generation::default(), &mut surface, &mut timers);

    assert_eq!(surface.state(ItemId(0)), Some(VisualState::Hidden));
    assert_eq!(surface.state(ItemId(2)), Some(VisualState::Hidden));
    assert_eq!(surface.state(ItemId(1)), Some(VisualState::Transitioning));
}

#[test]
fn schedule_queues_one_reveal_per_item_plus_reconcile() {
    let s = scheduler(SettlePolicy::Fixed);
    let mut surface = MemorySurface::new();
    let mut timers = VirtualTimers::new();
    let generation = Generation::default().next();

    s.schedule(&[ItemId(3), ItemId(5)], &[], generation, &mut surface, &mut timers);
    assert_eq!(timers.pending(), 3);

    let fired = timers.advance(ms(1_000));
    assert_eq!(
        fired,
        vec![
            (ms(0), RevealTask::Reveal { item: ItemId(3), generation }),
            (ms(100), RevealTask::Reveal { item: ItemId(5), generation }),
            (ms(300), RevealTask::Reconcile { visible: 2, generation }),
        ]
    );
}

#[test]
fn empty_show_set_still_schedules_reconcile() {
    let s = scheduler(SettlePolicy::Fixed);
    let mut surface = MemorySurface::new();
    let mut timers = VirtualTimers::new();

    s.schedule(&[], &[ItemId(0)], Generation::default(), &mut surface, &mut timers);

    let fired = timers.advance(ms(300));
    assert_eq!(fired.len(), 1);
    assert!(matches!(fired[0].1, RevealTask::Reconcile { visible: 0, .. }));
}

// =============================================================
// Generation / task helpers
// =============================================================

#[test]
fn generation_increments() {
    let g = Generation::default();
    assert_eq!(g.get(), 0);
    assert_eq!(g.next().get(), 1);
    assert!(g.next() > g);
}

#[test]
fn task_reports_its_generation() {
    let generation = Generation::default().next().next();
    let reveal = RevealTask::Reveal { item: ItemId(0), generation };
    let reconcile = RevealTask::Reconcile { visible: 0, generation };
    assert_eq!(reveal.generation(), generation);
    assert_eq!(reconcile.generation(), generation);
}

#[test]
fn settle_policy_serde_names() {
    let fixed: SettlePolicy = serde_json::from_str("\"fixed\"").unwrap();
    let after: SettlePolicy = serde_json::from_str("\"after_stagger\"").unwrap();
    assert_eq!(fixed, SettlePolicy::Fixed);
    assert_eq!(after, SettlePolicy::AfterStagger);
    assert_eq!(SettlePolicy::default(), SettlePolicy::Fixed);
}
