use super::*;
use crate::gallery::surface::MemorySurface;

#[test]
fn zero_visible_creates_one_placeholder() {
    let reconciler = EmptyStateReconciler::default();
    let mut surface = MemorySurface::new();

    assert_eq!(reconciler.reconcile(0, &mut surface), PlaceholderChange::Created);
    assert_eq!(surface.placeholder_count(), 1);
}

#[test]
fn reconcile_zero_twice_keeps_single_placeholder() {
    let reconciler = EmptyStateReconciler::default();
    let mut surface = MemorySurface::new();

    reconciler.reconcile(0, &mut surface);
    assert_eq!(reconciler.reconcile(0, &mut surface), PlaceholderChange::Unchanged);
    assert_eq!(surface.placeholder_count(), 1);
}

#[test]
fn nonzero_after_zero_removes_placeholder() {
    let reconciler = EmptyStateReconciler::default();
    let mut surface = MemorySurface::new();

    reconciler.reconcile(0, &mut surface);
    assert_eq!(reconciler.reconcile(5, &mut surface), PlaceholderChange::Removed);
    assert!(!surface.has_placeholder());
}

#[test]
fn nonzero_without_placeholder_is_noop() {
    let reconciler = EmptyStateReconciler::default();
    let mut surface = MemorySurface::new();

    assert_eq!(reconciler.reconcile(3, &mut surface), PlaceholderChange::Unchanged);
    assert_eq!(surface.placeholder_count(), 0);
}

#[test]
fn default_placeholder_carries_no_results_message() {
    let placeholder = Placeholder::default();
    assert_eq!(placeholder.id, "no-results");
    assert_eq!(placeholder.title, "No projects found");
    assert!(placeholder.body.contains("different category"));
}

#[test]
fn custom_placeholder_is_mounted_as_given() {
    let custom = Placeholder { id: "empty".into(), title: "Nothing here".into(), body: "Pick another tag.".into() };
    let reconciler = EmptyStateReconciler::new(custom.clone());
    let mut surface = MemorySurface::new();

    reconciler.reconcile(0, &mut surface);
    assert_eq!(surface.placeholder(), Some(&custom));
}

#[test]
fn placeholder_deserializes_partial_json_with_defaults() {
    let parsed: Placeholder = serde_json::from_str(r#"{ "title": "Empty" }"#).unwrap();
    assert_eq!(parsed.title, "Empty");
    assert_eq!(parsed.id, "no-results");
}
