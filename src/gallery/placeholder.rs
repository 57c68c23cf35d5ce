//! Empty-state reconciliation.
//!
//! After a filter change settles, the gallery shows exactly one "no projects
//! found" placeholder when nothing is visible and none otherwise. Both
//! directions are idempotent: the surface is asked whether a placeholder is
//! already mounted before anything is added or removed.

use serde::{Deserialize, Serialize};

use super::surface::Surface;
use crate::consts::{PLACEHOLDER_BODY, PLACEHOLDER_ID, PLACEHOLDER_TITLE};

#[cfg(test)]
#[path = "placeholder_test.rs"]
mod placeholder_test;

/// Content and DOM id of the empty-state node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Placeholder {
    pub id: String,
    pub title: String,
    pub body: String,
}

impl Default for Placeholder {
    fn default() -> Self {
        Self {
            id: PLACEHOLDER_ID.to_owned(),
            title: PLACEHOLDER_TITLE.to_owned(),
            body: PLACEHOLDER_BODY.to_owned(),
        }
    }
}

/// What a reconcile pass did to the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderChange {
    Created,
    Removed,
    Unchanged,
}

#[derive(Debug, Clone, Default)]
pub struct EmptyStateReconciler {
    placeholder: Placeholder,
}

impl EmptyStateReconciler {
    #[must_use]
    pub fn new(placeholder: Placeholder) -> Self {
        Self { placeholder }
    }

    #[must_use]
    pub fn placeholder(&self) -> &Placeholder {
        &self.placeholder
    }

    /// Make placeholder presence match `visible_count == 0`.
    pub fn reconcile(&self, visible_count: usize, surface: &mut impl Surface) -> PlaceholderChange {
        let present = surface.has_placeholder();
        let change = match (visible_count == 0, present) {
            (true, false) => {
                surface.add_placeholder(&self.placeholder);
                PlaceholderChange::Created
            }
            (false, true) => {
                surface.remove_placeholder();
                PlaceholderChange::Removed
            }
            _ => PlaceholderChange::Unchanged,
        };
        log::trace!("reconciled empty state: visible={visible_count} change={change:?}");
        change
    }
}
