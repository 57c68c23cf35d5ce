//! Card registry: the fixed, load-ordered set of gallery cards.
//!
//! Built once from the page markup and never mutated afterwards. Each card
//! carries at most one category tag; cards without a usable tag are only ever
//! shown by the wildcard selection.

#[cfg(test)]
#[path = "registry_test.rs"]
mod registry_test;

/// Handle for a card: its zero-based position in load order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemId(pub usize);

/// One card in the filterable gallery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    id: ItemId,
    category: Option<String>,
}

impl DisplayItem {
    #[must_use]
    pub fn id(&self) -> ItemId {
        self.id
    }

    /// The card's category, or `None` when the tag was missing or blank.
    #[must_use]
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }
}

/// Read-only collection of [`DisplayItem`]s in markup order.
#[derive(Debug, Clone, Default)]
pub struct CardRegistry {
    items: Vec<DisplayItem>,
}

impl CardRegistry {
    /// Build a registry from each card's raw `data-category` value, in order.
    ///
    /// Blank values are normalized to "no category".
    pub fn from_categories<I, S>(categories: I) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: Into<String>,
    {
        let items = categories
            .into_iter()
            .enumerate()
            .map(|(index, raw)| DisplayItem {
                id: ItemId(index),
                category: raw.map(Into::into).filter(|tag| !tag.trim().is_empty()),
            })
            .collect();
        Self { items }
    }

    /// Category of `id`, or `None` if the card is untagged or unknown.
    #[must_use]
    pub fn classify(&self, id: ItemId) -> Option<&str> {
        self.items.get(id.0).and_then(DisplayItem::category)
    }

    /// Every card in load order.
    #[must_use]
    pub fn all(&self) -> &[DisplayItem] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Distinct categories in order of first appearance.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for tag in self.items.iter().filter_map(DisplayItem::category) {
            if !seen.contains(&tag) {
                seen.push(tag);
            }
        }
        seen
    }
}
