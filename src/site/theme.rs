//! Light/dark theme preference.
//!
//! The chosen theme is persisted under a single string key. With nothing
//! stored the page follows the system colour scheme, and keeps following it
//! live until the user toggles once.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort: the browser store may be unavailable (private
//! mode, disabled storage) and writes then silently fall through, leaving the
//! preference session-only.

use std::collections::HashMap;

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// Value for the `data-theme` attribute and the store.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Glyph shown in the toggle button.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => "\u{2600}\u{fe0f}",
            Self::Dark => "\u{1f319}",
        }
    }

    /// Accessible label describing what the toggle will do next.
    #[must_use]
    pub fn toggle_label(self) -> String {
        format!("Switch to {} mode", self.toggled().as_str())
    }
}

/// Minimal string key/value persistence.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// Process-local store for tests and non-browser hosts.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_owned(), value.to_owned());
    }
}

/// Theme resolution on top of a [`KeyValueStore`].
#[derive(Debug, Clone)]
pub struct ThemePreference<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> ThemePreference<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self { store, key: key.into() }
    }

    /// The persisted theme, if a recognised one is stored.
    #[must_use]
    pub fn stored(&self) -> Option<Theme> {
        self.store.get(&self.key).as_deref().and_then(Theme::parse)
    }

    /// Whether the user has made an explicit choice.
    #[must_use]
    pub fn has_explicit_choice(&self) -> bool {
        self.store.get(&self.key).is_some_and(|raw| !raw.is_empty())
    }

    /// Theme to apply on load. Without a stored choice dark wins unless the
    /// system explicitly prefers light.
    #[must_use]
    pub fn initial(&self, system_prefers_light: bool) -> Theme {
        self.stored()
            .unwrap_or(if system_prefers_light { Theme::Light } else { Theme::Dark })
    }

    /// Flip `current` and persist the result.
    pub fn toggle(&mut self, current: Theme) -> Theme {
        let next = current.toggled();
        self.store.set(&self.key, next.as_str());
        log::debug!("theme switched to {}", next.as_str());
        next
    }

    /// Theme to apply after the system colour scheme changed, or `None` when
    /// an explicit choice is stored.
    #[must_use]
    pub fn on_system_change(&self, prefers_dark: bool) -> Option<Theme> {
        if self.has_explicit_choice() {
            return None;
        }
        Some(if prefers_dark { Theme::Dark } else { Theme::Light })
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }
}
