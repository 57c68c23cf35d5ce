//! Mobile navigation menu state.
//!
//! The menu is a two-state toggle, but several inputs can close it: following
//! a link, clicking elsewhere, `Escape`, or swiping it away on touch screens.
//! [`MobileMenu::handle`] folds those into one [`MenuUpdate`] for the DOM layer
//! to apply.

use crate::config::NavConfig;

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MenuEvent {
    /// The hamburger button was activated.
    Toggle,
    /// A link inside the menu was followed.
    LinkFollowed,
    /// A click landed outside both the menu and its button.
    OutsideClick,
    /// `Escape` was pressed.
    Escape,
    /// A touch gesture across the menu ended.
    Swipe { start_x: f64, end_x: f64 },
}

/// What the DOM should look like after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuUpdate {
    pub open: bool,
    /// Return keyboard focus to the menu button.
    pub focus_button: bool,
    /// Request a haptic pulse.
    pub pulse: bool,
}

impl MenuUpdate {
    fn closed() -> Self {
        Self { open: false, focus_button: false, pulse: false }
    }

    /// `aria-expanded` value for the menu button.
    #[must_use]
    pub fn aria_expanded(&self) -> &'static str {
        if self.open { "true" } else { "false" }
    }

    /// `overflow` for `<body>`: scrolling is locked while the menu is open.
    #[must_use]
    pub fn body_overflow(&self) -> &'static str {
        if self.open { "hidden" } else { "" }
    }
}

#[derive(Debug, Clone)]
pub struct MobileMenu {
    open: bool,
    swipe_close_px: f64,
}

impl MobileMenu {
    #[must_use]
    pub fn new(config: &NavConfig) -> Self {
        Self { open: false, swipe_close_px: config.swipe_close_px }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Fold an input event into the menu state. `None` means nothing changes.
    pub fn handle(&mut self, event: MenuEvent) -> Option<MenuUpdate> {
        let update = match event {
            MenuEvent::Toggle => MenuUpdate { open: !self.open, focus_button: false, pulse: true },
            // Link and outside clicks always re-assert the closed state.
            MenuEvent::LinkFollowed | MenuEvent::OutsideClick => MenuUpdate::closed(),
            MenuEvent::Escape if self.open => MenuUpdate { focus_button: true, ..MenuUpdate::closed() },
            MenuEvent::Swipe { start_x, end_x } if self.open && start_x - end_x > self.swipe_close_px => {
                MenuUpdate::closed()
            }
            MenuEvent::Escape | MenuEvent::Swipe { .. } => return None,
        };
        self.open = update.open;
        Some(update)
    }
}

/// Keys that activate a focused button-like control.
#[must_use]
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}
