//! Theme toggle bound to `localStorage` and `prefers-color-scheme`.
//!
//! The theme lives in the `data-theme` attribute of `<html>`; the toggle
//! button's icon and label describe the theme a click would switch to.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::{Element, Event, HtmlElement, KeyboardEvent, MediaQueryList, MediaQueryListEvent, Storage, Window};

use super::{Env, html_by_id, listen, set_attr, set_style, warn_on_err};
use crate::config::ThemeConfig;
use crate::error::Error;
use crate::site::nav::is_activation_key;
use crate::site::theme::{KeyValueStore, Theme, ThemePreference};

const TOGGLE_ID: &str = "theme-toggle";
const ICON_ID: &str = "theme-icon";
const THEME_ATTR: &str = "data-theme";
const SPIN_TRANSFORM: &str = "scale(0.9) rotate(180deg)";

/// `localStorage`, when the browser grants it.
pub struct LocalStore {
    storage: Option<Storage>,
}

impl LocalStore {
    #[must_use]
    pub fn open(window: &Window) -> Self {
        let storage = match window.local_storage() {
            Ok(storage) => storage,
            Err(err) => {
                log::debug!("localStorage unavailable: {}", Error::from(err));
                None
            }
        };
        Self { storage }
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        match self.storage.as_ref()?.get_item(key) {
            Ok(value) => value,
            Err(err) => {
                log::debug!("localStorage read failed: {}", Error::from(err));
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Some(storage) = &self.storage {
            warn_on_err("localStorage", storage.set_item(key, value));
        }
    }
}

struct ThemeView {
    root: Element,
    icon: Option<HtmlElement>,
}

impl ThemeView {
    fn apply(&self, theme: Theme) {
        set_attr(&self.root, THEME_ATTR, theme.as_str());
        if let Some(icon) = &self.icon {
            icon.set_text_content(Some(theme.icon()));
            set_attr(icon, "aria-label", &theme.toggle_label());
        }
    }

    /// Theme currently on the page. Anything unrecognised toggles to dark.
    fn current(&self) -> Theme {
        self.root
            .get_attribute(THEME_ATTR)
            .as_deref()
            .and_then(Theme::parse)
            .unwrap_or(Theme::Light)
    }
}

fn media_query(window: &Window, query: &str) -> Option<MediaQueryList> {
    match window.match_media(query) {
        Ok(list) => list,
        Err(err) => {
            log::debug!("matchMedia({query}) failed: {}", Error::from(err));
            None
        }
    }
}

pub fn install(env: &Env, config: &ThemeConfig) -> Result<(), Error> {
    let root = env
        .document
        .document_element()
        .ok_or(Error::MissingGlobal("document.documentElement"))?;
    let preference = ThemePreference::new(LocalStore::open(&env.window), config.storage_key.clone());
    let prefers_light = media_query(&env.window, "(prefers-color-scheme: light)").is_some_and(|list| list.matches());

    let view = Rc::new(ThemeView { root, icon: html_by_id(&env.document, ICON_ID) });
    let initial = preference.initial(prefers_light);
    view.apply(initial);
    log::debug!("initial theme {}", initial.as_str());

    let preference = Rc::new(RefCell::new(preference));

    if let Some(toggle) = html_by_id(&env.document, TOGGLE_ID) {
        let (on_click, spin_target) = (Rc::clone(&preference), toggle.clone());
        let click_view = Rc::clone(&view);
        let spin_ms = u32::try_from(config.spin_ms).unwrap_or(u32::MAX);
        listen(&toggle, "click", move |_: Event| {
            let next = on_click.borrow_mut().toggle(click_view.current());
            click_view.apply(next);
            set_style(&spin_target, "transform", SPIN_TRANSFORM);
            let target = spin_target.clone();
            Timeout::new(spin_ms, move || set_style(&target, "transform", "")).forget();
        })?;

        let key_target = toggle.clone();
        listen(&toggle, "keydown", move |event: KeyboardEvent| {
            if is_activation_key(&event.key()) {
                event.prevent_default();
                key_target.click();
            }
        })?;
    }

    if let Some(dark_query) = media_query(&env.window, "(prefers-color-scheme: dark)") {
        listen(&dark_query, "change", move |event: MediaQueryListEvent| {
            let follow = preference.borrow().on_system_change(event.matches());
            if let Some(theme) = follow {
                view.apply(theme);
            }
        })?;
    }
    Ok(())
}
