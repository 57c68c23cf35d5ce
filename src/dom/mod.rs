//! Browser bindings: wires page markup to the headless engine and helpers.
//!
//! ARCHITECTURE
//! ============
//! Each submodule owns one page feature and exposes an `install` function
//! that looks up its elements, registers listeners and returns. Missing markup
//! is not an error: a page without a contact form simply gets no form
//! handling. Listener closures are leaked with `forget` because they live for
//! the whole page.

pub mod contact;
pub mod gallery;
pub mod nav;
pub mod scroll;
pub mod theme;

use std::time::Duration;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{AddEventListenerOptions, Document, Element, Event, EventTarget, HtmlElement, Window};

use crate::config::SiteConfig;
use crate::error::Error;

/// Id of the optional `<script type="application/json">` holding [`SiteConfig`].
const CONFIG_ELEMENT_ID: &str = "folio-config";

/// Browser handles shared by every installer.
#[derive(Clone)]
pub struct Env {
    pub window: Window,
    pub document: Document,
    /// Touch-capable device (touch events or touch points reported).
    pub is_touch: bool,
}

impl Env {
    pub fn detect() -> Result<Self, Error> {
        let window = web_sys::window().ok_or(Error::MissingGlobal("window"))?;
        let document = window.document().ok_or(Error::MissingGlobal("document"))?;
        let has_touch_events = js_sys::Reflect::has(&window, &JsValue::from_str("ontouchstart")).unwrap_or(false);
        let is_touch = has_touch_events || window.navigator().max_touch_points() > 0;
        Ok(Self { window, document, is_touch })
    }

    #[must_use]
    pub fn body(&self) -> Option<HtmlElement> {
        self.document.body()
    }

    /// Haptic pulse on touch devices that support `navigator.vibrate`.
    pub fn vibrate(&self, duration: Duration) {
        if !self.is_touch {
            return;
        }
        let navigator = self.window.navigator();
        if !js_sys::Reflect::has(&navigator, &JsValue::from_str("vibrate")).unwrap_or(false) {
            return;
        }
        if !navigator.vibrate_with_duration(millis_u32(duration)) {
            log::trace!("vibration request rejected");
        }
    }
}

/// Install every page behavior. Failures are logged per feature.
pub fn boot() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Trace).is_err() {
        log::debug!("console logger already installed");
    }

    let env = match Env::detect() {
        Ok(env) => env,
        Err(err) => {
            log::error!("folio disabled: {err}");
            return;
        }
    };

    let config = load_config(&env.document);
    match config.level() {
        Ok(level) => log::set_max_level(level.to_level_filter()),
        Err(err) => log::warn!("{err}"),
    }

    report("navigation", nav::install(&env, &config.nav));
    report("gallery", gallery::install(&env, &config.gallery));
    report("scroll", scroll::install(&env, &config.nav));
    report("contact form", contact::install(&env, &config.contact));
    report("theme", theme::install(&env, &config.theme));
    log::debug!("folio ready (touch={})", env.is_touch);
}

fn load_config(document: &Document) -> SiteConfig {
    let Some(raw) = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
    else {
        return SiteConfig::default();
    };
    match SiteConfig::from_json(&raw) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("{err}; falling back to defaults");
            SiteConfig::default()
        }
    }
}

fn report(feature: &str, result: Result<(), Error>) {
    if let Err(err) = result {
        log::warn!("{feature} setup failed: {err}");
    }
}

// =============================================================================
// DOM HELPERS
// =============================================================================

/// Register a typed listener for the page lifetime.
pub(crate) fn listen<E, F>(target: &EventTarget, kind: &str, handler: F) -> Result<(), Error>
where
    E: JsCast + 'static,
    F: FnMut(E) + 'static,
{
    let closure = typed_closure(handler);
    target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Like [`listen`] but passive, for scroll and touch handlers.
pub(crate) fn listen_passive<E, F>(target: &EventTarget, kind: &str, handler: F) -> Result<(), Error>
where
    E: JsCast + 'static,
    F: FnMut(E) + 'static,
{
    let closure = typed_closure(handler);
    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    target.add_event_listener_with_callback_and_add_event_listener_options(
        kind,
        closure.as_ref().unchecked_ref(),
        &options,
    )?;
    closure.forget();
    Ok(())
}

fn typed_closure<E, F>(mut handler: F) -> Closure<dyn FnMut(Event)>
where
    E: JsCast + 'static,
    F: FnMut(E) + 'static,
{
    Closure::<dyn FnMut(Event)>::new(move |event: Event| match event.dyn_into::<E>() {
        Ok(event) => handler(event),
        Err(event) => log::trace!("ignoring unexpected '{}' event", event.type_()),
    })
}

pub(crate) fn query_all(document: &Document, selector: &str) -> Result<Vec<HtmlElement>, Error> {
    let list = document.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|index| list.get(index))
        .filter_map(|node| node.dyn_ref::<HtmlElement>().cloned())
        .collect())
}

pub(crate) fn query_one(document: &Document, selector: &str) -> Result<Option<HtmlElement>, Error> {
    Ok(document
        .query_selector(selector)?
        .and_then(|el| el.dyn_ref::<HtmlElement>().cloned()))
}

pub(crate) fn html_by_id(document: &Document, id: &str) -> Option<HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_ref::<HtmlElement>().cloned())
}

pub(crate) fn set_class(el: &Element, class: &str, on: bool) {
    let classes = el.class_list();
    let result = if on { classes.add_1(class) } else { classes.remove_1(class) };
    warn_on_err("classList", result);
}

pub(crate) fn set_style(el: &HtmlElement, property: &str, value: &str) {
    warn_on_err(property, el.style().set_property(property, value));
}

pub(crate) fn set_attr(el: &Element, name: &str, value: &str) {
    warn_on_err(name, el.set_attribute(name, value));
}

pub(crate) fn warn_on_err(context: &str, result: Result<(), JsValue>) {
    if let Err(err) = result {
        log::warn!("{context}: {}", Error::from(err));
    }
}

pub(crate) fn millis_u32(duration: Duration) -> u32 {
    u32::try_from(duration.as_millis()).unwrap_or(u32::MAX)
}
