//! Smooth anchors, scroll spy, the pull-to-refresh hint and
//! reveal-on-scroll.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Event, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, ScrollBehavior,
    ScrollToOptions, TouchEvent, Window,
};

use super::{Env, listen, listen_passive, millis_u32, query_all, set_class, set_style};
use crate::config::NavConfig;
use crate::consts::{REVEAL_ON_SCROLL_ROOT_MARGIN, REVEAL_ON_SCROLL_THRESHOLD};
use crate::error::Error;
use crate::site::scroll::{PullGesture, ScrollMode, SectionBounds, active_section, anchor_href, anchor_scroll};

const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";
const SECTION_SELECTOR: &str = "section[id]";
const SPY_LINK_SELECTOR: &str = ".nav-links a[href^=\"#\"]";
const REVEAL_SELECTOR: &str = ".reveal";

pub fn install(env: &Env, config: &NavConfig) -> Result<(), Error> {
    install_anchors(env, config)?;
    install_scroll_spy(env, config)?;
    if env.is_touch {
        install_pull_hint(env)?;
    }
    install_reveal_on_scroll(env)
}

fn scroll_y(window: &Window) -> f64 {
    match window.scroll_y() {
        Ok(y) => y,
        Err(err) => {
            log::trace!("scrollY unavailable: {}", Error::from(err));
            0.0
        }
    }
}

// =============================================================================
// ANCHORS
// =============================================================================

fn install_anchors(env: &Env, config: &NavConfig) -> Result<(), Error> {
    for anchor in query_all(&env.document, ANCHOR_SELECTOR)? {
        let env = env.clone();
        let config = config.clone();
        let link = anchor.clone();
        listen(&anchor, "click", move |event: Event| {
            event.prevent_default();
            let Some(href) = link.get_attribute("href") else {
                return;
            };
            // A bare "#" is not a valid selector; treat it like any other miss.
            let target = match env.document.query_selector(&href) {
                Ok(found) => found.and_then(|el| el.dyn_ref::<HtmlElement>().cloned()),
                Err(err) => {
                    log::trace!("anchor {href} is not a selector: {}", Error::from(err));
                    None
                }
            };
            let Some(target) = target else {
                log::trace!("anchor {href} has no target");
                return;
            };
            let (top, mode) = anchor_scroll(f64::from(target.offset_top()), env.is_touch, &config);
            match mode {
                ScrollMode::Instant => env.window.scroll_to_with_x_and_y(0.0, top),
                ScrollMode::Smooth => {
                    let options = ScrollToOptions::new();
                    options.set_top(top);
                    options.set_behavior(ScrollBehavior::Smooth);
                    env.window.scroll_to_with_scroll_to_options(&options);
                }
            }
        })?;
    }
    Ok(())
}

// =============================================================================
// SCROLL SPY
// =============================================================================

fn install_scroll_spy(env: &Env, config: &NavConfig) -> Result<(), Error> {
    let sections = query_all(&env.document, SECTION_SELECTOR)?;
    let links = query_all(&env.document, SPY_LINK_SELECTOR)?;
    if sections.is_empty() || links.is_empty() {
        return Ok(());
    }

    let window = env.window.clone();
    let offset = config.spy_offset_px;
    let update: Rc<dyn Fn()> = Rc::new(move || {
        let bounds: Vec<SectionBounds> = sections
            .iter()
            .map(|section| SectionBounds {
                id: section.id(),
                top: f64::from(section.offset_top()),
                height: f64::from(section.offset_height()),
            })
            .collect();
        // No matching section leaves the current highlight alone.
        let Some(active) = active_section(&bounds, scroll_y(&window), offset) else {
            return;
        };
        let href = anchor_href(active);
        for link in &links {
            set_class(link, "active", link.get_attribute("href").as_deref() == Some(href.as_str()));
        }
    });

    let debounce = millis_u32(Duration::from_millis(config.spy_debounce_ms));
    let pending: RefCell<Option<Timeout>> = RefCell::new(None);
    let debounced = Rc::clone(&update);
    listen_passive(&env.window, "scroll", move |_: Event| {
        let update = Rc::clone(&debounced);
        // Replacing the pending timeout drops, and so cancels, the old one.
        *pending.borrow_mut() = Some(Timeout::new(debounce, move || update()));
    })?;

    if env.is_touch {
        install_frame_spy(&env.window, Rc::clone(&update))?;
    }
    update();
    Ok(())
}

/// Touch scrolling also refreshes the highlight once per animation frame.
fn install_frame_spy(window: &Window, update: Rc<dyn Fn()>) -> Result<(), Error> {
    let ticking = Rc::new(Cell::new(false));
    let frame_window = window.clone();
    listen_passive(window, "scroll", move |_: Event| {
        if ticking.get() {
            return;
        }
        ticking.set(true);
        let update = Rc::clone(&update);
        let done = Rc::clone(&ticking);
        let frame = Closure::once_into_js(move || {
            update();
            done.set(false);
        });
        if let Err(err) = frame_window.request_animation_frame(frame.unchecked_ref()) {
            ticking.set(false);
            log::trace!("requestAnimationFrame failed: {}", Error::from(err));
        }
    })
}

// =============================================================================
// PULL HINT
// =============================================================================

fn install_pull_hint(env: &Env) -> Result<(), Error> {
    let Some(body) = env.body() else {
        return Ok(());
    };
    let gesture = Rc::new(RefCell::new(PullGesture::default()));

    let (on_start, window) = (Rc::clone(&gesture), env.window.clone());
    listen_passive(&env.document, "touchstart", move |event: TouchEvent| {
        if let Some(touch) = event.touches().get(0) {
            on_start.borrow_mut().start(f64::from(touch.page_y()), scroll_y(&window));
        }
    })?;

    let (on_move, window, moved_body) = (Rc::clone(&gesture), env.window.clone(), body.clone());
    listen_passive(&env.document, "touchmove", move |event: TouchEvent| {
        let Some(touch) = event.touches().get(0) else {
            return;
        };
        if let Some(offset) = on_move.borrow().moved(f64::from(touch.page_y()), scroll_y(&window)) {
            set_style(&moved_body, "transform", &format!("translateY({offset}px)"));
        }
    })?;

    listen_passive(&env.document, "touchend", move |_: TouchEvent| {
        if gesture.borrow_mut().end() {
            set_style(&body, "transform", "");
        }
    })
}

// =============================================================================
// REVEAL ON SCROLL
// =============================================================================

fn install_reveal_on_scroll(env: &Env) -> Result<(), Error> {
    let targets = query_all(&env.document, REVEAL_SELECTOR)?;
    if targets.is_empty() {
        return Ok(());
    }

    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                if let Some(entry) = entry.dyn_ref::<IntersectionObserverEntry>()
                    && entry.is_intersecting()
                {
                    set_class(&entry.target(), "active", true);
                }
            }
        },
    );
    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_ON_SCROLL_THRESHOLD));
    options.set_root_margin(REVEAL_ON_SCROLL_ROOT_MARGIN);
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();

    for target in &targets {
        observer.observe(target);
    }
    log::debug!("observing {} reveal targets", targets.len());
    Ok(())
}
