//! Mobile menu wiring and keyboard-navigation focus styling.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlElement, KeyboardEvent, Node, TouchEvent};

use super::{Env, listen, listen_passive, query_all, query_one, set_attr, set_class, set_style, warn_on_err};
use crate::config::NavConfig;
use crate::error::Error;
use crate::site::nav::{MenuEvent, MenuUpdate, MobileMenu};

const MENU_BUTTON_SELECTOR: &str = ".mobile-menu-btn";
const MENU_SELECTOR: &str = ".nav-links";
const MENU_LINK_SELECTOR: &str = ".nav-links a";

const KEYBOARD_CLASS: &str = "keyboard-navigation";
const TOUCH_CLASS: &str = "touch-device";

struct MenuView {
    env: Env,
    button: HtmlElement,
    links: HtmlElement,
    haptic: Duration,
}

impl MenuView {
    fn apply(&self, update: MenuUpdate) {
        set_attr(&self.button, "aria-expanded", update.aria_expanded());
        set_class(&self.links, "active", update.open);
        if let Some(body) = self.env.body() {
            set_style(&body, "overflow", update.body_overflow());
        }
        if update.focus_button {
            warn_on_err("focus", self.button.focus());
        }
        if update.pulse {
            self.env.vibrate(self.haptic);
        }
    }
}

pub fn install(env: &Env, config: &NavConfig) -> Result<(), Error> {
    install_keyboard_mode(env)?;
    if env.is_touch
        && let Some(body) = env.body()
    {
        set_class(&body, TOUCH_CLASS, true);
    }

    let (Some(button), Some(links)) = (
        query_one(&env.document, MENU_BUTTON_SELECTOR)?,
        query_one(&env.document, MENU_SELECTOR)?,
    ) else {
        log::debug!("no mobile menu markup");
        return Ok(());
    };

    let menu = RefCell::new(MobileMenu::new(config));
    let view = MenuView {
        env: env.clone(),
        button: button.clone(),
        links: links.clone(),
        haptic: Duration::from_millis(config.haptic_ms),
    };
    let dispatch: Rc<dyn Fn(MenuEvent)> = Rc::new(move |event: MenuEvent| {
        let update = menu.borrow_mut().handle(event);
        if let Some(update) = update {
            log::trace!("menu {event:?} -> open={}", update.open);
            view.apply(update);
        }
    });

    let on_toggle = Rc::clone(&dispatch);
    listen(&button, "click", move |_: Event| on_toggle(MenuEvent::Toggle))?;

    for link in query_all(&env.document, MENU_LINK_SELECTOR)? {
        let on_link = Rc::clone(&dispatch);
        listen(&link, "click", move |_: Event| on_link(MenuEvent::LinkFollowed))?;
    }

    let on_outside = Rc::clone(&dispatch);
    let (menu_node, button_node) = (links.clone(), button.clone());
    listen(&env.document, "click", move |event: Event| {
        let target = event.target();
        let node = target.as_ref().and_then(|target| target.dyn_ref::<Node>());
        if !menu_node.contains(node) && !button_node.contains(node) {
            on_outside(MenuEvent::OutsideClick);
        }
    })?;

    let on_escape = Rc::clone(&dispatch);
    listen(&env.document, "keydown", move |event: KeyboardEvent| {
        if event.key() == "Escape" {
            on_escape(MenuEvent::Escape);
        }
    })?;

    if env.is_touch {
        install_swipe_close(&links, dispatch)?;
    }
    Ok(())
}

fn install_swipe_close(links: &HtmlElement, dispatch: Rc<dyn Fn(MenuEvent)>) -> Result<(), Error> {
    let start_x = Rc::new(Cell::new(0.0));

    let on_start = Rc::clone(&start_x);
    listen_passive(links, "touchstart", move |event: TouchEvent| {
        if let Some(touch) = event.changed_touches().get(0) {
            on_start.set(f64::from(touch.screen_x()));
        }
    })?;

    listen_passive(links, "touchend", move |event: TouchEvent| {
        if let Some(touch) = event.changed_touches().get(0) {
            dispatch(MenuEvent::Swipe { start_x: start_x.get(), end_x: f64::from(touch.screen_x()) });
        }
    })?;
    Ok(())
}

/// Focus rings only while the keyboard is in use: `Tab` turns them on, any
/// mouse press turns them off.
fn install_keyboard_mode(env: &Env) -> Result<(), Error> {
    let Some(body) = env.body() else {
        return Ok(());
    };
    let on_tab = body.clone();
    listen(&env.document, "keydown", move |event: KeyboardEvent| {
        if event.key() == "Tab" {
            set_class(&on_tab, KEYBOARD_CLASS, true);
        }
    })?;
    listen(&env.document, "mousedown", move |_: Event| set_class(&body, KEYBOARD_CLASS, false))?;
    Ok(())
}
