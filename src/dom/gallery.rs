//! DOM surface and `setTimeout` scheduler for the gallery engine.
//!
//! Cards are `.project-card` elements and controls are `.filter-btn`
//! elements; both carry a `data-category` attribute. The empty-state
//! placeholder is appended to `#projects-grid`.

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

use gloo_timers::callback::Timeout;
use web_sys::{Document, Element, Event, HtmlElement, KeyboardEvent};

use super::{Env, listen, millis_u32, query_all, set_attr, set_class, set_style};
use crate::config::GalleryConfig;
use crate::consts::GALLERY_GRID_ID;
use crate::error::Error;
use crate::gallery::{CardRegistry, FilterController, ItemId, Placeholder, RevealTask, Scheduler, Surface, VisualState};
use crate::site::nav::is_activation_key;

const FILTER_BUTTON_SELECTOR: &str = ".filter-btn";
const CARD_SELECTOR: &str = ".project-card";
const CATEGORY_ATTR: &str = "data-category";

const HIDDEN_TRANSFORM: &str = "scale(0.8) translateY(20px)";
const VISIBLE_TRANSFORM: &str = "scale(1) translateY(0)";

/// [`Surface`] over the live gallery markup.
pub struct DomSurface {
    env: Env,
    cards: Vec<HtmlElement>,
    buttons: Vec<HtmlElement>,
    grid: Option<Element>,
    placeholder_id: String,
}

impl Surface for DomSurface {
    fn set_visual_state(&mut self, item: ItemId, state: VisualState) {
        let Some(card) = self.cards.get(item.0) else {
            return;
        };
        match state {
            VisualState::Hidden => {
                set_class(card, "visible", false);
                set_class(card, "hidden", true);
                set_style(card, "opacity", "0");
                set_style(card, "transform", HIDDEN_TRANSFORM);
            }
            VisualState::Transitioning => {
                set_class(card, "hidden", false);
                set_class(card, "visible", true);
            }
            VisualState::Visible => {
                set_class(card, "hidden", false);
                set_class(card, "visible", true);
                set_style(card, "opacity", "1");
                set_style(card, "transform", VISIBLE_TRANSFORM);
            }
        }
    }

    fn set_active_control(&mut self, category: &str) {
        for button in &self.buttons {
            let on = button.get_attribute(CATEGORY_ATTR).as_deref() == Some(category);
            set_class(button, "active", on);
            set_attr(button, "aria-selected", if on { "true" } else { "false" });
        }
    }

    fn has_placeholder(&self) -> bool {
        self.env.document.get_element_by_id(&self.placeholder_id).is_some()
    }

    fn add_placeholder(&mut self, placeholder: &Placeholder) {
        let Some(grid) = &self.grid else {
            log::debug!("no #{GALLERY_GRID_ID} container; empty state not shown");
            return;
        };
        if let Err(err) = mount_placeholder(&self.env.document, grid, placeholder) {
            log::warn!("failed to mount empty-state placeholder: {err}");
        }
    }

    fn remove_placeholder(&mut self) {
        if let Some(node) = self.env.document.get_element_by_id(&self.placeholder_id) {
            node.remove();
        }
    }

    fn haptic_pulse(&mut self, duration: Duration) {
        self.env.vibrate(duration);
    }
}

fn mount_placeholder(document: &Document, grid: &Element, placeholder: &Placeholder) -> Result<(), Error> {
    let root = document.create_element("div")?;
    root.set_id(&placeholder.id);
    root.set_class_name("no-results-message");

    let panel = document.create_element("div")?;
    panel.set_class_name("glass");
    panel.set_attribute("style", "padding: 3rem; text-align: center; border-radius: 20px;")?;

    let title = document.create_element("h3")?;
    title.set_attribute("style", "color: var(--text-main); margin-bottom: 1rem;")?;
    title.set_text_content(Some(&placeholder.title));

    let body = document.create_element("p")?;
    body.set_attribute("style", "color: var(--text-dim);")?;
    body.set_text_content(Some(&placeholder.body));

    panel.append_child(&title)?;
    panel.append_child(&body)?;
    root.append_child(&panel)?;
    grid.append_child(&root)?;
    Ok(())
}

/// Controller plus the surface it drives; shared by listeners and timers.
struct GalleryHost {
    controller: FilterController,
    surface: DomSurface,
}

impl GalleryHost {
    fn select(&mut self, category: &str, timers: &mut BrowserTimers) {
        self.controller.select_category(category, &mut self.surface, timers);
    }

    fn run(&mut self, task: RevealTask) {
        let outcome = self.controller.run(task, &mut self.surface);
        log::trace!("timer task {task:?} -> {outcome:?}");
    }
}

/// [`Scheduler`] backed by `setTimeout`. Tasks are handed back to the host
/// when they fire; a host that is gone drops them.
struct BrowserTimers {
    host: Weak<RefCell<GalleryHost>>,
}

impl Scheduler for BrowserTimers {
    fn schedule(&mut self, delay: Duration, task: RevealTask) {
        let host = Weak::clone(&self.host);
        Timeout::new(millis_u32(delay), move || {
            if let Some(host) = host.upgrade() {
                host.borrow_mut().run(task);
            }
        })
        .forget();
    }
}

pub fn install(env: &Env, config: &GalleryConfig) -> Result<(), Error> {
    let buttons = query_all(&env.document, FILTER_BUTTON_SELECTOR)?;
    let cards = query_all(&env.document, CARD_SELECTOR)?;
    if buttons.is_empty() || cards.is_empty() {
        log::debug!("no filter controls or project cards; gallery filtering disabled");
        return Ok(());
    }

    let registry = CardRegistry::from_categories(cards.iter().map(|card| card.get_attribute(CATEGORY_ATTR)));
    let controller = FilterController::new(registry, config);
    let mut surface = DomSurface {
        env: env.clone(),
        cards,
        buttons: buttons.clone(),
        grid: env.document.get_element_by_id(GALLERY_GRID_ID),
        placeholder_id: config.placeholder.id.clone(),
    };
    controller.mount(&mut surface);
    log::info!(
        "gallery ready: {} cards, categories {:?}",
        controller.registry().len(),
        controller.registry().categories()
    );

    let host = Rc::new(RefCell::new(GalleryHost { controller, surface }));
    for button in buttons {
        let category = button.get_attribute(CATEGORY_ATTR).unwrap_or_default();
        let click_host = Rc::clone(&host);
        listen(&button, "click", move |_: Event| {
            let mut timers = BrowserTimers { host: Rc::downgrade(&click_host) };
            click_host.borrow_mut().select(&category, &mut timers);
        })?;

        let target = button.clone();
        listen(&button, "keydown", move |event: KeyboardEvent| {
            if is_activation_key(&event.key()) {
                event.prevent_default();
                target.click();
            }
        })?;
    }
    Ok(())
}
