//! Contact form bindings: inline validation and the simulated send.

use std::rc::Rc;
use std::time::Duration;

use gloo_timers::callback::Timeout;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlButtonElement, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};

use super::{Env, html_by_id, listen, millis_u32, query_all, set_class, set_style};
use crate::config::ContactConfig;
use crate::error::Error;
use crate::site::contact::{ContactForm, Field, SubmissionSimulator, validate_field};

const FORM_ID: &str = "contact-form";
const SUCCESS_ID: &str = "form-success";
/// Error slot for failures that belong to no single field.
const SUBMIT_SLOT: &str = "submit";
const ERROR_CLASS: &str = "error";
const ERROR_MESSAGE_SELECTOR: &str = ".error-message";
const ERROR_FIELD_SELECTOR: &str = ".error";
const SENDING_LABEL: &str = "Sending...";

struct FormView {
    document: Document,
    form: HtmlFormElement,
    submit: Option<HtmlButtonElement>,
    idle_label: String,
    reset_after: Duration,
}

impl FormView {
    fn read(&self) -> ContactForm {
        ContactForm::new(&self.value(Field::Name), &self.value(Field::Email), &self.value(Field::Message))
    }

    fn value(&self, field: Field) -> String {
        self.document
            .get_element_by_id(field.id())
            .map(|el| input_value(&el))
            .unwrap_or_default()
    }

    fn show_error(&self, slot: &str, message: &str) {
        if let Some(input) = self.document.get_element_by_id(slot) {
            set_class(&input, ERROR_CLASS, true);
        }
        if let Some(text) = self.document.get_element_by_id(&format!("{slot}-error")) {
            text.set_text_content(Some(message));
        }
    }

    fn clear_errors(&self) {
        if let Err(err) = self.try_clear_errors() {
            log::warn!("could not clear form errors: {err}");
        }
    }

    fn try_clear_errors(&self) -> Result<(), Error> {
        for slot in query_all(&self.document, ERROR_MESSAGE_SELECTOR)? {
            slot.set_text_content(Some(""));
        }
        for field in query_all(&self.document, ERROR_FIELD_SELECTOR)? {
            set_class(&field, ERROR_CLASS, false);
        }
        Ok(())
    }

    fn clear_field_error(&self, field: Field) {
        if let Some(text) = self.document.get_element_by_id(&field.error_id()) {
            text.set_text_content(Some(""));
        }
        if let Some(input) = self.document.get_element_by_id(field.id()) {
            set_class(&input, ERROR_CLASS, false);
        }
    }

    fn set_sending(&self, sending: bool) {
        if let Some(button) = &self.submit {
            button.set_text_content(Some(if sending { SENDING_LABEL } else { &self.idle_label }));
            button.set_disabled(sending);
        }
    }

    fn set_panel_visible(&self, success: bool) {
        set_style(&self.form, "display", if success { "none" } else { "block" });
        if let Some(panel) = html_by_id(&self.document, SUCCESS_ID) {
            set_style(&panel, "display", if success { "block" } else { "none" });
        }
    }
}

/// Show the success panel, then restore a blank form.
fn show_success(view: &Rc<FormView>) {
    view.set_panel_visible(true);
    let view = Rc::clone(view);
    Timeout::new(millis_u32(view.reset_after), move || {
        view.form.reset();
        view.set_panel_visible(false);
        view.set_sending(false);
    })
    .forget();
}

fn input_value(el: &Element) -> String {
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

pub fn install(env: &Env, config: &ContactConfig) -> Result<(), Error> {
    let Some(form) = env
        .document
        .get_element_by_id(FORM_ID)
        .and_then(|el| el.dyn_ref::<HtmlFormElement>().cloned())
    else {
        log::debug!("no #{FORM_ID} on this page");
        return Ok(());
    };
    let submit = form
        .query_selector("button[type=\"submit\"]")?
        .and_then(|el| el.dyn_ref::<HtmlButtonElement>().cloned());
    let idle_label = submit.as_ref().and_then(|button| button.text_content()).unwrap_or_default();
    let view = Rc::new(FormView {
        document: env.document.clone(),
        form: form.clone(),
        submit,
        idle_label,
        reset_after: Duration::from_millis(config.reset_ms),
    });
    let simulator = SubmissionSimulator::from_config(config);

    let on_submit = Rc::clone(&view);
    listen(&form, "submit", move |event: Event| {
        event.prevent_default();
        on_submit.clear_errors();
        let values = on_submit.read();
        if let Err(errors) = values.validate() {
            for (field, err) in errors.iter() {
                on_submit.show_error(field.id(), &err.to_string());
            }
            return;
        }

        on_submit.set_sending(true);
        let view = Rc::clone(&on_submit);
        wasm_bindgen_futures::spawn_local(async move {
            let mut rng = SmallRng::seed_from_u64(js_sys::Date::now().to_bits());
            match simulator.submit(&values, &mut rng, gloo_timers::future::sleep).await {
                Ok(()) => show_success(&view),
                Err(err) => {
                    view.show_error(SUBMIT_SLOT, err.user_message());
                    view.set_sending(false);
                }
            }
        });
    })?;

    for field in Field::ALL {
        let Some(input) = env.document.get_element_by_id(field.id()) else {
            continue;
        };

        let (on_blur, blur_input) = (Rc::clone(&view), input.clone());
        listen(&input, "blur", move |_: Event| {
            on_blur.clear_errors();
            if let Err(err) = validate_field(field, &input_value(&blur_input)) {
                on_blur.show_error(field.id(), &err.to_string());
            }
        })?;

        let (on_input, typed_input) = (Rc::clone(&view), input.clone());
        listen(&input, "input", move |_: Event| {
            if !input_value(&typed_input).trim().is_empty() {
                on_input.clear_field_error(field);
            }
        })?;
    }
    Ok(())
}
