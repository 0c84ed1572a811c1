//! Contact form: inline validation, inquiry capture and the confirmation modal.

use crate::dom;
use crate::state;
use ccs_forms::{ContactForm, FieldKind, FieldSpec, FieldState, SubmitError};
use chrono::{DateTime, Utc};
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlFormElement, MouseEvent};

const MODAL_ID: &str = "successModal";

thread_local! {
    static MODAL_TIMER: RefCell<Option<Timeout>> = const { RefCell::new(None) };
}

struct Control {
    id: String,
    el: Element,
}

fn field_spec(el: &Element) -> Option<FieldSpec> {
    let id = el.id();
    if id.is_empty() {
        return None;
    }
    let input_type = el
        .get_attribute("type")
        .unwrap_or_else(|| el.tag_name().to_lowercase());
    Some(FieldSpec {
        kind: FieldKind::from_markup(&input_type, &id),
        required: el.has_attribute("required"),
        id,
    })
}

/// Reflect one field's state on its `.form-group`.
fn show_state(control: &Element, field_state: Option<FieldState>) {
    let Some(group) = control.closest(".form-group").ok().flatten() else {
        return;
    };
    dom::remove_class(&group, "error");
    if let Some(err) = field_state.and_then(|s| s.error()) {
        dom::add_class(&group, "error");
        if let Ok(Some(slot)) = group.query_selector(".error-message") {
            dom::set_text(&slot, &err.to_string());
        }
    }
}

fn clear_errors(form: &Element) {
    for group in dom::query_all_within(form, ".form-group") {
        dom::remove_class(&group, "error");
    }
}

fn now() -> DateTime<Utc> {
    DateTime::from_timestamp_millis(js_sys::Date::now() as i64).unwrap_or_default()
}

pub fn init() -> Result<(), JsValue> {
    let Some(form_el) = dom::by_id_typed::<HtmlFormElement>("contactForm") else {
        return Ok(());
    };

    let controls: Vec<Control> = dom::query_all_within(&form_el, "input, select, textarea")
        .into_iter()
        .filter(|el| !el.id().is_empty())
        .map(|el| Control { id: el.id(), el })
        .collect();
    let form = ContactForm::new(controls.iter().filter_map(|c| field_spec(&c.el)));
    let form = Rc::new(RefCell::new(form));
    let controls = Rc::new(controls);

    for control in controls.iter() {
        let id = control.id.clone();
        let el = control.el.clone();
        let model = form.clone();
        dom::listen(&control.el, "blur", move |_: web_sys::Event| {
            let mut model = model.borrow_mut();
            model.set_value(&id, &dom::control_value(&el));
            show_state(&el, model.blur(&id));
        })?;

        let id = control.id.clone();
        let el = control.el.clone();
        let model = form.clone();
        dom::listen(&control.el, "input", move |_: web_sys::Event| {
            model.borrow_mut().set_value(&id, &dom::control_value(&el));
            show_state(&el, None);
        })?;
    }

    let submit_form = form_el.clone();
    dom::listen(&form_el, "submit", move |e: web_sys::Event| {
        e.prevent_default();
        let mut model = form.borrow_mut();
        for control in controls.iter() {
            model.set_value(&control.id, &dom::control_value(&control.el));
        }

        match model.submit(&*state::store(), now()) {
            Ok(_) => {
                show_modal();
                submit_form.reset();
                clear_errors(&submit_form);
            }
            Err(SubmitError::Invalid(_)) => {
                let required = controls.iter().filter(|c| c.el.has_attribute("required"));
                for control in required {
                    show_state(&control.el, model.state(&control.id));
                }
            }
            Err(SubmitError::Storage(err)) => {
                gloo_console::error!(format!("inquiry not saved: {err:#}"));
            }
        }
    })?;

    bind_modal_backdrop()
}

fn bind_modal_backdrop() -> Result<(), JsValue> {
    dom::listen(&gloo_utils::window(), "click", |e: MouseEvent| {
        let Some(modal) = dom::by_id(MODAL_ID) else {
            return;
        };
        let target = e.target().and_then(|t| t.dyn_into::<Element>().ok());
        if target.is_some_and(|t| t == modal) {
            close_modal();
        }
    })
}

pub fn show_modal() {
    let Some(modal) = dom::by_id(MODAL_ID) else {
        return;
    };
    dom::add_class(&modal, "active");
    let timer = Timeout::new(state::config().confirmation_visible_ms, close_modal);
    MODAL_TIMER.with(|t| *t.borrow_mut() = Some(timer));
}

pub fn close_modal() {
    MODAL_TIMER.with(|t| drop(t.borrow_mut().take()));
    if let Some(modal) = dom::by_id(MODAL_ID) {
        dom::remove_class(&modal, "active");
    }
}
