//! DOM helpers shared by every feature module.
//!
//! Lookups return `Option` so a page without some markup simply skips the
//! feature that needs it.

use gloo_utils::{body, document, window};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    AddEventListenerOptions, Element, EventTarget, HtmlElement, HtmlInputElement,
    HtmlSelectElement, HtmlTextAreaElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, NodeList,
};

// ── Lookup ──

pub fn by_id(id: &str) -> Option<Element> {
    document().get_element_by_id(id)
}

pub fn by_id_typed<T: JsCast>(id: &str) -> Option<T> {
    by_id(id).and_then(|e| e.dyn_into::<T>().ok())
}

pub fn query(selector: &str) -> Option<Element> {
    document().query_selector(selector).ok()?
}

pub fn query_all(selector: &str) -> Vec<Element> {
    document()
        .query_selector_all(selector)
        .map(|nl| elements(&nl))
        .unwrap_or_default()
}

/// Query all matching elements within a parent element.
pub fn query_all_within(parent: &Element, selector: &str) -> Vec<Element> {
    parent
        .query_selector_all(selector)
        .map(|nl| elements(&nl))
        .unwrap_or_default()
}

fn elements(nl: &NodeList) -> Vec<Element> {
    (0..nl.length())
        .filter_map(|i| nl.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Closest ancestor (or self) of an event target matching `selector`.
pub fn closest_from_target(target: Option<EventTarget>, selector: &str) -> Option<Element> {
    target?.dyn_into::<Element>().ok()?.closest(selector).ok()?
}

// ── Mutation ──

pub fn set_text(el: &Element, text: &str) {
    el.set_text_content(Some(text));
}

pub fn add_class(el: &Element, cls: &str) {
    let _ = el.class_list().add_1(cls);
}

pub fn remove_class(el: &Element, cls: &str) {
    let _ = el.class_list().remove_1(cls);
}

pub fn toggle_class(el: &Element, cls: &str, force: bool) {
    let _ = el.class_list().toggle_with_force(cls, force);
}

pub fn has_class(el: &Element, cls: &str) -> bool {
    el.class_list().contains(cls)
}

pub fn set_style(el: &Element, property: &str, value: &str) {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        let _ = html.style().set_property(property, value);
    }
}

pub fn clear_style(el: &Element, property: &str) {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        let _ = html.style().remove_property(property);
    }
}

pub fn create_element(tag: &str) -> Result<Element, JsValue> {
    document().create_element(tag)
}

pub fn append_to_body(el: &Element) -> Result<(), JsValue> {
    body().append_child(el)?;
    Ok(())
}

/// Current value of an `<input>`, `<select>` or `<textarea>`.
pub fn control_value(el: &Element) -> String {
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(select) = el.dyn_ref::<HtmlSelectElement>() {
        select.value()
    } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

pub fn scroll_y() -> f64 {
    window().scroll_y().unwrap_or(0.0)
}

// ── Events ──

/// Attach a listener for the lifetime of the page.
pub fn listen<E, F>(target: &EventTarget, event: &str, mut handler: F) -> Result<(), JsValue>
where
    E: JsCast + 'static,
    F: FnMut(E) + 'static,
{
    let cb = Closure::<dyn FnMut(web_sys::Event)>::new(move |e: web_sys::Event| {
        handler(e.unchecked_into::<E>());
    });
    target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

/// Like [`listen`], but registered as non-passive so the handler may cancel scrolling.
pub fn listen_active<E, F>(target: &EventTarget, event: &str, mut handler: F) -> Result<(), JsValue>
where
    E: JsCast + 'static,
    F: FnMut(E) + 'static,
{
    let cb = Closure::<dyn FnMut(web_sys::Event)>::new(move |e: web_sys::Event| {
        handler(e.unchecked_into::<E>());
    });
    let opts = AddEventListenerOptions::new();
    opts.set_passive(false);
    target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        cb.as_ref().unchecked_ref(),
        &opts,
    )?;
    cb.forget();
    Ok(())
}

// ── Observers ──

/// Run `on_visible` the first time each element intersects the viewport,
/// then stop watching that element.
pub fn observe_once<F>(
    targets: &[Element],
    threshold: Option<f64>,
    root_margin: &str,
    on_visible: F,
) -> Result<(), JsValue>
where
    F: FnMut(Element) + 'static,
{
    if targets.is_empty() {
        return Ok(());
    }

    let observer = once_observer(threshold, root_margin, on_visible)?;
    for target in targets {
        observer.observe(target);
    }
    Ok(())
}

/// Build an observer that unobserves each target after its first
/// intersection. Targets can be added later with `observe`.
pub fn once_observer<F>(
    threshold: Option<f64>,
    root_margin: &str,
    mut on_visible: F,
) -> Result<IntersectionObserver, JsValue>
where
    F: FnMut(Element) + 'static,
{
    let cb = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                observer.unobserve(&target);
                on_visible(target);
            }
        },
    );

    let opts = IntersectionObserverInit::new();
    if let Some(threshold) = threshold {
        opts.set_threshold(&JsValue::from_f64(threshold));
    }
    opts.set_root_margin(root_margin);
    let observer = IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &opts)?;
    cb.forget();
    Ok(observer)
}
