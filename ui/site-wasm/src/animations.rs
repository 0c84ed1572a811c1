//! Scroll-reveal for cards and count-up statistics.

use crate::dom;
use crate::state;
use ccs_widgets::counter::{COUNTER_THRESHOLD, CounterAnimation, parse_target};
use ccs_widgets::reveal::{
    HIDDEN_STYLE, RESTING_STYLE, REVEAL_ROOT_MARGIN, REVEAL_SELECTOR, REVEAL_THRESHOLD,
};
use gloo_utils::window;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Element;

pub fn init() -> Result<(), JsValue> {
    init_reveal()?;
    init_counters()
}

fn init_reveal() -> Result<(), JsValue> {
    let cards = dom::query_all(REVEAL_SELECTOR);
    for card in &cards {
        for (property, value) in HIDDEN_STYLE {
            dom::set_style(card, property, value);
        }
    }
    dom::observe_once(&cards, Some(REVEAL_THRESHOLD), REVEAL_ROOT_MARGIN, |card| {
        for (property, value) in RESTING_STYLE {
            dom::set_style(&card, property, value);
        }
    })
}

fn init_counters() -> Result<(), JsValue> {
    let counters = dom::query_all(".stat-number[data-target]");
    dom::observe_once(&counters, Some(COUNTER_THRESHOLD), "0px", |counter| {
        let Some(target) = counter
            .get_attribute("data-target")
            .as_deref()
            .and_then(parse_target)
        else {
            return;
        };
        let config = state::config();
        let animation =
            CounterAnimation::with_timing(target, config.counter_duration_ms, config.counter_frame_ms);
        run_counter(counter, animation);
    })
}

/// Drive `animation` with `requestAnimationFrame` until it reports done.
fn run_counter(el: Element, mut animation: CounterAnimation) {
    let frame: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let next = frame.clone();

    *frame.borrow_mut() = Some(Closure::new(move || {
        let step = animation.step();
        dom::set_text(&el, &step.value().to_string());
        if step.is_done() {
            next.borrow_mut().take();
            return;
        }
        if let Some(cb) = next.borrow().as_ref() {
            request_frame(cb);
        }
    }));

    if let Some(cb) = frame.borrow().as_ref() {
        request_frame(cb);
    }
}

fn request_frame(cb: &Closure<dyn FnMut()>) {
    let _ = window().request_animation_frame(cb.as_ref().unchecked_ref());
}
