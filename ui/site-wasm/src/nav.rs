//! Mobile menu, scrolled navbar and smooth in-page anchors.

use crate::dom;
use crate::state;
use ccs_widgets::nav::{NavState, anchor_target};
use gloo_utils::window;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::{Element, MouseEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

struct NavElements {
    toggle: Option<Element>,
    menu: Option<Element>,
    bar: Option<Element>,
}

impl NavElements {
    fn bind() -> Self {
        Self {
            toggle: dom::by_id("navToggle"),
            menu: dom::by_id("navMenu"),
            bar: dom::by_id("mainNav"),
        }
    }

    fn show_menu(&self, open: bool) {
        for el in [&self.menu, &self.toggle].into_iter().flatten() {
            dom::toggle_class(el, "active", open);
        }
    }
}

pub fn init() -> Result<(), JsValue> {
    let els = Rc::new(NavElements::bind());
    let nav = Rc::new(RefCell::new(NavState::new(state::config().scroll_threshold_px)));

    if let (Some(toggle), Some(_)) = (&els.toggle, &els.menu) {
        let els = els.clone();
        let nav = nav.clone();
        dom::listen(toggle, "click", move |_: MouseEvent| {
            let open = nav.borrow_mut().toggle_menu();
            els.show_menu(open);
        })?;
    }

    for link in dom::query_all(".nav-link") {
        let els = els.clone();
        let nav = nav.clone();
        dom::listen(&link, "click", move |_: MouseEvent| {
            nav.borrow_mut().close_menu();
            els.show_menu(false);
        })?;
    }

    if let Some(bar) = els.bar.clone() {
        let nav = nav.clone();
        let sync = move || {
            if let Some(scrolled) = nav.borrow_mut().on_scroll(dom::scroll_y()) {
                dom::toggle_class(&bar, "scrolled", scrolled);
            }
        };
        sync();
        dom::listen(&window(), "scroll", move |_: web_sys::Event| sync())?;
    }

    bind_anchors(els, nav)
}

fn bind_anchors(els: Rc<NavElements>, nav: Rc<RefCell<NavState>>) -> Result<(), JsValue> {
    for anchor in dom::query_all(r##"a[href^="#"]"##) {
        let els = els.clone();
        let nav = nav.clone();
        let link = anchor.clone();
        dom::listen(&anchor, "click", move |e: MouseEvent| {
            let href = link.get_attribute("href").unwrap_or_default();
            let Some(target) = anchor_target(&href).and_then(dom::by_id) else {
                return;
            };
            e.prevent_default();
            let opts = ScrollIntoViewOptions::new();
            opts.set_behavior(ScrollBehavior::Smooth);
            opts.set_block(ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&opts);
            nav.borrow_mut().close_menu();
            els.show_menu(false);
        })?;
    }
    Ok(())
}
