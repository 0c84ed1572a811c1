//! Toast notifications. A new toast replaces the one on screen.

use crate::dom;
use crate::state;
use ccs_widgets::toast::{Notice, TOAST_FADE_MS, TOAST_SHOW_DELAY_MS, ToastId, ToastSlot};
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use web_sys::Element;

thread_local! {
    static SLOT: RefCell<ToastSlot> = RefCell::new(ToastSlot::default());
    // Dropping a handle cancels its timer.
    static TIMERS: RefCell<Vec<Timeout>> = const { RefCell::new(Vec::new()) };
}

pub fn show(notice: Notice) {
    let (id, _) = SLOT.with(|s| s.borrow_mut().show(notice));
    TIMERS.with(|t| t.borrow_mut().clear());
    if let Some(existing) = dom::query(".toast-notification") {
        existing.remove();
    }

    let toast = match dom::create_element("div") {
        Ok(el) => el,
        Err(err) => {
            gloo_console::error!("failed to create toast:", err);
            return;
        }
    };
    toast.set_class_name("toast-notification");
    dom::set_text(&toast, notice.message());
    if let Err(err) = dom::append_to_body(&toast) {
        gloo_console::error!("failed to show toast:", err);
        return;
    }

    let entering = toast.clone();
    let enter = Timeout::new(TOAST_SHOW_DELAY_MS, move || dom::add_class(&entering, "show"));
    let leave = Timeout::new(state::config().toast_visible_ms, move || begin_exit(toast, id));
    TIMERS.with(|t| t.borrow_mut().extend([enter, leave]));
}

fn begin_exit(toast: Element, id: ToastId) {
    dom::remove_class(&toast, "show");
    let remove = Timeout::new(TOAST_FADE_MS, move || {
        if SLOT.with(|s| s.borrow_mut().dismiss(id)) {
            toast.remove();
        }
    });
    TIMERS.with(|t| t.borrow_mut().push(remove));
}
