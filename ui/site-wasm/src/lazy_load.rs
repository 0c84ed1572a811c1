//! Deferred image loading with decode-before-swap and markup-declared fallbacks.

use crate::dom;
use crate::state;
use ccs_content::html::ImageFallback;
use gloo_timers::future::TimeoutFuture;
use std::cell::RefCell;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{Element, HtmlImageElement, IntersectionObserver};

const FADE_IN_DELAY_MS: u32 = 10;
const ARMED_ATTR: &str = "data-lazy-armed";

thread_local! {
    /// One observer for the whole page, created on first use.
    static OBSERVER: RefCell<Option<IntersectionObserver>> = const { RefCell::new(None) };
}

fn observer() -> Result<IntersectionObserver, JsValue> {
    if let Some(existing) = OBSERVER.with(|o| o.borrow().clone()) {
        return Ok(existing);
    }
    let margin = state::config().lazy_root_margin;
    let observer = dom::once_observer(None, &margin, |el| {
        if let Ok(img) = el.dyn_into::<HtmlImageElement>() {
            dom::add_class(&img, "loading");
            spawn_local(load(img));
        }
    })?;
    OBSERVER.with(|o| *o.borrow_mut() = Some(observer.clone()));
    Ok(observer)
}

/// Watch every lazy image not watched yet. Safe to call after each re-render.
pub fn arm() {
    let pending: Vec<Element> = dom::query_all("img.lazy-load[data-src]")
        .into_iter()
        .filter(|img| !img.has_attribute(ARMED_ATTR))
        .collect();
    if pending.is_empty() {
        return;
    }

    let observer = match observer() {
        Ok(observer) => observer,
        Err(err) => {
            gloo_console::warn!("lazy loading unavailable:", err);
            return;
        }
    };
    for img in &pending {
        let _ = img.set_attribute(ARMED_ATTR, "");
        observer.observe(img);
    }
}

async fn load(img: HtmlImageElement) {
    let Some(src) = img.get_attribute("data-src") else {
        return;
    };

    if decode(&src).await.is_err() {
        dom::remove_class(&img, "loading");
        dom::add_class(&img, "error");
        apply_fallback(&img);
        return;
    }

    img.set_src(&src);
    dom::remove_class(&img, "loading");
    dom::add_class(&img, "loaded");
    dom::set_style(&img, "opacity", "0");
    TimeoutFuture::new(FADE_IN_DELAY_MS).await;
    dom::set_style(&img, "transition", "opacity 0.5s ease");
    dom::set_style(&img, "opacity", "1");
}

/// Fetch and decode `src` off the main thread.
async fn decode(src: &str) -> Result<(), JsValue> {
    let probe = HtmlImageElement::new()?;
    probe.set_src(src);
    JsFuture::from(probe.decode()).await?;
    Ok(())
}

fn apply_fallback(img: &HtmlImageElement) {
    let fallback = img
        .get_attribute(ImageFallback::ATTRIBUTE)
        .as_deref()
        .and_then(ImageFallback::from_attr);
    match fallback {
        Some(ImageFallback::Avatar) => {
            dom::set_style(img, "display", "none");
            if let Some(avatar) = img.next_element_sibling() {
                dom::set_style(&avatar, "display", "flex");
            }
        }
        Some(ImageFallback::HideContainer) => {
            if let Some(container) = img.parent_element() {
                dom::set_style(&container, "display", "none");
            }
        }
        None => {}
    }
}
