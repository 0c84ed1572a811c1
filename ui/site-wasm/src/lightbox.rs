//! Image lightbox: one shared modal with zoom, download and share.
//!
//! The modal is created on first open and reused afterwards. Viewer state
//! lives in a thread-local [`Lightbox`]; the DOM only mirrors it.

use crate::dom;
use crate::toast;
use ccs_content::html::{LIGHTBOX_SRC_ATTR, LIGHTBOX_TITLE_ATTR};
use ccs_widgets::lightbox::{
    Lightbox, LightboxItem, ShareOutcome, SharePayload, ZoomState, download_filename,
};
use ccs_widgets::toast::Notice;
use gloo_utils::{body, window};
use std::cell::RefCell;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{Element, HtmlAnchorElement, HtmlImageElement, MouseEvent, WheelEvent};

const MODAL_ID: &str = "imageLightboxModal";
const IMAGE_ID: &str = "modalImage";
const CAPTION_ID: &str = "modalCaption";

const MODAL_MARKUP: &str = r#"
    <div class="image-modal-content">
        <span class="image-modal-close" title="Close">&times;</span>
        <img class="image-modal-img" id="modalImage" alt="">
        <div class="image-modal-caption" id="modalCaption"></div>
        <div class="image-modal-controls">
            <button class="image-control-btn" data-action="download" title="Download">⬇️ Download</button>
            <button class="image-control-btn" data-action="share" title="Share">🔗 Share</button>
        </div>
    </div>
"#;

thread_local! {
    static VIEWER: RefCell<Lightbox> = RefCell::new(Lightbox::default());
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = navigator, js_name = share, catch)]
    fn navigator_share(data: &JsValue) -> Result<js_sys::Promise, JsValue>;

    #[wasm_bindgen(js_namespace = ["navigator", "clipboard"], js_name = writeText, catch)]
    fn clipboard_write_text(text: &str) -> Result<js_sys::Promise, JsValue>;
}

fn modal() -> Option<Element> {
    dom::by_id(MODAL_ID)
}

fn modal_image() -> Option<HtmlImageElement> {
    dom::by_id_typed(IMAGE_ID)
}

fn ensure_modal() -> Result<Element, JsValue> {
    if let Some(existing) = modal() {
        return Ok(existing);
    }

    let modal = dom::create_element("div")?;
    modal.set_id(MODAL_ID);
    modal.set_class_name("image-modal");
    modal.set_inner_html(MODAL_MARKUP);
    dom::append_to_body(&modal)?;

    let backdrop = modal.clone();
    dom::listen(&modal, "click", move |e: MouseEvent| {
        let on_backdrop = e
            .target()
            .and_then(|t| t.dyn_into::<Element>().ok())
            .is_some_and(|t| t == backdrop);
        if on_backdrop {
            close();
            return;
        }
        if dom::closest_from_target(e.target(), ".image-modal-close").is_some() {
            close();
            return;
        }
        let action = dom::closest_from_target(e.target(), "[data-action]")
            .and_then(|b| b.get_attribute("data-action"));
        match action.as_deref() {
            Some("download") => download(),
            Some("share") => share(),
            _ => {}
        }
    })?;

    if let Some(img) = modal_image() {
        let target = img.clone();
        dom::listen_active(&img, "wheel", move |e: WheelEvent| {
            e.prevent_default();
            let zoom = VIEWER.with(|v| v.borrow_mut().wheel(e.delta_y()));
            show_zoom(&target, zoom);
        })?;
        let target = img.clone();
        dom::listen(&img, "click", move |_: MouseEvent| {
            let zoom = VIEWER.with(|v| v.borrow_mut().click());
            show_zoom(&target, zoom);
        })?;
    }

    Ok(modal)
}

fn show_zoom(img: &HtmlImageElement, zoom: ZoomState) {
    dom::set_style(img, "transform", &zoom.transform());
    dom::set_style(img, "cursor", zoom.cursor());
}

pub fn open(src: &str, title: &str) -> Result<(), JsValue> {
    let modal = ensure_modal()?;
    VIEWER.with(|v| v.borrow_mut().open(src, title));

    if let Some(img) = modal_image() {
        img.set_src(src);
        show_zoom(&img, VIEWER.with(|v| v.borrow().zoom()));
    }
    if let Some(caption) = dom::by_id(CAPTION_ID) {
        dom::set_text(&caption, title);
    }
    dom::add_class(&modal, "active");
    dom::set_style(&body(), "overflow", "hidden");
    Ok(())
}

/// Open the lightbox for a click inside a rendered card, if it hit an image overlay.
pub fn open_from_event(e: &MouseEvent) {
    let Some(trigger) = dom::closest_from_target(e.target(), &format!("[{LIGHTBOX_SRC_ATTR}]"))
    else {
        return;
    };
    let src = trigger.get_attribute(LIGHTBOX_SRC_ATTR).unwrap_or_default();
    let title = trigger.get_attribute(LIGHTBOX_TITLE_ATTR).unwrap_or_default();
    if let Err(err) = open(&src, &title) {
        gloo_console::error!("failed to open image viewer:", err);
    }
}

pub fn close() {
    VIEWER.with(|v| v.borrow_mut().close());
    let Some(modal) = modal() else {
        return;
    };
    dom::remove_class(&modal, "active");
    dom::clear_style(&body(), "overflow");
    if let Some(img) = modal_image() {
        show_zoom(&img, VIEWER.with(|v| v.borrow().zoom()));
    }
}

pub fn is_open() -> bool {
    VIEWER.with(|v| v.borrow().is_open())
}

fn current_item() -> Option<LightboxItem> {
    VIEWER.with(|v| v.borrow().item().cloned())
}

pub fn download() {
    let Some(item) = current_item() else {
        return;
    };
    let link = dom::create_element("a")
        .and_then(|el| el.dyn_into::<HtmlAnchorElement>().map_err(JsValue::from));
    let link = match link {
        Ok(link) => link,
        Err(err) => {
            gloo_console::error!("failed to start download:", err);
            return;
        }
    };
    link.set_href(&item.src);
    link.set_download(&download_filename(&item.title));
    if dom::append_to_body(&link).is_ok() {
        link.click();
        link.remove();
        toast::show(Notice::Downloaded);
    }
}

pub fn share() {
    let Some(item) = current_item() else {
        return;
    };
    spawn_local(async move {
        let outcome = share_item(&item).await;
        toast::show(outcome.notice());
    });
}

async fn share_item(item: &LightboxItem) -> ShareOutcome {
    let origin = window().location().origin().unwrap_or_default();
    let payload = SharePayload::for_item(item, &origin);

    if can_share() {
        match native_share(&payload).await {
            Ok(()) => return ShareOutcome::Shared,
            Err(err) => gloo_console::log!("share sheet dismissed, copying link instead:", err),
        }
    }

    match copy_text(&payload.url).await {
        Ok(()) => ShareOutcome::Copied,
        Err(err) => {
            gloo_console::warn!("clipboard write failed:", err);
            ShareOutcome::CopyFailed
        }
    }
}

fn can_share() -> bool {
    js_sys::Reflect::has(&window().navigator(), &JsValue::from_str("share")).unwrap_or(false)
}

async fn native_share(payload: &SharePayload) -> Result<(), JsValue> {
    let data = serde_wasm_bindgen::to_value(payload)?;
    JsFuture::from(navigator_share(&data)?).await?;
    Ok(())
}

async fn copy_text(text: &str) -> Result<(), JsValue> {
    JsFuture::from(clipboard_write_text(text)?).await?;
    Ok(())
}
