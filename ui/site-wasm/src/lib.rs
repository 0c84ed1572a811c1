//! College of Computer Studies site front end.
//!
//! Each feature module initialises itself only when its markup is present on
//! the page, so one bundle serves every page of the site.

pub mod animations;
pub mod announcements;
pub mod contact;
pub mod dom;
pub mod faculty;
pub mod lazy_load;
pub mod lightbox;
pub mod logging;
pub mod nav;
pub mod state;
pub mod tabs;
pub mod toast;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, KeyboardEvent};

/// WASM entry point – called automatically when the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    banner();
    state::load_config();
    logging::init(&state::config().log_filter);

    init_feature("navigation", nav::init);
    init_feature("animations", animations::init);
    init_feature("program tabs", tabs::init);
    init_feature("faculty directory", faculty::init);
    init_feature("announcements", announcements::init);
    init_feature("contact form", contact::init);
    lazy_load::arm();

    bind_escape()?;
    expose_globals()
}

/// A broken feature is logged and skipped; the rest of the page still works.
fn init_feature(name: &str, init: fn() -> Result<(), JsValue>) {
    if let Err(err) = init() {
        gloo_console::error!(format!("{name} failed to initialise:"), err);
    }
}

fn banner() {
    gloo_console::log!(
        "%c College of Computer Studies ",
        "background: #0066ff; color: white; font-size: 20px; padding: 10px;"
    );
    gloo_console::log!(
        "%c Innovating Tomorrow's Technology Leaders ",
        "font-size: 14px; color: #0066ff;"
    );
}

fn bind_escape() -> Result<(), JsValue> {
    dom::listen(&gloo_utils::document(), "keydown", |e: KeyboardEvent| {
        if e.key() != "Escape" {
            return;
        }
        contact::close_modal();
        if lightbox::is_open() {
            lightbox::close();
        }
    })
}

fn set_global(name: &str, value: &JsValue) -> Result<(), JsValue> {
    js_sys::Reflect::set(&gloo_utils::window(), &JsValue::from_str(name), value)?;
    Ok(())
}

/// Functions the page markup calls from inline handlers.
fn expose_globals() -> Result<(), JsValue> {
    let toggle = Closure::<dyn Fn(JsValue)>::new(|button: JsValue| {
        if let Ok(button) = button.dyn_into::<Element>() {
            tabs::toggle_accordion(&button);
        }
    });
    set_global("toggleAccordion", toggle.as_ref())?;
    toggle.forget();

    let open = Closure::<dyn Fn(JsValue, JsValue)>::new(|src: JsValue, title: JsValue| {
        let src = src.as_string().unwrap_or_default();
        let title = title.as_string().unwrap_or_default();
        if let Err(err) = lightbox::open(&src, &title) {
            gloo_console::error!("failed to open image viewer:", err);
        }
    });
    set_global("openImageModal", open.as_ref())?;
    open.forget();

    let actions: [(&str, fn()); 4] = [
        ("closeModal", contact::close_modal),
        ("closeImageModal", lightbox::close),
        ("downloadImage", lightbox::download),
        ("shareImage", lightbox::share),
    ];
    for (name, action) in actions {
        let cb = Closure::<dyn Fn()>::new(action);
        set_global(name, cb.as_ref())?;
        cb.forget();
    }
    Ok(())
}
