//! Page-wide state: tunables and the preference store.
//!
//! Uses `thread_local!` storage (WASM is single-threaded).

use ccs_storage::{KeyValueStore, NoopStore};
use ccs_widgets::config::SiteConfig;
use std::cell::RefCell;
use std::rc::Rc;

use crate::dom;

const CONFIG_ELEMENT_ID: &str = "siteConfig";

/// `window.localStorage` behind the [`KeyValueStore`] seam.
pub struct BrowserStore {
    storage: web_sys::Storage,
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(|e| anyhow::anyhow!("localStorage.getItem({key}) failed: {e:?}"))
    }

    fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        self.storage
            .set_item(key, value)
            .map_err(|e| anyhow::anyhow!("localStorage.setItem({key}) failed: {e:?}"))
    }
}

fn open_store() -> Rc<dyn KeyValueStore> {
    let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
    match storage {
        Some(storage) => Rc::new(BrowserStore { storage }),
        None => {
            gloo_console::warn!("localStorage unavailable; preferences will not be kept");
            Rc::new(NoopStore)
        }
    }
}

thread_local! {
    static CONFIG: RefCell<SiteConfig> = RefCell::new(SiteConfig::default());
    static STORE: Rc<dyn KeyValueStore> = open_store();
}

pub fn config() -> SiteConfig {
    CONFIG.with(|c| c.borrow().clone())
}

pub fn store() -> Rc<dyn KeyValueStore> {
    STORE.with(Rc::clone)
}

/// Apply the optional `#siteConfig` JSON block. Bad JSON keeps the defaults.
pub fn load_config() {
    let Some(raw) = dom::by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text_content()) else {
        return;
    };
    match SiteConfig::from_json(&raw) {
        Ok(config) => CONFIG.with(|c| *c.borrow_mut() = config),
        Err(err) => gloo_console::warn!("ignoring malformed #siteConfig:", err.to_string()),
    }
}
